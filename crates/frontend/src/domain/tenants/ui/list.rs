use contracts::page::PaginatedResponse;
use contracts::query::TenantListQuery;
use contracts::tenant::{CreateTenant, Tenant, TenantPlan};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tenants::api;
use crate::navigation::{use_navigation, Route, TenantsParams};
use crate::shared::components::data_table::{Column, DataTable, ServerPagination};
use crate::shared::components::ui::{Badge, Input, Modal, Select};
use crate::shared::format::{format_date_short, plan_label};
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;

fn plan_badge_variant(plan: TenantPlan) -> &'static str {
    match plan {
        TenantPlan::Free => "neutral",
        TenantPlan::Starter => "info",
        TenantPlan::Professional => "success",
        TenantPlan::Enterprise => "warning",
    }
}

#[component]
pub fn TenantList(params: TenantsParams) -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, _) = use_auth();

    let (page_data, set_page_data) = signal(Option::<PaginatedResponse<Tenant>>::None);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (show_create, set_show_create) = signal(params.open_create);

    let fetch = move || {
        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        let search_text = search.get_untracked();
        let query = TenantListQuery {
            page: page.get_untracked(),
            page_size: PAGE_SIZE,
            search: (!search_text.is_empty()).then_some(search_text),
            ..Default::default()
        };

        set_loading.set(true);
        spawn_local(async move {
            match api::list(&token, &query).await {
                Ok(result) => set_page_data.set(Some(result)),
                Err(e) => log::error!("fetch tenants failed: {}", e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        page.track();
        search.track();
        fetch();
    });

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this tenant?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        spawn_local(async move {
            match api::delete(&token, &id).await {
                Ok(()) => fetch(),
                Err(e) => log::error!("delete tenant failed: {}", e),
            }
        });
    };

    let columns = vec![
        Column::new("slug", "Slug").sortable().render(|tenant: Tenant| {
            view! { <span class="cell--mono">{tenant.slug.clone()}</span> }.into_any()
        }),
        Column::new("name", "Name").sortable().render(|tenant: Tenant| {
            view! { <span class="cell--strong">{tenant.name.clone()}</span> }.into_any()
        }),
        Column::new("plan", "Plan").render(|tenant: Tenant| {
            view! {
                <Badge variant=plan_badge_variant(tenant.plan)>{plan_label(tenant.plan)}</Badge>
            }
            .into_any()
        }),
        Column::new("member_count", "Members")
            .mobile_hidden()
            .render(|tenant: Tenant| tenant.member_count.unwrap_or(0).to_string().into_any()),
        Column::new("is_active", "Status").render(|tenant: Tenant| {
            if tenant.is_active {
                view! { <Badge variant="success">"Active"</Badge> }.into_any()
            } else {
                view! { <Badge variant="warning">"Inactive"</Badge> }.into_any()
            }
        }),
        Column::new("created_at", "Created")
            .sortable()
            .mobile_hidden()
            .render(|tenant: Tenant| format_date_short(tenant.created_at).into_any()),
    ];

    let data = Signal::derive(move || {
        page_data
            .get()
            .map(|result| result.data)
            .unwrap_or_default()
    });

    let pagination = Signal::derive(move || {
        page_data.get().map(|result| ServerPagination {
            page: page.get(),
            page_size: PAGE_SIZE,
            total: result.total,
            on_page_change: Callback::new(move |target| set_page.set(target)),
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Tenants"</h1>
                    <p class="page__subtitle">"Manage organizations"</p>
                </div>
                <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                    "New tenant"
                </button>
            </div>

            <DataTable
                data=data
                columns=columns
                loading=loading
                search_placeholder="Search by name or slug..."
                search_value=search
                on_search=Callback::new(move |query| set_search.set(query))
                on_row_click=Callback::new(move |tenant: Tenant| {
                    nav.go(Route::TenantDetails(tenant.id))
                })
                server_pagination=pagination
                actions=Callback::new(move |tenant: Tenant| {
                    let edit_id = tenant.id.clone();
                    let delete_id = tenant.id;
                    view! {
                        <div class="row-actions">
                            <button
                                class="link link--primary"
                                on:click=move |_| nav.go(Route::TenantDetails(edit_id.clone()))
                            >
                                "Edit"
                            </button>
                            <button
                                class="link link--danger"
                                on:click=move |_| handle_delete(delete_id.clone())
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                    .into_any()
                })
                empty_message="No tenants found"
            />

            <Show when=move || show_create.get()>
                <CreateTenantModal
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_created=Callback::new(move |_| {
                        set_show_create.set(false);
                        fetch();
                    })
                />
            </Show>
        </div>
    }
}

#[component]
fn CreateTenantModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (slug, set_slug) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (plan, set_plan) = signal("free".to_string());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let plan_options: Vec<(String, String)> = TenantPlan::ALL
        .iter()
        .map(|plan| (plan.as_str().to_string(), plan_label(*plan).to_string()))
        .collect();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let selected_plan = TenantPlan::ALL
            .into_iter()
            .find(|option| option.as_str() == plan.get());
        let payload = CreateTenant {
            slug: slug.get(),
            name: name.get(),
            plan: selected_plan,
        };

        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        set_saving.set(true);
        spawn_local(async move {
            match api::create(&token, &payload).await {
                Ok(_) => on_created.run(()),
                Err(message) => set_error.set(Some(message)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal title="New tenant" on_close=on_close>
            <form class="form" on:submit=submit>
                {move || {
                    error.get().map(|message| view! { <div class="error-message">{message}</div> })
                }}
                <Input
                    label="Slug *"
                    value=slug
                    placeholder="acme-inc"
                    on_input=Callback::new(move |value| set_slug.set(value))
                    required=true
                />
                <Input
                    label="Name *"
                    value=name
                    on_input=Callback::new(move |value| set_name.set(value))
                    required=true
                />
                <Select
                    label="Plan"
                    value=plan
                    on_change=Callback::new(move |value| set_plan.set(value))
                    options=plan_options
                />
                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
