use contracts::tenant::{Tenant, TenantPlan, UpdateTenant};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tenants::api;
use crate::navigation::{use_navigation, Route};
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::format::{format_date, plan_label, role_label, truncate_email};
use crate::system::auth::context::use_auth;

#[component]
pub fn TenantDetails(id: String) -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, _) = use_auth();

    let id = StoredValue::new(id);
    let (tenant, set_tenant) = signal(Option::<Tenant>::None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    // Form state
    let (name, set_name) = signal(String::new());
    let (plan, set_plan) = signal("free".to_string());
    let (is_active, set_is_active) = signal(true);

    let apply = move |fetched: Tenant| {
        set_name.set(fetched.name.clone());
        set_plan.set(fetched.plan.as_str().to_string());
        set_is_active.set(fetched.is_active);
        set_tenant.set(Some(fetched));
    };

    let fetch = move || {
        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        spawn_local(async move {
            match api::get(&token, &id.get_value()).await {
                Ok(fetched) => apply(fetched),
                // A failed fetch by id leaves the detail view
                Err(_) => nav.go(Route::Tenants(Default::default())),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let selected_plan = TenantPlan::ALL
            .into_iter()
            .find(|option| option.as_str() == plan.get());
        let payload = UpdateTenant {
            name: Some(name.get()),
            plan: selected_plan,
            is_active: Some(is_active.get()),
        };

        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        set_saving.set(true);
        spawn_local(async move {
            match api::update(&token, &id.get_value(), &payload).await {
                Ok(updated) => apply(updated),
                Err(e) => log::error!("save tenant failed: {}", e),
            }
            set_saving.set(false);
        });
    };

    let handle_delete = move |_| {
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
            match api::delete(&token, &id.get_value()).await {
                Ok(()) => nav.go(Route::Tenants(Default::default())),
                Err(e) => log::error!("delete tenant failed: {}", e),
            }
        });
    };

    let plan_options: Vec<(String, String)> = TenantPlan::ALL
        .iter()
        .map(|plan| (plan.as_str().to_string(), plan_label(*plan).to_string()))
        .collect();

    let details_panel = move || {
        tenant.get().map(|tenant| {
            view! {
                <div class="panel">
                    <h2 class="panel__title">"Details"</h2>
                    <dl class="details">
                        <div class="details__row">
                            <dt>"Plan"</dt>
                            <dd>{plan_label(tenant.plan)}</dd>
                        </div>
                        <div class="details__row">
                            <dt>"Members"</dt>
                            <dd>{tenant.member_count.unwrap_or(0).to_string()}</dd>
                        </div>
                        <div class="details__row">
                            <dt>"Created"</dt>
                            <dd>{format_date(Some(tenant.created_at))}</dd>
                        </div>
                        <div class="details__row">
                            <dt>"Updated"</dt>
                            <dd>{format_date(Some(tenant.updated_at))}</dd>
                        </div>
                    </dl>
                </div>
            }
        })
    };

    let members_panel = move || {
        tenant.get().and_then(|tenant| {
            let memberships = tenant.memberships.unwrap_or_default();
            (!memberships.is_empty()).then(|| {
                view! {
                    <div class="panel">
                        <h2 class="panel__title">"Members"</h2>
                        <ul class="membership-list">
                            {memberships
                                .into_iter()
                                .map(|membership| {
                                    let identity_id = membership.identity_id.clone();
                                    let identity_email = membership
                                        .identity
                                        .as_ref()
                                        .map(|identity| truncate_email(&identity.email, 30))
                                        .unwrap_or_else(|| membership.identity_id.clone());
                                    view! {
                                        <li class="membership-list__item">
                                            <button
                                                class="link link--primary"
                                                on:click=move |_| {
                                                    nav.go(Route::IdentityDetails(identity_id.clone()))
                                                }
                                            >
                                                {identity_email}
                                            </button>
                                            <Badge>{role_label(membership.role)}</Badge>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })
        })
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="page__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <div class="page">
                <div class="page__header">
                    <div class="page__heading">
                        <button
                            class="button button--secondary"
                            on:click=move |_| nav.go(Route::Tenants(Default::default()))
                        >
                            "\u{2190}"
                        </button>
                        <div>
                            <h1 class="page__title">
                                {move || tenant.get().map(|t| t.name).unwrap_or_default()}
                            </h1>
                            <div class="page__badges">
                                {move || {
                                    tenant
                                        .get()
                                        .map(|t| {
                                            if t.is_active {
                                                view! { <Badge variant="success">"Active"</Badge> }
                                                    .into_any()
                                            } else {
                                                view! { <Badge variant="warning">"Inactive"</Badge> }
                                                    .into_any()
                                            }
                                        })
                                }}
                            </div>
                        </div>
                    </div>
                    <div class="page__actions">
                        <button class="button button--danger" on:click=handle_delete>
                            "Delete"
                        </button>
                    </div>
                </div>

                <div class="page__grid">
                    <div class="panel panel--wide">
                        <h2 class="panel__title">"Tenant"</h2>
                        <form class="form" on:submit=handle_save>
                            <Input
                                label="Slug"
                                value=Signal::derive(move || {
                                    tenant.get().map(|t| t.slug).unwrap_or_default()
                                })
                                disabled=true
                            />
                            <Input
                                label="Name"
                                value=name
                                on_input=Callback::new(move |value| set_name.set(value))
                                required=true
                            />
                            <Select
                                label="Plan"
                                value=plan
                                on_change=Callback::new(move |value| set_plan.set(value))
                                options=plan_options.clone()
                            />
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_active.get()
                                    on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                                />
                                "Active tenant"
                            </label>
                            <div class="form__actions">
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <div class="page__side">{details_panel} {members_panel}</div>
                </div>
            </div>
        </Show>
    }
}
