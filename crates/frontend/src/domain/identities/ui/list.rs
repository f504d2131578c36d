use contracts::identity::{CreateIdentity, Identity};
use contracts::page::PaginatedResponse;
use contracts::query::IdentityListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::identities::api;
use crate::navigation::{use_navigation, IdentitiesParams, Route};
use crate::shared::components::data_table::{Column, DataTable, ServerPagination};
use crate::shared::components::ui::{Badge, Input, Modal};
use crate::shared::format::{format_date, truncate_email};
use crate::system::auth::context::use_auth;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn IdentityList(params: IdentitiesParams) -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, _) = use_auth();

    let (page_data, set_page_data) = signal(Option::<PaginatedResponse<Identity>>::None);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (show_create, set_show_create) = signal(params.open_create);
    let locked_only = params.locked_only;

    let fetch = move || {
        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        let search_text = search.get_untracked();
        let query = IdentityListQuery {
            page: page.get_untracked(),
            page_size: PAGE_SIZE,
            search: (!search_text.is_empty()).then_some(search_text),
            is_locked: locked_only.then_some(true),
            ..Default::default()
        };

        set_loading.set(true);
        spawn_local(async move {
            match api::list(&token, &query).await {
                Ok(result) => set_page_data.set(Some(result)),
                Err(e) => log::error!("fetch identities failed: {}", e),
            }
            set_loading.set(false);
        });
    };

    // Re-fetch whenever the page or the delegated search text changes
    Effect::new(move |_| {
        page.track();
        search.track();
        fetch();
    });

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this identity?")
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
                Err(e) => log::error!("delete identity failed: {}", e),
            }
        });
    };

    let columns = vec![
        Column::new("email", "Email").sortable().render(|identity: Identity| {
            view! {
                <span class="cell--strong" title=identity.email.clone()>
                    {truncate_email(&identity.email, 25)}
                </span>
            }
            .into_any()
        }),
        Column::new("name", "Name").sortable(),
        Column::new("status", "Status").render(|identity: Identity| {
            if identity.is_locked {
                view! { <Badge variant="danger">"Locked"</Badge> }.into_any()
            } else if identity.is_active {
                view! { <Badge variant="success">"Active"</Badge> }.into_any()
            } else {
                view! { <Badge variant="warning">"Inactive"</Badge> }.into_any()
            }
        }),
        Column::new("email_verified", "Verified")
            .mobile_hidden()
            .render(|identity: Identity| {
                if identity.email_verified {
                    view! { <Badge variant="success">"Verified"</Badge> }.into_any()
                } else {
                    view! { <Badge>"Pending"</Badge> }.into_any()
                }
            }),
        Column::new("last_login_at", "Last login")
            .sortable()
            .mobile_hidden()
            .render(|identity: Identity| format_date(identity.last_login_at).into_any()),
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
                    <h1 class="page__title">
                        {if locked_only { "Locked identities" } else { "Identities" }}
                    </h1>
                    <p class="page__subtitle">"Manage user accounts"</p>
                </div>
                <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                    "New identity"
                </button>
            </div>

            <DataTable
                data=data
                columns=columns
                loading=loading
                search_placeholder="Search by email or name..."
                search_value=search
                on_search=Callback::new(move |query| set_search.set(query))
                on_row_click=Callback::new(move |identity: Identity| {
                    nav.go(Route::IdentityDetails(identity.id))
                })
                server_pagination=pagination
                actions=Callback::new(move |identity: Identity| {
                    let edit_id = identity.id.clone();
                    let delete_id = identity.id;
                    view! {
                        <div class="row-actions">
                            <button
                                class="link link--primary"
                                on:click=move |_| nav.go(Route::IdentityDetails(edit_id.clone()))
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
                empty_message="No identities found"
            />

            <Show when=move || show_create.get()>
                <CreateIdentityModal
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
fn CreateIdentityModal(
    on_close: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let password_val = password.get();
        if password_val.len() < 8 {
            set_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }

        let name_val = name.get();
        let phone_val = phone.get();
        let payload = CreateIdentity {
            email: email.get(),
            name: (!name_val.is_empty()).then_some(name_val),
            phone: (!phone_val.is_empty()).then_some(phone_val),
            password: password_val,
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
        <Modal title="New identity" on_close=on_close>
            <form class="form" on:submit=submit>
                {move || {
                    error.get().map(|message| view! { <div class="error-message">{message}</div> })
                }}
                <Input
                    label="Email *"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |value| set_email.set(value))
                    required=true
                />
                <Input
                    label="Name"
                    value=name
                    on_input=Callback::new(move |value| set_name.set(value))
                />
                <Input
                    label="Phone"
                    input_type="tel"
                    value=phone
                    on_input=Callback::new(move |value| set_phone.set(value))
                />
                <Input
                    label="Password *"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value| set_password.set(value))
                    required=true
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
