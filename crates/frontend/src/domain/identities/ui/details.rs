use contracts::identity::{Identity, UpdateIdentity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::identities::api;
use crate::navigation::{use_navigation, Route};
use crate::shared::components::ui::{Badge, Input, Modal};
use crate::shared::format::{format_date, role_label};
use crate::system::auth::context::use_auth;

#[component]
pub fn IdentityDetails(id: String) -> impl IntoView {
    let nav = use_navigation();
    let (auth_state, _) = use_auth();

    let id = StoredValue::new(id);
    let (identity, set_identity) = signal(Option::<Identity>::None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (show_password_modal, set_show_password_modal) = signal(false);

    // Form state
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (is_active, set_is_active) = signal(true);

    let apply = move |fetched: Identity| {
        set_name.set(fetched.name.clone().unwrap_or_default());
        set_phone.set(fetched.phone.clone().unwrap_or_default());
        set_is_active.set(fetched.is_active);
        set_identity.set(Some(fetched));
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
                Err(_) => nav.go(Route::Identities(Default::default())),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = UpdateIdentity {
            name: Some(name.get()),
            phone: Some(phone.get()),
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
                Err(e) => log::error!("save identity failed: {}", e),
            }
            set_saving.set(false);
        });
    };

    let handle_unlock = move |_| {
        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        spawn_local(async move {
            match api::unlock(&token, &id.get_value()).await {
                Ok(unlocked) => apply(unlocked),
                Err(e) => log::error!("unlock identity failed: {}", e),
            }
        });
    };

    let handle_delete = move |_| {
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
            match api::delete(&token, &id.get_value()).await {
                Ok(()) => nav.go(Route::Identities(Default::default())),
                Err(e) => log::error!("delete identity failed: {}", e),
            }
        });
    };

    let status_badges = move || {
        identity.get().map(|identity| {
            view! {
                <div class="page__badges">
                    {if identity.is_locked {
                        view! { <Badge variant="danger">"Locked"</Badge> }.into_any()
                    } else if identity.is_active {
                        view! { <Badge variant="success">"Active"</Badge> }.into_any()
                    } else {
                        view! { <Badge variant="warning">"Inactive"</Badge> }.into_any()
                    }}
                    {identity
                        .email_verified
                        .then(|| view! { <Badge variant="info">"Email verified"</Badge> })}
                </div>
            }
        })
    };

    let details_panel = move || {
        identity.get().map(|identity| {
            view! {
                <div class="panel">
                    <h2 class="panel__title">"Details"</h2>
                    <dl class="details">
                        <div class="details__row">
                            <dt>"Created"</dt>
                            <dd>{format_date(Some(identity.created_at))}</dd>
                        </div>
                        <div class="details__row">
                            <dt>"Updated"</dt>
                            <dd>{format_date(Some(identity.updated_at))}</dd>
                        </div>
                        <div class="details__row">
                            <dt>"Last login"</dt>
                            <dd>{format_date(identity.last_login_at)}</dd>
                        </div>
                        {identity
                            .is_locked
                            .then(|| {
                                view! {
                                    <div class="details__row">
                                        <dt>"Lock reason"</dt>
                                        <dd class="details__danger">
                                            {identity.lock_reason.clone().unwrap_or_else(|| "-".into())}
                                        </dd>
                                    </div>
                                    <div class="details__row">
                                        <dt>"Failed logins"</dt>
                                        <dd>{identity.failed_login_attempts.to_string()}</dd>
                                    </div>
                                }
                            })}
                    </dl>
                </div>
            }
        })
    };

    let memberships_panel = move || {
        identity.get().and_then(|identity| {
            let memberships = identity.memberships.unwrap_or_default();
            (!memberships.is_empty()).then(|| {
                view! {
                    <div class="panel">
                        <h2 class="panel__title">"Memberships"</h2>
                        <ul class="membership-list">
                            {memberships
                                .into_iter()
                                .map(|membership| {
                                    let tenant_id = membership.tenant_id.clone();
                                    let tenant_name = membership
                                        .tenant
                                        .as_ref()
                                        .map(|tenant| tenant.name.clone())
                                        .unwrap_or_else(|| membership.tenant_id.clone());
                                    let tenant_slug = membership
                                        .tenant
                                        .as_ref()
                                        .map(|tenant| tenant.slug.clone())
                                        .unwrap_or_default();
                                    view! {
                                        <li class="membership-list__item">
                                            <div>
                                                <button
                                                    class="link link--primary"
                                                    on:click=move |_| {
                                                        nav.go(Route::TenantDetails(tenant_id.clone()))
                                                    }
                                                >
                                                    {tenant_name}
                                                </button>
                                                <p class="membership-list__slug">{tenant_slug}</p>
                                            </div>
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
                            on:click=move |_| nav.go(Route::Identities(Default::default()))
                        >
                            "\u{2190}"
                        </button>
                        <div>
                            <h1 class="page__title">
                                {move || {
                                    identity.get().map(|i| i.email).unwrap_or_default()
                                }}
                            </h1>
                            {status_badges}
                        </div>
                    </div>
                    <div class="page__actions">
                        {move || {
                            identity
                                .get()
                                .map(|i| i.is_locked)
                                .unwrap_or(false)
                                .then(|| {
                                    view! {
                                        <button
                                            class="button button--success"
                                            on:click=handle_unlock
                                        >
                                            "Unlock"
                                        </button>
                                    }
                                })
                        }}
                        <button
                            class="button button--secondary"
                            on:click=move |_| set_show_password_modal.set(true)
                        >
                            "Reset password"
                        </button>
                        <button class="button button--danger" on:click=handle_delete>
                            "Delete"
                        </button>
                    </div>
                </div>

                <div class="page__grid">
                    <div class="panel panel--wide">
                        <h2 class="panel__title">"Profile"</h2>
                        <form class="form" on:submit=handle_save>
                            <Input
                                label="Email"
                                input_type="email"
                                value=Signal::derive(move || {
                                    identity.get().map(|i| i.email).unwrap_or_default()
                                })
                                disabled=true
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
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_active.get()
                                    on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                                />
                                "Active account"
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

                    <div class="page__side">{details_panel} {memberships_panel}</div>
                </div>

                <Show when=move || show_password_modal.get()>
                    <SetPasswordModal
                        identity_id=id.get_value()
                        on_close=Callback::new(move |_| set_show_password_modal.set(false))
                    />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn SetPasswordModal(identity_id: String, on_close: Callback<()>) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let identity_id = StoredValue::new(identity_id);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let password_val = password.get();
        if password_val != confirm_password.get() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if password_val.len() < 8 {
            set_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }

        let token = auth_state
            .get_untracked()
            .access_token
            .unwrap_or_default();
        set_saving.set(true);
        spawn_local(async move {
            match api::set_password(&token, &identity_id.get_value(), password_val).await {
                Ok(()) => on_close.run(()),
                Err(message) => set_error.set(Some(message)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal title="Reset password" on_close=on_close>
            <form class="form" on:submit=submit>
                {move || {
                    error.get().map(|message| view! { <div class="error-message">{message}</div> })
                }}
                <Input
                    label="New password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value| set_password.set(value))
                    required=true
                />
                <Input
                    label="Confirm password"
                    input_type="password"
                    value=confirm_password
                    on_input=Callback::new(move |value| set_confirm_password.set(value))
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
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
