use leptos::prelude::*;

use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let admin_name = move || {
        auth_state
            .get()
            .user_info
            .map(|user| user.name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let admin_email = move || {
        auth_state
            .get()
            .user_info
            .map(|user| user.email)
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <div class="header__spacer"></div>
            <div class="header__user">
                <div class="header__identity">
                    <p class="header__name">{admin_name}</p>
                    <p class="header__email">{admin_email}</p>
                </div>
                <button class="button button--secondary" on:click=move |_| do_logout(set_auth_state)>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
