use leptos::prelude::*;

use crate::layout::Shell;
use crate::navigation::Navigation;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Navigation::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
