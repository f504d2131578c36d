use leptos::prelude::*;

use crate::navigation::{use_navigation, Route};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigation();

    let item_class = move |active: bool| {
        if active {
            "sidebar__item sidebar__item--active"
        } else {
            "sidebar__item"
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"HiveAuth Admin"</div>
            <nav class="sidebar__nav">
                <button
                    class=move || item_class(matches!(nav.current(), Route::Dashboard))
                    on:click=move |_| nav.go(Route::Dashboard)
                >
                    "Dashboard"
                </button>
                <button
                    class=move || {
                        item_class(
                            matches!(
                                nav.current(),
                                Route::Identities(_) | Route::IdentityDetails(_)
                            ),
                        )
                    }
                    on:click=move |_| nav.go(Route::Identities(Default::default()))
                >
                    "Identities"
                </button>
                <button
                    class=move || {
                        item_class(
                            matches!(nav.current(), Route::Tenants(_) | Route::TenantDetails(_)),
                        )
                    }
                    on:click=move |_| nav.go(Route::Tenants(Default::default()))
                >
                    "Tenants"
                </button>
            </nav>
        </aside>
    }
}
