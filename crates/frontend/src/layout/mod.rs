pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::identities::ui::{details::IdentityDetails, list::IdentityList};
use crate::domain::tenants::ui::{details::TenantDetails, list::TenantList};
use crate::navigation::{use_navigation, Route};

use self::header::Header;
use self::sidebar::Sidebar;

/// Main application layout: sidebar, header and the routed content area.
#[component]
pub fn Shell() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match nav.current() {
                        Route::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                        Route::Identities(params) => {
                            view! { <IdentityList params=params /> }.into_any()
                        }
                        Route::IdentityDetails(id) => {
                            view! { <IdentityDetails id=id /> }.into_any()
                        }
                        Route::Tenants(params) => view! { <TenantList params=params /> }.into_any(),
                        Route::TenantDetails(id) => view! { <TenantDetails id=id /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
