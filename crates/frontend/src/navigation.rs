use leptos::prelude::*;

/// Screens of the admin app. Kept in a context signal instead of URL state;
/// switching recreates the target screen, so per-screen UI state (sort,
/// search) resets on navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Identities(IdentitiesParams),
    IdentityDetails(String),
    Tenants(TenantsParams),
    TenantDetails(String),
}

/// Entry parameters for the identities screen (dashboard quick links)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentitiesParams {
    pub locked_only: bool,
    pub open_create: bool,
}

/// Entry parameters for the tenants screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TenantsParams {
    pub open_create: bool,
}

#[derive(Clone, Copy)]
pub struct Navigation(RwSignal<Route>);

impl Navigation {
    pub fn new() -> Self {
        Self(RwSignal::new(Route::Dashboard))
    }

    pub fn current(&self) -> Route {
        self.0.get()
    }

    pub fn go(&self, route: Route) {
        self.0.set(route);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the navigation context
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().expect("Navigation not found in context")
}
