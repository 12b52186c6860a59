use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::APP_TITLE},
    pages::{
        home::HomePage, login::LoginPage, logout::LogoutPage, vacations::VacationsPage,
    },
    state::{auth::AuthProvider, session::Session, toast::provide_toasts},
    utils::navigation::{DASHBOARD_PATH, LOGIN_PATH},
};

pub const HOME_PATH: &str = "/";
pub const LOGOUT_PATH: &str = "/logout";

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

/// Composition root: one session, one client, shared auth and toast state.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(Session::platform_default()));
    provide_toasts();
    view! {
        <Title text=APP_TITLE/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=LOGOUT_PATH view=LogoutPage/>
                    <Route path=DASHBOARD_PATH view=ProtectedVacations/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedVacations() -> impl IntoView {
    view! { <RequireAuth><VacationsPage/></RequireAuth> }
}
