#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn provide_auth(is_authenticated: bool) -> AuthContext {
        let (auth, set_auth) = create_signal(AuthState { is_authenticated });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
