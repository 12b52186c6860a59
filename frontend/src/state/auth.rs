use crate::{
    api::{use_api_client, ApiClient, ApiError, Credentials},
    state::toast::{use_toasts, Toasts},
    utils::navigation::{use_navigator, LOGIN_PATH},
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
}

fn create_auth_context(api: &ApiClient) -> AuthContext {
    create_signal(AuthState {
        is_authenticated: api.session().is_authenticated(),
    })
}

/// Seeds the auth state from the stored token. There is no remote check; a
/// stale token is only discovered when the backend answers 401.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_api_client();
    let ctx = create_auth_context(&api);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    credentials: Credentials,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match api.sign_in(&credentials.email, &credentials.password).await {
        Ok(_) => {
            set_auth_state.update(|state| state.is_authenticated = true);
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.is_authenticated = false);
            Err(error)
        }
    }
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.sign_out();
    set_auth_state.update(|state| state.is_authenticated = false);
}

pub fn use_login_action() -> Action<Credentials, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let api = api.clone();
        async move { login_request(credentials, &api, set_auth).await }
    })
}

/// Clears the session, confirms with a toast and leaves for the login page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();
    let toasts = use_toasts();
    let navigate = use_navigator();

    Callback::new(move |_| {
        sign_out_and_notify(&api, set_auth, toasts);
        navigate.call(LOGIN_PATH.to_string());
    })
}

fn sign_out_and_notify(api: &ApiClient, set_auth: WriteSignal<AuthState>, toasts: Toasts) {
    logout(api, set_auth);
    toasts.success("Logged out successfully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{MemoryTokenStore, Session};

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            assert!(!state.get().is_authenticated);
        });
    }

    #[test]
    fn auth_context_starts_from_stored_token() {
        with_runtime(|| {
            let signed_in = ApiClient::new_with_base_url(
                "http://unused",
                Session::new(MemoryTokenStore::with_token("tok")),
            );
            let (state, _) = create_auth_context(&signed_in);
            assert!(state.get().is_authenticated);

            let signed_out = ApiClient::new_with_base_url("http://unused", Session::in_memory());
            let (state, _) = create_auth_context(&signed_out);
            assert!(!state.get().is_authenticated);
        });
    }

    #[test]
    fn sign_out_clears_session_and_pushes_toast() {
        with_runtime(|| {
            let session = Session::new(MemoryTokenStore::with_token("tok"));
            let api = ApiClient::new_with_base_url("http://unused", session.clone());
            let (state, set_state) = create_auth_context(&api);
            let toasts = Toasts::new();

            sign_out_and_notify(&api, set_state, toasts);

            assert!(!state.get().is_authenticated);
            assert!(!session.is_authenticated());
            let items = toasts.items().get();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].message, "Logged out successfully");
        });
    }
}
