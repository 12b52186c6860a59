use crate::{
    api::ApiClient,
    state::{
        session::Session,
        toast::{provide_toasts, Toasts},
    },
};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` inside a fresh reactive runtime. Effects do not run under
/// `ssr`, so the output is the initial state of the view.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Provides a client that never reaches a backend plus a toast queue.
pub fn provide_offline_client(session: Session) -> Toasts {
    provide_context(ApiClient::new_with_base_url("http://offline.invalid", session));
    provide_toasts()
}
