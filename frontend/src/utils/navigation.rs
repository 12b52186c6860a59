use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Returns a navigation callback. Inside a `<Router/>` this performs client
/// side navigation; elsewhere it falls back to a full page load.
pub fn use_navigator() -> Callback<String> {
    if use_context::<RouterContext>().is_some() {
        let navigate = use_navigate();
        Callback::new(move |path: String| {
            log::debug!("navigating to {}", path);
            navigate(&path, NavigateOptions::default());
        })
    } else {
        Callback::new(|path: String| hard_redirect(&path))
    }
}

#[cfg(target_arch = "wasm32")]
pub fn hard_redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().map(|current| current == path).unwrap_or(false) {
            return;
        }
        let _ = location.set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn hard_redirect(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}
