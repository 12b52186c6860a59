use crate::utils::navigation::DASHBOARD_PATH;
use leptos::*;
use leptos_router::Redirect;

/// `/` has no content of its own.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH/> }
}
