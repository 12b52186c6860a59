use crate::state::auth::use_logout;
use leptos::*;

/// Visiting `/logout` signs out immediately.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let logout = use_logout();
    create_effect(move |_| untrack(|| logout.call(())));
    view! { <div class="min-h-screen bg-surface"></div> }
}
