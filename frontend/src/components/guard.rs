use crate::{
    state::auth::use_auth,
    utils::navigation::{use_navigator, LOGIN_PATH},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let navigate = use_navigator();
    create_effect(move |_| {
        if !is_authenticated.get() {
            log::debug!("no session token; redirecting to {}", LOGIN_PATH);
            untrack(|| navigate.call(LOGIN_PATH.to_string()));
        }
    });
    view! {
        <Show when=move || is_authenticated.get()>
            {children()}
        </Show>
    }
}
