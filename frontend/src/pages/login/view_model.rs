use super::utils::{login_failure_message, LoginFormState, LOGIN_SUCCESS_MESSAGE};
use crate::api::{ApiError, Credentials};
use crate::state::{
    auth,
    toast::{use_toasts, Toasts},
};
use crate::utils::navigation::{use_navigator, DASHBOARD_PATH};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub login_action: Action<Credentials, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        self.login_action.dispatch(self.form.to_credentials());
    }
}

fn apply_login_result(
    result: Option<Result<(), ApiError>>,
    toasts: Toasts,
    form: LoginFormState,
    navigate: Callback<String>,
) {
    match result {
        Some(Ok(())) => {
            toasts.success(LOGIN_SUCCESS_MESSAGE);
            untrack(|| navigate.call(DASHBOARD_PATH.to_string()));
        }
        Some(Err(err)) => {
            log::warn!("login failed: {}", err);
            form.clear_password();
            toasts.error(login_failure_message(&err));
        }
        None => {}
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let login_action = auth::use_login_action();
    let toasts = use_toasts();
    let navigate = use_navigator();

    create_effect(move |_| {
        apply_login_result(login_action.value().get(), toasts, form, navigate);
    });

    LoginViewModel { form, login_action }
}
