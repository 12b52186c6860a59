use crate::api::{ApiError, Credentials};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

pub fn login_failure_message(error: &ApiError) -> String {
    if error.is_login_failed() {
        error.to_string()
    } else {
        format!("Login failed: {}", error)
    }
}
