use super::{
    client::ApiClient,
    types::{ApiError, Credentials, SignInRequest, SignInResponse},
};

impl ApiClient {
    /// Exchanges credentials for a session token and starts the session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.endpoint("/users/sign_in").await;
        let payload = SignInRequest {
            user: Credentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        };
        let response = self
            .send(self.http_client().post(url).json(&payload))
            .await?;
        let body: SignInResponse = self.map_json_response(response).await?;
        let token = body
            .token()
            .ok_or_else(ApiError::login_failed)?
            .to_string();
        self.session().start(&token)?;
        log::info!("signed in as {}", email);
        Ok(token)
    }

    pub fn sign_out(&self) {
        self.session().clear();
        log::info!("signed out");
    }
}
