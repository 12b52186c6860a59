use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{
    api::types::ApiError,
    config,
    state::session::Session,
    utils::navigation::{self, LOGIN_PATH},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .session
            .token()
            .ok_or_else(|| ApiError::unauthorized("No session token"))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    /// Sends a request carrying the session token. A 401 answer tears the
    /// session down and sends the user back to the login page.
    pub(crate) async fn send_authorized(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let headers = self.get_auth_headers()?;
        let response = self.send(request.headers(headers)).await?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("backend rejected the session token; signing out");
            self.session.clear();
            navigation::hard_redirect(LOGIN_PATH);
        }
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if let Some(responder) = find_mock(&request) {
            return responder.respond(&request)?.into_response();
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status_body(status, &body);
        log::error!("backend answered {}: {}", status, error);
        error
    }
}

/// The client provided by the composition root, or a fresh one bound to the
/// platform session when rendered outside of it.
pub fn use_api_client() -> ApiClient {
    leptos::use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::new(Session::platform_default()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use super::ApiError;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        status: u16,
        body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }

        pub fn into_response(self) -> Result<reqwest::Response, ApiError> {
            let body = serde_json::to_vec(&self.body)
                .map_err(|e| ApiError::unknown(format!("mock body: {}", e)))?;
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(body)
                .map_err(|e| ApiError::unknown(format!("mock response: {}", e)))?;
            Ok(reqwest::Response::from(response))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(host: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().expect("mock registry lock");
        mocks.retain(|(existing, _)| existing != &host);
        mocks.push((host, responder));
    }

    pub(super) fn find_mock(request: &reqwest::Request) -> Option<Arc<dyn TestResponder>> {
        let host = request.url().host_str()?;
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .find(|(registered, _)| registered == host)
            .map(|(_, responder)| responder.clone())
    }
}
