use super::{
    client::ApiClient,
    types::{ApiError, VacationEnvelope, VacationListResponse, VacationPayload},
};

const VACATIONS_PATH: &str = "/api/v1/vacations";

impl ApiClient {
    /// `params` are the already encoded query pairs of a list query.
    pub async fn list_vacations(
        &self,
        params: &[(String, String)],
    ) -> Result<VacationListResponse, ApiError> {
        let url = self.endpoint(VACATIONS_PATH).await;
        let response = self
            .send_authorized(self.http_client().get(url).query(params))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn create_vacation(&self, payload: VacationPayload) -> Result<(), ApiError> {
        let url = self.endpoint(VACATIONS_PATH).await;
        let body = VacationEnvelope { vacation: payload };
        let response = self
            .send_authorized(self.http_client().post(url).json(&body))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn update_vacation(&self, id: i64, payload: VacationPayload) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", VACATIONS_PATH, id))
            .await;
        let body = VacationEnvelope { vacation: payload };
        let response = self
            .send_authorized(self.http_client().put(url).json(&body))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_vacation(&self, id: i64) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("{}/{}", VACATIONS_PATH, id))
            .await;
        let response = self
            .send_authorized(self.http_client().delete(url))
            .await?;
        self.map_empty_response(response).await
    }
}
