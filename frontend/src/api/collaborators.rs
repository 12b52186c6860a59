use super::{
    client::ApiClient,
    types::{ApiError, Collaborator},
};

impl ApiClient {
    pub async fn list_collaborators(&self) -> Result<Vec<Collaborator>, ApiError> {
        let url = self.endpoint("/api/v1/collaborators").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }
}
