use crate::api::{ApiClient, ApiError, Collaborator, VacationListResponse};
use std::rc::Rc;

use super::{
    form_state::{SaveOutcome, SaveRequest},
    query::ListQuery,
};

#[derive(Clone)]
pub struct VacationsRepository {
    client: Rc<ApiClient>,
}

impl VacationsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<VacationListResponse, ApiError> {
        self.client.list_vacations(&query.to_params()).await
    }

    /// Updates when the request targets a record, creates otherwise.
    pub async fn save(&self, request: SaveRequest) -> Result<SaveOutcome, ApiError> {
        match request.id {
            Some(id) => self
                .client
                .update_vacation(id, request.payload)
                .await
                .map(|_| SaveOutcome::Updated),
            None => self
                .client
                .create_vacation(request.payload)
                .await
                .map(|_| SaveOutcome::Created),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_vacation(id).await
    }

    pub async fn collaborators(&self) -> Result<Vec<Collaborator>, ApiError> {
        self.client.list_collaborators().await
    }
}
