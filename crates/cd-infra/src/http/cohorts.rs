//! Cohort endpoints adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use cd_core::cohort::{Cohort, CohortDraft, CohortUpdate};
use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

use super::RestClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignBody<'a> {
    client_ids: &'a [String],
}

pub struct HttpCohortApi {
    client: Arc<RestClient>,
}

impl HttpCohortApi {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CohortApiPort for HttpCohortApi {
    async fn list(&self) -> Result<Vec<Cohort>, ApiError> {
        self.client.get_json("/cohorts").await
    }

    async fn create(&self, draft: &CohortDraft) -> Result<Cohort, ApiError> {
        self.client.post_json("/cohorts", draft).await
    }

    async fn update(&self, id: &str, update: &CohortUpdate) -> Result<Cohort, ApiError> {
        self.client.put_json(&format!("/cohorts/{id}"), update).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/cohorts/{id}")).await
    }

    async fn assign_clients(&self, id: &str, client_ids: &[String]) -> Result<Cohort, ApiError> {
        self.client
            .post_json(&format!("/cohorts/{id}/assign"), &AssignBody { client_ids })
            .await
    }
}
