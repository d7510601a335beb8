//! Cohort endpoints port.

use async_trait::async_trait;

use crate::cohort::{Cohort, CohortDraft, CohortUpdate};
use crate::error::ApiError;

#[async_trait]
pub trait CohortApiPort: Send + Sync {
    async fn list(&self) -> Result<Vec<Cohort>, ApiError>;

    async fn create(&self, draft: &CohortDraft) -> Result<Cohort, ApiError>;

    async fn update(&self, id: &str, update: &CohortUpdate) -> Result<Cohort, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /cohorts/:id/assign`: move clients into the cohort.
    async fn assign_clients(&self, id: &str, client_ids: &[String]) -> Result<Cohort, ApiError>;
}
