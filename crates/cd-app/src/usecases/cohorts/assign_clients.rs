use std::sync::Arc;

use tracing::info;

use cd_core::cohort::Cohort;
use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

/// Use case for moving clients into a cohort.
pub struct AssignClients {
    cohorts: Arc<dyn CohortApiPort>,
}

impl AssignClients {
    pub fn new(cohorts: Arc<dyn CohortApiPort>) -> Self {
        Self { cohorts }
    }

    pub async fn execute(&self, cohort_id: &str, client_ids: &[String]) -> Result<Cohort, ApiError> {
        let cohort = self.cohorts.assign_clients(cohort_id, client_ids).await?;
        info!(
            id = %cohort.id,
            assigned = client_ids.len(),
            members = cohort.client_count,
            "clients assigned to cohort"
        );
        Ok(cohort)
    }
}
