use std::sync::Arc;

use tracing::info;

use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

pub struct DeleteCohort {
    cohorts: Arc<dyn CohortApiPort>,
}

impl DeleteCohort {
    pub fn new(cohorts: Arc<dyn CohortApiPort>) -> Self {
        Self { cohorts }
    }

    pub async fn execute(&self, id: &str) -> Result<(), ApiError> {
        self.cohorts.delete(id).await?;
        info!(id, "cohort deleted");
        Ok(())
    }
}
