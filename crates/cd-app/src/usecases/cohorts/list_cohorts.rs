use std::sync::Arc;

use cd_core::cohort::Cohort;
use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

pub struct ListCohorts {
    cohorts: Arc<dyn CohortApiPort>,
}

impl ListCohorts {
    pub fn new(cohorts: Arc<dyn CohortApiPort>) -> Self {
        Self { cohorts }
    }

    pub async fn execute(&self) -> Result<Vec<Cohort>, ApiError> {
        self.cohorts.list().await
    }
}
