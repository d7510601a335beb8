use std::sync::Arc;

use cd_core::cohort::{Cohort, CohortUpdate};
use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

pub struct UpdateCohort {
    cohorts: Arc<dyn CohortApiPort>,
}

impl UpdateCohort {
    pub fn new(cohorts: Arc<dyn CohortApiPort>) -> Self {
        Self { cohorts }
    }

    pub async fn execute(&self, id: &str, update: &CohortUpdate) -> Result<Cohort, ApiError> {
        self.cohorts.update(id, update).await
    }
}
