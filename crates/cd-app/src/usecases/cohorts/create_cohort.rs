use std::sync::Arc;

use tracing::info;

use cd_core::cohort::{Cohort, CohortDraft};
use cd_core::error::ApiError;
use cd_core::ports::CohortApiPort;

pub struct CreateCohort {
    cohorts: Arc<dyn CohortApiPort>,
}

impl CreateCohort {
    pub fn new(cohorts: Arc<dyn CohortApiPort>) -> Self {
        Self { cohorts }
    }

    pub async fn execute(&self, draft: &CohortDraft) -> Result<Cohort, ApiError> {
        let cohort = self.cohorts.create(draft).await?;
        info!(id = %cohort.id, name = %cohort.name, "cohort created");
        Ok(cohort)
    }
}
