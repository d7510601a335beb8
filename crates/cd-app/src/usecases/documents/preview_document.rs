use std::sync::Arc;

use cd_core::error::ApiError;
use cd_core::ports::DocumentApiPort;

/// Use case for fetching a document's bytes for preview rendering.
pub struct PreviewDocument {
    documents: Arc<dyn DocumentApiPort>,
}

impl PreviewDocument {
    pub fn new(documents: Arc<dyn DocumentApiPort>) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.documents.preview(id).await
    }
}
