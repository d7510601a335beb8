use std::sync::Arc;

use cd_core::document::StoredDocument;
use cd_core::error::ApiError;
use cd_core::ports::DocumentApiPort;

pub struct ListDocuments {
    documents: Arc<dyn DocumentApiPort>,
}

impl ListDocuments {
    pub fn new(documents: Arc<dyn DocumentApiPort>) -> Self {
        Self { documents }
    }

    pub async fn execute(&self) -> Result<Vec<StoredDocument>, ApiError> {
        self.documents.list().await
    }
}
