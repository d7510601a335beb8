//! Document endpoints port.

use async_trait::async_trait;

use crate::document::{DocumentUpload, StoredDocument};
use crate::error::ApiError;

#[async_trait]
pub trait DocumentApiPort: Send + Sync {
    /// `POST /documents` multipart upload.
    async fn upload(&self, upload: &DocumentUpload) -> Result<StoredDocument, ApiError>;

    /// `GET /documents`
    async fn list(&self) -> Result<Vec<StoredDocument>, ApiError>;

    /// `GET /documents/:id/preview`: raw bytes for preview rendering.
    async fn preview(&self, id: &str) -> Result<Vec<u8>, ApiError>;
}
