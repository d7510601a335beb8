//! Document endpoints adapter.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use cd_core::document::{DocumentUpload, StoredDocument};
use cd_core::error::ApiError;
use cd_core::ports::DocumentApiPort;

use super::RestClient;

pub struct HttpDocumentApi {
    client: Arc<RestClient>,
}

impl HttpDocumentApi {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentApiPort for HttpDocumentApi {
    async fn upload(&self, upload: &DocumentUpload) -> Result<StoredDocument, ApiError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| ApiError::Decode(format!("invalid content type: {e}")))?;
        let form = Form::new()
            .text("kind", upload.kind.as_str())
            .part("file", part);
        self.client.post_multipart("/documents", form).await
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, ApiError> {
        self.client.get_json("/documents").await
    }

    async fn preview(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.client.get_bytes(&format!("/documents/{id}/preview")).await
    }
}
