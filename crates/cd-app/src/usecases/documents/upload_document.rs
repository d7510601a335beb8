use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use cd_core::document::{DocumentUpload, StoredDocument};
use cd_core::ports::DocumentApiPort;

use crate::usecases::onboarding::{ProgressDto, ProgressSession};

/// What an upload leaves behind: the stored file and the resynced progress.
#[derive(Debug)]
pub struct UploadOutcome {
    pub document: StoredDocument,
    pub progress: ProgressDto,
}

/// Use case for uploading an onboarding document.
///
/// A stored document is proof its milestone was reached, so the matching
/// flag is pushed through the progress sync right after the upload.
pub struct UploadDocument {
    documents: Arc<dyn DocumentApiPort>,
}

impl UploadDocument {
    pub fn new(documents: Arc<dyn DocumentApiPort>) -> Self {
        Self { documents }
    }

    pub async fn execute(
        &self,
        upload: &DocumentUpload,
        progress: &mut ProgressSession,
    ) -> anyhow::Result<UploadOutcome> {
        let document = self.documents.upload(upload).await?;
        info!(
            id = %document.id,
            kind = upload.kind.as_str(),
            size = upload.bytes.len(),
            "document uploaded"
        );

        progress
            .record_milestone(upload.kind.step())
            .await
            .context("document stored but milestone sync failed")?;

        Ok(UploadOutcome {
            document,
            progress: progress.view(),
        })
    }
}
