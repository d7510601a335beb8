use std::sync::Arc;

use tracing::info;

use cd_core::client::{ClientDraft, ClientRecord};
use cd_core::error::ApiError;
use cd_core::ports::ClientDirectoryPort;

pub struct CreateClient {
    clients: Arc<dyn ClientDirectoryPort>,
}

impl CreateClient {
    pub fn new(clients: Arc<dyn ClientDirectoryPort>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, draft: &ClientDraft) -> Result<ClientRecord, ApiError> {
        let record = self.clients.create(draft).await?;
        info!(id = %record.id, email = %record.email, "client created");
        Ok(record)
    }
}
