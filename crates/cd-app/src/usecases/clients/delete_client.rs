use std::sync::Arc;

use tracing::info;

use cd_core::error::ApiError;
use cd_core::ports::ClientDirectoryPort;

pub struct DeleteClient {
    clients: Arc<dyn ClientDirectoryPort>,
}

impl DeleteClient {
    pub fn new(clients: Arc<dyn ClientDirectoryPort>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, id: &str) -> Result<(), ApiError> {
        self.clients.delete(id).await?;
        info!(id, "client deleted");
        Ok(())
    }
}
