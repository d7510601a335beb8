use std::sync::Arc;

use cd_core::client::ClientRecord;
use cd_core::error::ApiError;
use cd_core::ports::ClientDirectoryPort;

pub struct GetClient {
    clients: Arc<dyn ClientDirectoryPort>,
}

impl GetClient {
    pub fn new(clients: Arc<dyn ClientDirectoryPort>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, id: &str) -> Result<ClientRecord, ApiError> {
        self.clients.get(id).await
    }
}
