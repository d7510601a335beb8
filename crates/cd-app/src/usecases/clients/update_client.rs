use std::sync::Arc;

use cd_core::client::{ClientRecord, ClientUpdate};
use cd_core::error::ApiError;
use cd_core::ports::ClientDirectoryPort;

pub struct UpdateClient {
    clients: Arc<dyn ClientDirectoryPort>,
}

impl UpdateClient {
    pub fn new(clients: Arc<dyn ClientDirectoryPort>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, id: &str, update: &ClientUpdate) -> Result<ClientRecord, ApiError> {
        self.clients.update(id, update).await
    }
}
