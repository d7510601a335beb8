use std::sync::Arc;

use cd_core::client::ClientRecord;
use cd_core::error::ApiError;
use cd_core::page::{Page, PageRequest};
use cd_core::ports::ClientDirectoryPort;

/// Use case for listing the client directory, paginated and searchable.
pub struct ListClients {
    clients: Arc<dyn ClientDirectoryPort>,
}

impl ListClients {
    pub fn new(clients: Arc<dyn ClientDirectoryPort>) -> Self {
        Self { clients }
    }

    pub async fn execute(&self, request: &PageRequest) -> Result<Page<ClientRecord>, ApiError> {
        self.clients.list(request).await
    }
}
