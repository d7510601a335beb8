//! Client directory port.

use async_trait::async_trait;

use crate::client::{ClientDraft, ClientRecord, ClientUpdate};
use crate::error::ApiError;
use crate::page::{Page, PageRequest};

#[async_trait]
pub trait ClientDirectoryPort: Send + Sync {
    async fn list(&self, request: &PageRequest) -> Result<Page<ClientRecord>, ApiError>;

    async fn get(&self, id: &str) -> Result<ClientRecord, ApiError>;

    async fn create(&self, draft: &ClientDraft) -> Result<ClientRecord, ApiError>;

    async fn update(&self, id: &str, update: &ClientUpdate) -> Result<ClientRecord, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
