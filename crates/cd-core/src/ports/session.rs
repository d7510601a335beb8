//! Token store port
//!
//! The only state the client keeps between runs besides settings: the bearer
//! token. Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

#[async_trait]
pub trait TokenStorePort: Send + Sync {
    /// The stored token, if a session exists.
    async fn load(&self) -> anyhow::Result<Option<String>>;

    async fn store(&self, token: &str) -> anyhow::Result<()>;

    /// Forget the session (logout, or forced logout on expiry).
    async fn clear(&self) -> anyhow::Result<()>;
}
