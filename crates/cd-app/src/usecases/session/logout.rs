use std::sync::Arc;

use tracing::info;

use cd_core::ports::TokenStorePort;

/// Use case for ending the session.
pub struct Logout {
    token_store: Arc<dyn TokenStorePort>,
}

impl Logout {
    pub fn new(token_store: Arc<dyn TokenStorePort>) -> Self {
        Self { token_store }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.token_store.clear().await?;
        info!("signed out");
        Ok(())
    }
}
