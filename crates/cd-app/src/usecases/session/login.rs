use std::sync::Arc;

use tracing::info;

use cd_core::account::{Credentials, UserProfile};
use cd_core::ports::{AccountApiPort, TokenStorePort};

/// Use case for signing in and persisting the session token.
pub struct Login {
    account: Arc<dyn AccountApiPort>,
    token_store: Arc<dyn TokenStorePort>,
}

impl Login {
    pub fn new(account: Arc<dyn AccountApiPort>, token_store: Arc<dyn TokenStorePort>) -> Self {
        Self {
            account,
            token_store,
        }
    }

    pub async fn execute(&self, credentials: &Credentials) -> anyhow::Result<UserProfile> {
        let session = self.account.login(credentials).await?;
        self.token_store.store(&session.token).await?;
        info!(user = %session.user.email, "signed in");
        Ok(session.user)
    }
}
