use std::sync::Arc;

use tracing::warn;

use cd_core::error::ApiError;
use cd_core::ports::TokenStorePort;

/// Global forced-logout handler.
///
/// Any caller that receives an [`ApiError`] routes it through here; an
/// expired session clears the stored token so the next run starts at login.
pub struct SessionGuard {
    token_store: Arc<dyn TokenStorePort>,
}

impl SessionGuard {
    pub fn new(token_store: Arc<dyn TokenStorePort>) -> Self {
        Self { token_store }
    }

    /// Returns `true` when the session was terminated.
    pub async fn intercept(&self, error: &ApiError) -> bool {
        if !error.requires_logout() {
            return false;
        }
        warn!(%error, "session expired; forcing logout");
        if let Err(store_error) = self.token_store.clear().await {
            warn!(%store_error, "failed to clear stored token");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MemoryTokenStore {
        token: Mutex<Option<String>>,
    }

    #[async_trait]
    impl TokenStorePort for MemoryTokenStore {
        async fn load(&self) -> anyhow::Result<Option<String>> {
            Ok(self.token.lock().unwrap().clone())
        }

        async fn store(&self, token: &str) -> anyhow::Result<()> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        async fn clear(&self) -> anyhow::Result<()> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn expired_session_clears_the_token() {
        let store = Arc::new(MemoryTokenStore {
            token: Mutex::new(Some("jwt".into())),
        });
        let guard = SessionGuard::new(store.clone());

        let terminated = guard
            .intercept(&ApiError::Unauthorized {
                message: "jwt expired".into(),
            })
            .await;

        assert!(terminated);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn other_failures_leave_the_session_alone() {
        let store = Arc::new(MemoryTokenStore {
            token: Mutex::new(Some("jwt".into())),
        });
        let guard = SessionGuard::new(store.clone());

        let terminated = guard
            .intercept(&ApiError::Network("timed out".into()))
            .await;

        assert!(!terminated);
        assert_eq!(store.load().await.unwrap().as_deref(), Some("jwt"));
    }
}
