use std::sync::Arc;

use tracing::info;

use cd_core::error::ApiError;
use cd_core::notification::{BroadcastDraft, Notification};
use cd_core::ports::NotificationApiPort;

/// Use case for publishing a broadcast to clients.
pub struct BroadcastNotification {
    notifications: Arc<dyn NotificationApiPort>,
}

impl BroadcastNotification {
    pub fn new(notifications: Arc<dyn NotificationApiPort>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self, draft: &BroadcastDraft) -> Result<Notification, ApiError> {
        let notification = self.notifications.broadcast(draft).await?;
        info!(id = %notification.id, title = %notification.title, "broadcast published");
        Ok(notification)
    }
}
