use std::sync::Arc;

use cd_core::error::ApiError;
use cd_core::ports::NotificationApiPort;

pub struct MarkNotificationRead {
    notifications: Arc<dyn NotificationApiPort>,
}

impl MarkNotificationRead {
    pub fn new(notifications: Arc<dyn NotificationApiPort>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self, id: &str) -> Result<(), ApiError> {
        self.notifications.mark_read(id).await
    }
}
