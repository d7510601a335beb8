//! Notification endpoints port.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::notification::{BroadcastDraft, Notification};

#[async_trait]
pub trait NotificationApiPort: Send + Sync {
    /// `GET /notifications`
    async fn list(&self) -> Result<Vec<Notification>, ApiError>;

    /// `PUT /notifications/:id/read`
    async fn mark_read(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /notifications/broadcast`
    async fn broadcast(&self, draft: &BroadcastDraft) -> Result<Notification, ApiError>;
}
