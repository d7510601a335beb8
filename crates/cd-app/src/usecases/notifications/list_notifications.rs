use std::sync::Arc;

use cd_core::error::ApiError;
use cd_core::notification::Notification;
use cd_core::ports::NotificationApiPort;

/// Use case for listing notifications, unread first.
pub struct ListNotifications {
    notifications: Arc<dyn NotificationApiPort>,
}

impl ListNotifications {
    pub fn new(notifications: Arc<dyn NotificationApiPort>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self) -> Result<Vec<Notification>, ApiError> {
        let mut list = self.notifications.list().await?;
        list.sort_by_key(|n| (n.read, std::cmp::Reverse(n.created_at)));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cd_core::notification::{BroadcastDraft, NotificationKind};
    use chrono::{TimeZone, Utc};

    struct FixedNotifications(Vec<Notification>);

    #[async_trait]
    impl NotificationApiPort for FixedNotifications {
        async fn list(&self) -> Result<Vec<Notification>, ApiError> {
            Ok(self.0.clone())
        }

        async fn mark_read(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn broadcast(&self, _draft: &BroadcastDraft) -> Result<Notification, ApiError> {
            unimplemented!("not exercised here")
        }
    }

    fn notification(id: &str, read: bool, day: u32) -> Notification {
        Notification {
            id: id.into(),
            title: "t".into(),
            message: "m".into(),
            kind: NotificationKind::Info,
            read,
            created_at: Some(Utc.with_ymd_and_hms(2026, 7, day, 12, 0, 0).unwrap()),
            action_link: None,
        }
    }

    #[tokio::test]
    async fn unread_sort_first_then_newest() {
        let port = Arc::new(FixedNotifications(vec![
            notification("old-read", true, 1),
            notification("new-unread", false, 9),
            notification("old-unread", false, 2),
        ]));
        let list = ListNotifications::new(port).execute().await.unwrap();
        let ids: Vec<&str> = list.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["new-unread", "old-unread", "old-read"]);
    }
}
