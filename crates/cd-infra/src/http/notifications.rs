//! Notification endpoints adapter.

use std::sync::Arc;

use async_trait::async_trait;

use cd_core::error::ApiError;
use cd_core::notification::{BroadcastDraft, Notification};
use cd_core::ports::NotificationApiPort;

use super::RestClient;

pub struct HttpNotificationApi {
    client: Arc<RestClient>,
}

impl HttpNotificationApi {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationApiPort for HttpNotificationApi {
    async fn list(&self) -> Result<Vec<Notification>, ApiError> {
        self.client.get_json("/notifications").await
    }

    async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        self.client.put_empty(&format!("/notifications/{id}/read")).await
    }

    async fn broadcast(&self, draft: &BroadcastDraft) -> Result<Notification, ApiError> {
        self.client.post_json("/notifications/broadcast", draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd_core::notification::{BroadcastAudience, NotificationKind};
    use mockito::Server;
    use std::time::Duration;

    #[tokio::test]
    async fn list_absorbs_both_record_spellings() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/notifications")
            .with_status(200)
            .with_body(
                r#"[{"_id":"n1","title":"Welcome","description":"Session starts Monday"},
                    {"id":"n2","title":"Reminder","message":"Upload your documents","read":true}]"#,
            )
            .create_async()
            .await;

        let client = Arc::new(
            RestClient::new(server.url(), Duration::from_secs(5)).unwrap(),
        );
        let api = HttpNotificationApi::new(client);

        let list = api.list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "Session starts Monday");
        assert!(list[1].read);
    }

    #[tokio::test]
    async fn broadcast_round_trips_the_created_record() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/notifications/broadcast")
            .with_status(201)
            .with_body(r#"{"_id":"n9","title":"Heads up","message":"Bring your documents"}"#)
            .create_async()
            .await;

        let client = Arc::new(
            RestClient::new(server.url(), Duration::from_secs(5)).unwrap(),
        );
        let api = HttpNotificationApi::new(client);

        let created = api
            .broadcast(&BroadcastDraft {
                title: "Heads up".into(),
                message: "Bring your documents".into(),
                kind: NotificationKind::Info,
                audience: BroadcastAudience::All,
                action_link: None,
            })
            .await
            .unwrap();
        assert_eq!(created.id, "n9");
    }
}
