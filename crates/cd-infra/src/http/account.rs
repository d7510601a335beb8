//! Account endpoints adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use cd_core::account::{AuthSession, Credentials, DetailsUpdate, UserProfile};
use cd_core::error::ApiError;
use cd_core::ports::AccountApiPort;

use super::RestClient;

pub struct HttpAccountApi {
    client: Arc<RestClient>,
}

impl HttpAccountApi {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountApiPort for HttpAccountApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self.client.post_json("/auth/login", credentials).await?;
        // Later requests in this process authenticate immediately; the
        // on-disk copy is the session use case's job.
        self.client.set_token(&session.token).await;
        debug!(user = %session.user.email, "login accepted");
        Ok(session)
    }

    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get_json("/auth/me").await
    }

    async fn update_details(&self, update: &DetailsUpdate) -> Result<UserProfile, ApiError> {
        self.client.put_json("/auth/update-details", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd_core::onboarding::FlagsPatch;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    #[tokio::test]
    async fn login_installs_the_token_for_later_requests() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_body(
                r#"{"token":"jwt-1","user":{"id":"u1","name":"Dana","email":"dana@example.org"}}"#,
            )
            .create_async()
            .await;
        let me = server
            .mock("GET", "/auth/me")
            .match_header("authorization", "Bearer jwt-1")
            .with_status(200)
            .with_body(r#"{"id":"u1","name":"Dana","email":"dana@example.org"}"#)
            .create_async()
            .await;

        let client = Arc::new(
            RestClient::new(server.url(), Duration::from_secs(5)).unwrap(),
        );
        let api = HttpAccountApi::new(client);

        let session = api
            .login(&Credentials {
                email: "dana@example.org".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(session.user.id, "u1");

        let profile = api.fetch_profile().await.unwrap();
        assert_eq!(profile.email, "dana@example.org");
        me.assert_async().await;
    }

    #[tokio::test]
    async fn update_details_sends_the_sparse_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/auth/update-details")
            .match_body(Matcher::JsonString(
                r#"{"documents":{"identityDocumentUploaded":true},"nextStep":3}"#.to_string(),
            ))
            .with_status(200)
            .with_body(
                r#"{"id":"u1","name":"Dana","email":"dana@example.org",
                    "documents":{"identityDocumentUploaded":true}}"#,
            )
            .create_async()
            .await;

        let client = Arc::new(
            RestClient::new(server.url(), Duration::from_secs(5)).unwrap(),
        );
        let api = HttpAccountApi::new(client);

        let update = DetailsUpdate::documents(
            FlagsPatch {
                identity_document_uploaded: Some(true),
                ..Default::default()
            },
            Some(3),
        );
        let profile = api.update_details(&update).await.unwrap();
        assert!(profile.documents.identity_document_uploaded);
        mock.assert_async().await;
    }
}
