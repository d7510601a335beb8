//! Client directory adapter.

use std::sync::Arc;

use async_trait::async_trait;

use cd_core::client::{ClientDraft, ClientRecord, ClientUpdate};
use cd_core::error::ApiError;
use cd_core::page::{Page, PageRequest};
use cd_core::ports::ClientDirectoryPort;

use super::RestClient;

pub struct HttpClientDirectory {
    client: Arc<RestClient>,
}

impl HttpClientDirectory {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientDirectoryPort for HttpClientDirectory {
    async fn list(&self, request: &PageRequest) -> Result<Page<ClientRecord>, ApiError> {
        self.client.get_json_query("/clients", request).await
    }

    async fn get(&self, id: &str) -> Result<ClientRecord, ApiError> {
        self.client.get_json(&format!("/clients/{id}")).await
    }

    async fn create(&self, draft: &ClientDraft) -> Result<ClientRecord, ApiError> {
        self.client.post_json("/clients", draft).await
    }

    async fn update(&self, id: &str, update: &ClientUpdate) -> Result<ClientRecord, ApiError> {
        self.client.put_json(&format!("/clients/{id}"), update).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/clients/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    #[tokio::test]
    async fn list_sends_pagination_and_search_as_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/clients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "10".into()),
                Matcher::UrlEncoded("search".into(), "haddad".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items":[{"_id":"c1","firstName":"Noor","lastName":"Haddad",
                    "email":"noor@example.org"}],"total":1,"page":2,"perPage":10}"#,
            )
            .create_async()
            .await;

        let client = Arc::new(
            RestClient::new(server.url(), Duration::from_secs(5)).unwrap(),
        );
        let directory = HttpClientDirectory::new(client);

        let page = directory
            .list(&PageRequest {
                page: 2,
                per_page: 10,
                search: Some("haddad".into()),
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].full_name(), "Noor Haddad");
        mock.assert_async().await;
    }
}
