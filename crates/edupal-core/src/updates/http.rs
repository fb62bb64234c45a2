//! HttpUpdatesProvider: important updates from the portal REST backend.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;
use url::Url;

use super::keyring_store;
use super::traits::UpdatesProvider;
use super::types::EducationUpdate;
use crate::config::UpdatesConfig;
use crate::error::UpdatesError;

/// Reads `GET {base_url}/children/{child_id}/updates/important`.
pub struct HttpUpdatesProvider {
    base_url: Url,
    api_token: Option<String>,
    http_client: Client,
}

impl HttpUpdatesProvider {
    /// Create a provider whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpdatesError> {
        let mut base_url =
            Url::parse(base_url).map_err(|_| UpdatesError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpdatesError::InvalidBaseUrl(base_url.to_string()));
        }
        // Url::join drops the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            api_token: None,
            http_client,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Build from configuration, or `None` when no base URL is configured.
    ///
    /// The bearer token is read from the OS keyring. An unavailable keyring
    /// is logged and the provider runs without a token.
    pub fn from_config(config: &UpdatesConfig) -> Result<Option<Self>, UpdatesError> {
        if config.base_url.is_none() {
            return Ok(None);
        }
        let token = match keyring_store::get(keyring_store::API_TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "updates token unavailable, continuing without it");
                None
            }
        };
        Self::from_config_with_token(config, token)
    }

    /// Build from configuration with an explicitly supplied token.
    pub fn from_config_with_token(
        config: &UpdatesConfig,
        token: Option<String>,
    ) -> Result<Option<Self>, UpdatesError> {
        let Some(base_url) = config.base_url.as_deref() else {
            return Ok(None);
        };
        let mut provider = Self::new(base_url, Duration::from_secs(config.timeout_secs))?;
        if let Some(token) = token {
            provider = provider.with_api_token(token);
        }
        Ok(Some(provider))
    }

    fn endpoint(&self, child_id: u64) -> Result<Url, UpdatesError> {
        self.base_url
            .join(&format!("children/{child_id}/updates/important"))
            .map_err(|_| UpdatesError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

#[async_trait]
impl UpdatesProvider for HttpUpdatesProvider {
    async fn important_updates(&self, child_id: u64) -> Result<Vec<EducationUpdate>, UpdatesError> {
        let url = self.endpoint(child_id)?;

        let mut request = self.http_client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpdatesError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let updates: Vec<EducationUpdate> = serde_json::from_str(&body)?;
        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Priority;
    use crate::updates::UpdateType;

    const BODY: &str = r#"[
        {"type":"grade","priority":"high","message":"Algebra test: B+","timestamp":"2026-10-19T09:00:00Z"},
        {"type":"event","priority":"low","message":"Book fair Friday","timestamp":"2026-10-18T12:00:00Z"}
    ]"#;

    #[test]
    fn endpoint_keeps_base_path() {
        let provider =
            HttpUpdatesProvider::new("https://portal.example.com/api", Duration::from_secs(5)).unwrap();
        assert_eq!(
            provider.endpoint(7).unwrap().as_str(),
            "https://portal.example.com/api/children/7/updates/important"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = HttpUpdatesProvider::new("not a url", Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, UpdatesError::InvalidBaseUrl(_)));
    }

    #[test]
    fn from_config_without_base_url_is_none() {
        let config = UpdatesConfig::default();
        assert!(HttpUpdatesProvider::from_config(&config).unwrap().is_none());
    }

    #[tokio::test]
    async fn configured_token_is_sent_as_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/children/2/updates/important")
            .match_header("authorization", "Bearer from-keyring")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = UpdatesConfig {
            base_url: Some(server.url()),
            timeout_secs: 5,
        };
        let provider =
            HttpUpdatesProvider::from_config_with_token(&config, Some("from-keyring".to_string()))
                .unwrap()
                .unwrap();
        assert!(provider.important_updates(2).await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn hanging_backend_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let provider =
            HttpUpdatesProvider::new(&format!("http://{addr}"), Duration::from_millis(300)).unwrap();
        let err = provider.important_updates(1).await.unwrap_err();
        match err {
            UpdatesError::Http(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetches_updates_in_server_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/children/7/updates/important")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let provider = HttpUpdatesProvider::new(&format!("{}/api", server.url()), Duration::from_secs(5))
            .unwrap()
            .with_api_token("secret");
        let updates = provider.important_updates(7).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].kind, UpdateType::Grade);
        assert_eq!(updates[0].priority, Priority::High);
        assert_eq!(updates[1].message, "Book fair Friday");
    }

    #[tokio::test]
    async fn empty_list_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/children/3/updates/important")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let provider = HttpUpdatesProvider::new(&server.url(), Duration::from_secs(5)).unwrap();
        assert!(provider.important_updates(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/children/3/updates/important")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let provider = HttpUpdatesProvider::new(&server.url(), Duration::from_secs(5)).unwrap();
        let err = provider.important_updates(3).await.unwrap_err();
        match err {
            UpdatesError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/children/3/updates/important")
            .with_status(200)
            .with_body("{\"updates\": []}")
            .create_async()
            .await;

        let provider = HttpUpdatesProvider::new(&server.url(), Duration::from_secs(5)).unwrap();
        let err = provider.important_updates(3).await.unwrap_err();
        assert!(matches!(err, UpdatesError::Decode(_)));
    }
}
