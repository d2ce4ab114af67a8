//! LaunchDarkly REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Response};
use serde::Deserialize;

use super::pagination::{FlagPage, PageRequest};
use super::{FlagApi, FlagItem};
use crate::error::{ApiError, Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// LaunchDarkly API client
pub struct LaunchDarklyClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

/// Error body returned by the API on failures
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl LaunchDarklyClient {
    /// Create a client for `base_url` (e.g. `https://app.launchdarkly.com`).
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ldaudit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn flags_url(&self, project: &str) -> String {
        format!("{}/api/v2/flags/{}", self.base_url, project)
    }

    /// Fetch a single page of flags.
    async fn fetch_page(&self, project: &str, page: PageRequest) -> Result<FlagPage> {
        let response = self
            .http
            .get(self.flags_url(project))
            .header("Authorization", &self.api_key)
            .query(&page.to_query_params())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await.into());
        }

        let body = response.text().await.map_err(ApiError::from)?;
        serde_json::from_str::<FlagPage>(&body).map_err(|e| {
            Error::from(ApiError::Http {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        })
    }
}

/// Build an [`ApiError::Http`] from a non-2xx response.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    ApiError::Http {
        status: status.as_u16(),
        message: format!("LaunchDarkly API request failed: {}", message),
    }
}

#[async_trait]
impl FlagApi for LaunchDarklyClient {
    async fn list_flags(&self, project: &str) -> Result<Vec<FlagItem>> {
        let mut flags = Vec::new();
        let mut request = PageRequest::first();

        loop {
            debug!("Fetching flags for {} (offset {})", project, request.offset);
            let page = self.fetch_page(project, request).await?;
            let received = page.items.len();
            let has_next = page.has_next_page(flags.len() + received);

            flags.extend(page.items);

            if !has_next {
                break;
            }
            request = request.next(received);
        }

        debug!("Fetched {} flags for {}", flags.len(), project);
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn offset(n: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), n.into()),
            Matcher::UrlEncoded("summary".into(), "0".into()),
        ])
    }

    #[test]
    fn test_client_creation_trims_base_url() {
        let client = LaunchDarklyClient::new("key", "https://example.com/").unwrap();
        assert_eq!(
            client.flags_url("proj"),
            "https://example.com/api/v2/flags/proj"
        );
    }

    #[tokio::test]
    async fn test_list_flags_follows_pagination_in_order() {
        let mut server = mockito::Server::new_async().await;

        let first = server
            .mock("GET", "/api/v2/flags/test-project")
            .match_query(offset("0"))
            .match_header("authorization", "test-key")
            .with_status(200)
            .with_body(
                r#"{
                    "items": [{ "key": "flag-one", "name": "One", "creationDate": 1700000000000, "temporary": true }],
                    "totalCount": 2,
                    "_links": { "next": { "href": "/api/v2/flags/test-project?offset=1" } }
                }"#,
            )
            .create_async()
            .await;

        let second = server
            .mock("GET", "/api/v2/flags/test-project")
            .match_query(offset("1"))
            .match_header("authorization", "test-key")
            .with_status(200)
            .with_body(
                r#"{
                    "items": [{ "key": "flag-two", "name": "Two", "creationDate": 1700000000000 }],
                    "totalCount": 2
                }"#,
            )
            .create_async()
            .await;

        let client = LaunchDarklyClient::new("test-key", &server.url()).unwrap();
        let flags = client.list_flags("test-project").await.unwrap();

        let keys: Vec<&str> = flags.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["flag-one", "flag-two"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_http_401() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v2/flags/test-project")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{ "code": "unauthorized", "message": "Invalid access token" }"#)
            .create_async()
            .await;

        let client = LaunchDarklyClient::new("bad-key", &server.url()).unwrap();
        let err = client.list_flags("test-project").await.unwrap_err();

        match err {
            Error::Api(api) => {
                assert_eq!(api.status(), Some(401));
                assert_eq!(
                    api.to_string(),
                    "HTTP 401: LaunchDarkly API request failed: Invalid access token"
                );
                assert!(api.hint().is_some());
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_not_found_without_body_uses_reason() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v2/flags/missing")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = LaunchDarklyClient::new("key", &server.url()).unwrap();
        let err = client.list_flags("missing").await.unwrap_err();

        match err {
            Error::Api(api) => {
                assert_eq!(api.status(), Some(404));
                assert!(api.to_string().contains("Not Found"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v2/flags/p")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = LaunchDarklyClient::new("key", &server.url()).unwrap();
        let err = client.list_flags("p").await.unwrap_err();

        assert!(err.to_string().contains("Failed to parse response"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 1 is reserved and nothing listens there
        let client = LaunchDarklyClient::new("key", "http://127.0.0.1:1").unwrap();
        let err = client.list_flags("p").await.unwrap_err();

        match err {
            Error::Api(api @ ApiError::Network { .. }) => {
                assert_eq!(api.status(), None);
                // The OS-level cause must survive, not just reqwest's summary
                let msg = api.to_string().to_lowercase();
                assert!(msg.contains("refused"), "cause missing from: {}", msg);
            }
            other => panic!("Expected network error, got {:?}", other),
        }
    }
}
