//! HTTP client for the movie catalog endpoint.

use std::time::Duration;

use reqwest::Client;

use marquee_core::{Movie, MovieDraft};

use crate::error::{ApiError, ApiResult};
use crate::payload::{self, MoviesPayload};

/// Built-in catalog endpoint, used when configuration provides none.
pub const DEFAULT_ENDPOINT: &str = "https://swapi.dev/api/films/";

/// Catalog endpoint client.
///
/// Cheap to clone. The movie-list GET and the submission POST both go to
/// the same endpoint URL.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client for the given endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("marquee/0.1.0 (https://github.com/marquee-cli/marquee)")
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint URL this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the movie list and normalize it into the local record shape.
    ///
    /// Any non-success status collapses into [`ApiError::Status`]; the
    /// concrete code is logged here and not surfaced further.
    ///
    /// # Errors
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a recognized catalog payload.
    pub async fn fetch_movies(&self) -> ApiResult<Vec<Movie>> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("catalog request failed with status {}", status);
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let decoded: MoviesPayload = serde_json::from_str(&body)?;

        Ok(payload::normalize(decoded))
    }

    /// Submit a new movie draft to the endpoint.
    ///
    /// Fire-and-forget: the response status is not inspected and the local
    /// movie list is not touched; callers re-fetch to observe the new
    /// record. The response body is read and logged.
    ///
    /// # Errors
    /// Returns an error only on transport failure.
    pub async fn submit(&self, draft: &MovieDraft) -> ApiResult<()> {
        let response = self.http.post(&self.endpoint).json(draft).send().await?;

        let body = response.text().await?;
        log::debug!("submission response: {}", body);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new(DEFAULT_ENDPOINT, Duration::from_secs(30));
        assert!(client.is_ok());
    }

    #[test]
    fn test_catalog_client_keeps_endpoint() {
        let client =
            CatalogClient::new("http://localhost:8080/movies", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/movies");
    }
}
