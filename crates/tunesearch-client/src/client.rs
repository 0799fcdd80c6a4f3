//! Search and artwork operations against the iTunes Search API.
//!
//! Each call is one linear attempt: build the URL, send one GET, check for
//! status 200, decode, return. There is no retry, no cache and no state shared
//! between calls beyond the (immutable) transport and base URL.

use std::time::Duration;

use tunesearch_core::{AppConfig, SearchParameters, SearchResponse, StoreItem};
use url::Url;

use crate::error::{ClientError, ImageError, MissingImageCause, SearchError};
use crate::http::{HttpClient, ReqwestHttpClient};

pub use tunesearch_core::DEFAULT_SEARCH_BASE_URL;

/// Decoded artwork, owned by the caller.
pub type FetchedImage = image::DynamicImage;

/// Client for catalog searches and artwork downloads.
///
/// Use [`StoreClient::new`] for the production endpoint,
/// [`StoreClient::from_config`] to honour environment configuration, or
/// [`StoreClient::with_http_client`] to inject a custom transport or point at
/// a mock server.
#[derive(Debug, Clone)]
pub struct StoreClient<H = ReqwestHttpClient> {
    http: H,
    base_url: Url,
}

impl StoreClient<ReqwestHttpClient> {
    /// Creates a client for the public search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: Option<u64>, user_agent: &str) -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_SEARCH_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a `reqwest`-backed client with a custom search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let http = ReqwestHttpClient::new(timeout_secs.map(Duration::from_secs), user_agent)?;
        Self::with_http_client(http, base_url)
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] under the same conditions as
    /// [`StoreClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            config.search_base_url.as_str(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }
}

impl<H: HttpClient> StoreClient<H> {
    /// Creates a client that sends every request through `http`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse or
    /// is not an http(s) URL.
    pub fn with_http_client(http: H, base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// Searches the catalog and returns the matching items in server order.
    ///
    /// Every entry of `query` becomes one URL-encoded query parameter. An
    /// empty map queries the bare endpoint.
    ///
    /// # Errors
    ///
    /// - [`SearchError::ItemsNotFound`] if the response is not HTTP or its
    ///   status is anything but 200.
    /// - [`SearchError::Deserialize`] if a 200 body is not a valid result
    ///   envelope.
    /// - [`SearchError::Transport`] if no response was obtained at all.
    pub async fn fetch_items(
        &self,
        query: &SearchParameters,
    ) -> Result<Vec<StoreItem>, SearchError> {
        let url = self.build_url(query);
        tracing::debug!(url = %url, "fetching catalog items");

        let response = self.http.get(&url).await?;
        if !response.is_ok() {
            tracing::warn!(url = %url, status = ?response.status, "catalog search did not return 200");
            return Err(SearchError::ItemsNotFound {
                url: url.to_string(),
                status: response.status,
            });
        }

        let envelope: SearchResponse =
            serde_json::from_slice(&response.body).map_err(|e| SearchError::Deserialize {
                context: format!("search response from {url}"),
                source: e,
            })?;

        tracing::debug!(
            url = %url,
            count = envelope.results.len(),
            "decoded catalog items"
        );
        Ok(envelope.results)
    }

    /// Downloads `url` and decodes it as an image, guessing the format from
    /// the bytes.
    ///
    /// # Errors
    ///
    /// - [`ImageError::ImageDataMissing`] if the response is not HTTP, its
    ///   status is anything but 200, or the body does not decode as an image.
    /// - [`ImageError::Transport`] if no response was obtained at all.
    pub async fn fetch_image(&self, url: &Url) -> Result<FetchedImage, ImageError> {
        tracing::debug!(url = %url, "fetching image");

        let response = self.http.get(url).await?;
        if !response.is_ok() {
            tracing::warn!(url = %url, status = ?response.status, "image request did not return 200");
            return Err(ImageError::ImageDataMissing {
                url: url.to_string(),
                cause: MissingImageCause::BadStatus(response.status),
            });
        }

        image::load_from_memory(&response.body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "image bytes could not be decoded");
            ImageError::ImageDataMissing {
                url: url.to_string(),
                cause: MissingImageCause::Undecodable(e),
            }
        })
    }

    /// Appends every query entry to the base URL as an encoded pair.
    ///
    /// Leaves the URL untouched for an empty map so no bare `?` is emitted.
    fn build_url(&self, query: &SearchParameters) -> Url {
        let mut url = self.base_url.clone();
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
