use thiserror::Error;

/// The two failure kinds the catalog operations report on their own.
///
/// Transport and JSON decode failures are passed through in their own
/// variants of [`SearchError`] and [`ImageError`] and have no kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreItemError {
    #[error("no items were found for this search")]
    ItemsNotFound,

    #[error("the image could not be loaded")]
    ImageDataMissing,
}

/// Failure of the underlying HTTP client before any response was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, TLS, timeout or body-read failure from `reqwest`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-`reqwest` [`HttpClient`](crate::HttpClient).
    #[error("transport error: {0}")]
    Other(String),
}

/// Errors returned by [`StoreClient::fetch_items`](crate::StoreClient::fetch_items).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Any status other than 200, or a response with no HTTP status at all.
    #[error("no items were found for this search ({})", status_text(.status))]
    ItemsNotFound { url: String, status: Option<u16> },

    /// The 200 body did not match the expected envelope. Kept separate from
    /// `ItemsNotFound` so callers can tell a broken payload from a bad status.
    #[error("JSON deserialization error for {context}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SearchError {
    /// Returns the named failure kind, or `None` for passthrough errors.
    #[must_use]
    pub fn kind(&self) -> Option<StoreItemError> {
        match self {
            SearchError::ItemsNotFound { .. } => Some(StoreItemError::ItemsNotFound),
            SearchError::Deserialize { .. } | SearchError::Transport(_) => None,
        }
    }
}

/// Errors returned by [`StoreClient::fetch_image`](crate::StoreClient::fetch_image).
#[derive(Debug, Error)]
pub enum ImageError {
    /// A bad status and undecodable bytes both land here, unlike search where
    /// a decode failure stays distinct. `cause` says which one happened.
    #[error("the image could not be loaded from {url}")]
    ImageDataMissing {
        url: String,
        #[source]
        cause: MissingImageCause,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ImageError {
    /// Returns the named failure kind, or `None` for passthrough errors.
    #[must_use]
    pub fn kind(&self) -> Option<StoreItemError> {
        match self {
            ImageError::ImageDataMissing { .. } => Some(StoreItemError::ImageDataMissing),
            ImageError::Transport(_) => None,
        }
    }
}

/// Why an image request produced no image.
#[derive(Debug, Error)]
pub enum MissingImageCause {
    #[error("{}", status_text(.0))]
    BadStatus(Option<u16>),

    #[error("bytes could not be decoded as an image")]
    Undecodable(#[source] image::ImageError),
}

/// Errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP client build error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn status_text(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP status {code}"),
        None => "response was not an HTTP response".to_string(),
    }
}
