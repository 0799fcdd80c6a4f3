//! Client for the iTunes Search API.
//!
//! [`StoreClient::fetch_items`] runs a catalog search and decodes the result
//! envelope; [`StoreClient::fetch_image`] downloads and decodes artwork. Both
//! issue exactly one GET through an injected [`HttpClient`] and report one
//! success or one typed failure. Nothing is cached or retried.

pub mod client;
pub mod error;
pub mod http;

pub use client::{FetchedImage, StoreClient};
pub use error::{
    ClientError, ImageError, MissingImageCause, SearchError, StoreItemError, TransportError,
};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
