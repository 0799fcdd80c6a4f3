//! iTunes Search API response types.
//!
//! [`SearchResponse`] is the `{"resultCount": .., "results": [..]}` envelope
//! returned by the search endpoint. Each entry decodes into a [`StoreItem`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Size token the catalog embeds in `artworkUrl100` links.
const ARTWORK_SIZE_TOKEN: &str = "100x100bb";

/// Top-level envelope of a search response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: Option<u32>,
    pub results: Vec<StoreItem>,
}

/// One catalog entry (a song, movie, app, book, ...).
///
/// `name`, `artist` and `artwork_url` are required; everything else depends
/// on the media kind and is optional. `name` is the `trackName`, or the
/// `collectionName` for entries that have no track (albums, audiobooks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStoreItem")]
pub struct StoreItem {
    pub name: String,
    pub artist: String,
    pub kind: Option<String>,
    /// First non-empty of `description`, `longDescription` and
    /// `shortDescription`; empty when the catalog sends none of them.
    pub description: String,
    pub artwork_url: Url,
    pub track_id: Option<i64>,
    pub collection_id: Option<i64>,
    pub collection_name: Option<String>,
    pub preview_url: Option<Url>,
    pub track_view_url: Option<Url>,
    pub release_date: Option<DateTime<Utc>>,
    pub track_price: Option<f64>,
    pub currency: Option<String>,
    pub primary_genre_name: Option<String>,
}

impl StoreItem {
    /// Returns the artwork URL rewritten to request a `px`×`px` rendition.
    ///
    /// The catalog serves the same artwork at arbitrary sizes by swapping the
    /// `100x100bb` path token. URLs without the token come back unchanged.
    #[must_use]
    pub fn artwork_url_sized(&self, px: u32) -> Url {
        let mut url = self.artwork_url.clone();
        let path = url.path().to_owned();
        if let Some(idx) = path.rfind(ARTWORK_SIZE_TOKEN) {
            let resized = format!(
                "{}{px}x{px}bb{}",
                &path[..idx],
                &path[idx + ARTWORK_SIZE_TOKEN.len()..]
            );
            url.set_path(&resized);
        }
        url
    }
}

/// Wire shape of a result entry, before the name and description fallbacks apply.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStoreItem {
    track_name: Option<String>,
    artist_name: String,
    #[serde(rename = "artworkUrl100")]
    artwork_url_100: Url,
    kind: Option<String>,
    description: Option<String>,
    long_description: Option<String>,
    short_description: Option<String>,
    track_id: Option<i64>,
    collection_id: Option<i64>,
    collection_name: Option<String>,
    preview_url: Option<Url>,
    track_view_url: Option<Url>,
    release_date: Option<DateTime<Utc>>,
    track_price: Option<f64>,
    currency: Option<String>,
    primary_genre_name: Option<String>,
}

impl TryFrom<RawStoreItem> for StoreItem {
    type Error = String;

    fn try_from(raw: RawStoreItem) -> Result<Self, Self::Error> {
        let name = raw
            .track_name
            .or_else(|| raw.collection_name.clone())
            .ok_or_else(|| "missing field `trackName` or `collectionName`".to_string())?;

        let description = [raw.description, raw.long_description, raw.short_description]
            .into_iter()
            .flatten()
            .find(|d| !d.trim().is_empty())
            .unwrap_or_default();

        Ok(Self {
            name,
            artist: raw.artist_name,
            kind: raw.kind,
            description,
            artwork_url: raw.artwork_url_100,
            track_id: raw.track_id,
            collection_id: raw.collection_id,
            collection_name: raw.collection_name,
            preview_url: raw.preview_url,
            track_view_url: raw.track_view_url,
            release_date: raw.release_date,
            track_price: raw.track_price,
            currency: raw.currency,
            primary_genre_name: raw.primary_genre_name,
        })
    }
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
