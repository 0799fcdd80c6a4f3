//! `search` command handler.
//!
//! Runs one catalog search and prints the results. With `--artwork`, every
//! item's artwork is fetched concurrently; an artwork failure is printed for
//! that item and does not abort the others.

use futures::future::join_all;
use image::GenericImageView;
use tunesearch_client::{HttpClient, ImageError, StoreClient};
use tunesearch_core::{AppConfig, MediaType, SearchQuery, StoreItem};

/// Options collected from the command line before config defaults apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchArgs {
    pub term: String,
    pub media: Option<MediaType>,
    pub entity: Option<String>,
    pub limit: Option<u32>,
    pub country: Option<String>,
    pub lang: Option<String>,
    pub explicit: bool,
}

/// Merge command-line options with the configured defaults.
pub(crate) fn build_query(config: &AppConfig, args: SearchArgs) -> SearchQuery {
    let mut query = SearchQuery::new(args.term)
        .country(args.country.unwrap_or_else(|| config.default_country.clone()))
        .lang(args.lang.unwrap_or_else(|| config.default_lang.clone()))
        .limit(args.limit.unwrap_or(config.default_result_limit))
        .explicit(args.explicit);
    if let Some(media) = args.media {
        query = query.media(media);
    }
    if let Some(entity) = args.entity {
        query = query.entity(entity);
    }
    query
}

/// Run a search and print results to stdout.
///
/// # Errors
///
/// Returns an error if the search fails or, with `json`, if serialization fails.
pub(crate) async fn run_search<H: HttpClient>(
    client: &StoreClient<H>,
    query: SearchQuery,
    with_artwork: bool,
    json: bool,
) -> anyhow::Result<()> {
    let items = client.fetch_items(&query.into_parameters()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("no results");
        return Ok(());
    }

    if !with_artwork {
        for (idx, item) in items.iter().enumerate() {
            println!("{}", format_item_line(idx + 1, item));
        }
        return Ok(());
    }

    let artwork = join_all(items.iter().map(|item| client.fetch_image(&item.artwork_url))).await;
    for (idx, (item, image)) in items.iter().zip(artwork).enumerate() {
        let art = match image {
            Ok(img) => {
                let (width, height) = img.dimensions();
                format!("artwork {width}x{height}")
            }
            Err(e) => {
                let reason = error_chain_text(e);
                tracing::warn!(item = %item.name, error = %reason, "artwork fetch failed");
                format!("artwork unavailable: {reason}")
            }
        };
        println!("{}  [{art}]", format_item_line(idx + 1, item));
    }

    Ok(())
}

/// Flattens an image error and its sources into one `a: b` line.
pub(crate) fn error_chain_text(err: ImageError) -> String {
    format!("{:#}", anyhow::Error::from(err))
}

/// One display line: position, name, artist, kind and price when present.
pub(crate) fn format_item_line(position: usize, item: &StoreItem) -> String {
    let mut line = format!("{position:>3}. {} - {}", item.name, item.artist);
    if let Some(kind) = &item.kind {
        line.push_str(&format!(" ({kind})"));
    }
    if let Some(price) = fmt_price(item) {
        line.push_str(&format!(" {price}"));
    }
    line
}

/// Format a price with its currency, or `None` when the catalog sends no price.
fn fmt_price(item: &StoreItem) -> Option<String> {
    let price = item.track_price?;
    if price <= 0.0 {
        return Some("free".to_string());
    }
    Some(match &item.currency {
        Some(currency) => format!("{price:.2} {currency}"),
        None => format!("{price:.2}"),
    })
}
