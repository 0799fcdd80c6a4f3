//! `artwork` command handler.

use std::path::Path;

use anyhow::Context;
use image::GenericImageView;
use tunesearch_client::{HttpClient, StoreClient};
use url::Url;

/// Fetch one image, print its dimensions, and optionally save it.
///
/// # Errors
///
/// Returns an error if the image cannot be fetched or decoded, or if saving
/// to `output` fails.
pub(crate) async fn run_artwork<H: HttpClient>(
    client: &StoreClient<H>,
    url: &Url,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let img = client.fetch_image(url).await?;
    let (width, height) = img.dimensions();
    println!("{url}: {width}x{height}");

    if let Some(path) = output {
        img.save(path)
            .with_context(|| format!("failed to save image to {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved artwork");
        println!("saved to {}", path.display());
    }

    Ok(())
}
