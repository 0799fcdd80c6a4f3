mod artwork;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tunesearch_core::MediaType;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "tunesearch")]
#[command(about = "Search the iTunes catalog and fetch artwork")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the catalog and print matching items
    Search {
        /// Search term (e.g. "jack johnson")
        term: String,
        /// Media type: music, movie, podcast, musicVideo, audiobook, shortFilm,
        /// tvShow, software, ebook or all
        #[arg(long)]
        media: Option<MediaType>,
        /// Entity within the media type (e.g. song, album)
        #[arg(long)]
        entity: Option<String>,
        /// Maximum number of results (defaults to TUNESEARCH_RESULT_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
        /// Two-letter store country code (defaults to TUNESEARCH_COUNTRY)
        #[arg(long)]
        country: Option<String>,
        /// Result language (defaults to TUNESEARCH_LANG)
        #[arg(long)]
        lang: Option<String>,
        /// Include explicit content
        #[arg(long)]
        explicit: bool,
        /// Also download each item's artwork and report its dimensions
        #[arg(long)]
        artwork: bool,
        /// Print results as JSON instead of one line per item
        #[arg(long, conflicts_with = "artwork")]
        json: bool,
    },
    /// Download one image and print its dimensions
    Artwork {
        /// Absolute image URL
        url: Url,
        /// Save the decoded image here; the format follows the file extension
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tunesearch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = tunesearch_client::StoreClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    match cli.command {
        Commands::Search {
            term,
            media,
            entity,
            limit,
            country,
            lang,
            explicit,
            artwork,
            json,
        } => {
            let query = search::build_query(
                &config,
                search::SearchArgs {
                    term,
                    media,
                    entity,
                    limit,
                    country,
                    lang,
                    explicit,
                },
            );
            search::run_search(&client, query, artwork, json).await?;
        }
        Commands::Artwork { url, output } => {
            artwork::run_artwork(&client, &url, output.as_deref()).await?;
        }
    }

    Ok(())
}
