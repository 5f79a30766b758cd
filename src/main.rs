//! # newsplate
//!
//! A single-shot pipeline that turns trending headlines into published
//! social-media image cards: fetch the current top headlines, find one
//! matching stock photo per headline, bake the headline text onto the photo
//! as a 1080×1080 card, and post the card with the headline as its caption.
//!
//! ## Usage
//!
//! ```sh
//! GNEWS_API_KEY=... PEXELS_API_KEY=... FB_PAGE_ID=... FB_PAGE_TOKEN=... \
//!     newsplate -o ./output
//! ```
//!
//! ## Architecture
//!
//! Control flows strictly fetch → search → compose → publish per headline,
//! sequentially; there is no fan-out and no state crosses iterations except
//! the output directory. Per-item failures are logged and skipped; the run
//! exits 0 unless startup itself fails (unwritable output directory,
//! unusable built-in font).

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod compose;
mod config;
mod models;
mod publish;
mod sources;
mod utils;

use cli::Cli;
use compose::{compose_card, font::load_font};
use config::Config;
use models::PublishOutcome;
use publish::post_photo;
use sources::headlines::fetch_top_headlines;
use sources::photos::{keyword_for, search_photo};
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsplate starting up");

    // Parse CLI and build the run configuration
    let args = Cli::parse();
    debug!(?args.output_dir, ?args.lang, ?args.country, args.max_headlines, "Parsed CLI arguments");
    let config = Config::from_cli(args);

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&config.output_dir).await {
        error!(
            path = %config.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // Load the headline font (configured path, or the embedded fallback)
    let (font, font_choice) = load_font(config.font_path.as_deref())?;
    info!(?font_choice, "Headline font ready");

    let client = reqwest::Client::builder()
        .user_agent(concat!("newsplate/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // ---- Fetch headlines ----
    // An upstream failure yields an empty list; the run then completes with
    // zero items and still exits 0.
    let headlines = fetch_top_headlines(&client, &config).await;
    info!(count = headlines.len(), "Headlines to process");

    // ---- Process each headline sequentially ----
    let mut composed = 0usize;
    let mut published = 0usize;
    let mut skipped = 0usize;

    for (i, headline) in headlines.iter().enumerate() {
        let index = i + 1;
        let title = headline.title.trim();
        info!(index, title = %title, "Processing headline");
        debug!(index, feed_image = ?headline.image, "Headline details");

        let Some(keyword) = keyword_for(title) else {
            warn!(index, "Headline has no usable text; skipping");
            skipped += 1;
            continue;
        };

        let photo_url = match search_photo(&client, &config, keyword).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                warn!(index, keyword, "No image found; skipping headline");
                skipped += 1;
                continue;
            }
            Err(e) => {
                error!(index, keyword, error = %e, "Photo search failed; skipping headline");
                skipped += 1;
                continue;
            }
        };

        let output_path = Path::new(&config.output_dir).join(format!("news_{index}.jpg"));
        let card_path = match compose_card(&client, title, &photo_url, &output_path, &font).await {
            Ok(path) => {
                composed += 1;
                path
            }
            Err(e) => {
                error!(index, error = %e, "Failed to compose card; skipping headline");
                skipped += 1;
                continue;
            }
        };

        match post_photo(&client, &config, &card_path, title).await {
            Ok(PublishOutcome::Published { post_id }) => {
                published += 1;
                info!(index, %post_id, "Headline published");
            }
            Ok(PublishOutcome::Failed { .. }) => {
                // Raw error body already logged by the publisher.
            }
            Err(e) => {
                error!(index, error = %e, "Publish request failed");
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        total = headlines.len(),
        composed,
        published,
        skipped,
        ?elapsed,
        "Run complete"
    );

    Ok(())
}
