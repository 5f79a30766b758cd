//! Command-line interface definitions for newsplate.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! API credentials can be provided via command-line flags or environment
//! variables; tunables (feed selection, output directory, font) are plain
//! flags with defaults.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the newsplate application.
///
/// One invocation runs the whole pipeline once: fetch headlines, compose a
/// card per headline, publish each card. The four credentials are usually
/// supplied through the environment.
///
/// # Examples
///
/// ```sh
/// # Credentials from the environment, everything else defaulted
/// newsplate
///
/// # Explicit output directory and a smaller run
/// newsplate -o ./cards --max-headlines 3
///
/// # Custom headline font
/// newsplate --font-path /usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for composed card images
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// Headline feed language
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Headline feed country/region
    #[arg(long, default_value = "in")]
    pub country: String,

    /// Maximum number of headlines to process per run
    #[arg(long, default_value_t = 5)]
    pub max_headlines: u32,

    /// Path to a TTF/OTF headline font; the built-in font is used when
    /// absent or unreadable
    #[arg(long)]
    pub font_path: Option<PathBuf>,

    /// GNews API key
    #[arg(long, env = "GNEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: String,

    /// Pexels API key
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub photo_api_key: String,

    /// Facebook page identifier
    #[arg(long, env = "FB_PAGE_ID")]
    pub page_id: String,

    /// Facebook page access token
    #[arg(long, env = "FB_PAGE_TOKEN", hide_env_values = true)]
    pub page_access_token: String,
}
