//! Runtime configuration for a single pipeline run.
//!
//! The parsed CLI is converted once at startup into a [`Config`] struct that
//! is passed by reference into each pipeline component. No component reads
//! the environment or any other ambient state on its own.

use crate::cli::Cli;
use std::path::PathBuf;

/// Everything the pipeline needs for one run.
///
/// Constructed once in `main` via [`Config::from_cli`] and then treated as
/// read-only.
#[derive(Debug, Clone)]
pub struct Config {
    /// GNews API key for the headline feed.
    pub news_api_key: String,
    /// Pexels API key for stock photo search.
    pub photo_api_key: String,
    /// Facebook page the cards are posted to.
    pub page_id: String,
    /// Access token for the Facebook page.
    pub page_access_token: String,
    /// Headline feed language (e.g. `en`).
    pub lang: String,
    /// Headline feed country/region (e.g. `in`).
    pub country: String,
    /// Upper bound on headlines processed per run.
    pub max_headlines: u32,
    /// Directory composed cards are written into.
    pub output_dir: String,
    /// Optional headline font override; built-in font otherwise.
    pub font_path: Option<PathBuf>,
}

impl Config {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            news_api_key: cli.news_api_key,
            photo_api_key: cli.photo_api_key,
            page_id: cli.page_id,
            page_access_token: cli.page_access_token,
            lang: cli.lang,
            country: cli.country,
            max_headlines: cli.max_headlines,
            output_dir: cli.output_dir,
            font_path: cli.font_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "newsplate",
            "--news-api-key",
            "n",
            "--photo-api-key",
            "p",
            "--page-id",
            "42",
            "--page-access-token",
            "t",
            "--country",
            "us",
        ]);
        let config = Config::from_cli(cli);

        assert_eq!(config.news_api_key, "n");
        assert_eq!(config.photo_api_key, "p");
        assert_eq!(config.page_id, "42");
        assert_eq!(config.page_access_token, "t");
        assert_eq!(config.country, "us");
        assert_eq!(config.max_headlines, 5);
        assert_eq!(config.output_dir, "output");
    }
}
