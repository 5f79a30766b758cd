//! Stock photo search client.
//!
//! Maps a single keyword to the download URL of one representative photo via
//! the Pexels search API. Keyword extraction is deliberately naive: the first
//! whitespace-delimited token of the headline, no stop-word filtering, no
//! synonym handling, no multi-word queries.

use crate::config::Config;
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use std::error::Error;
use tracing::{info, instrument, warn};

const PHOTO_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Derive the photo search keyword from a headline.
///
/// Returns the first whitespace-delimited token, or `None` when the headline
/// is empty or whitespace-only (such items are skipped by the caller before
/// any network call is made).
pub fn keyword_for(title: &str) -> Option<&str> {
    title.split_whitespace().next()
}

/// Search for one representative photo matching a keyword.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Run configuration (photo API key)
/// * `keyword` - Single search term derived from the headline
///
/// # Returns
///
/// * `Ok(Some(url))` - Download URL of the best match's large rendition
/// * `Ok(None)` - The service had no match, or answered with a non-success
///   status (logged with the raw body)
/// * `Err(_)` - The request itself failed (connect error, malformed body)
#[instrument(level = "info", skip_all, fields(%keyword))]
pub async fn search_photo(
    client: &Client,
    config: &Config,
    keyword: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    let url = format!(
        "{}?query={}&per_page=1",
        PHOTO_SEARCH_URL,
        urlencoding::encode(keyword)
    );

    let response = client
        .get(&url)
        .header(AUTHORIZATION, &config.photo_api_key)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(
            %status,
            body = %truncate_for_log(&body, 300),
            "Photo search returned an error"
        );
        return Ok(None);
    }

    let parsed: crate::models::PhotoSearchResponse = response.json().await?;
    let hit = parsed.photos.into_iter().next().map(|p| p.src.large);
    match &hit {
        Some(url) => info!(photo_url = %url, "Photo search matched"),
        None => info!("Photo search produced no matches"),
    }
    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_first_token() {
        assert_eq!(
            keyword_for("Economy Shows Signs Of Recovery"),
            Some("Economy")
        );
        assert_eq!(keyword_for("Markets"), Some("Markets"));
    }

    #[test]
    fn test_keyword_skips_leading_whitespace() {
        assert_eq!(keyword_for("  Economy rallies"), Some("Economy"));
        assert_eq!(keyword_for("\tEconomy\trallies"), Some("Economy"));
    }

    #[test]
    fn test_keyword_empty_headline() {
        assert_eq!(keyword_for(""), None);
        assert_eq!(keyword_for("   "), None);
    }
}
