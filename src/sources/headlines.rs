//! Trending headline feed client.
//!
//! Fetches the current top headlines from the GNews API. Language, country,
//! and result count come from the run [`Config`]; the API key is passed as a
//! query parameter per the service's contract.

use crate::config::Config;
use crate::models::{Headline, HeadlineResponse};
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, error, info, instrument};
use url::Url;

const TOP_HEADLINES_URL: &str = "https://gnews.io/api/v4/top-headlines";

/// Fetch the current trending headlines.
///
/// Any upstream failure is non-fatal: the error (and raw response body for
/// non-success statuses) is logged and an empty list is returned, so the
/// pipeline simply processes zero items. No retries.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Run configuration (feed selection and API key)
///
/// # Returns
///
/// An ordered list of headlines, at most `config.max_headlines` long,
/// most prominent first. Empty on any upstream failure.
pub async fn fetch_top_headlines(client: &Client, config: &Config) -> Vec<Headline> {
    fetch_from(client, config, TOP_HEADLINES_URL).await
}

/// Fetch headlines from a specific endpoint. Split out so tests can point
/// the client at a local listener.
#[instrument(level = "info", skip_all)]
async fn fetch_from(client: &Client, config: &Config, endpoint: &str) -> Vec<Headline> {
    let url = match Url::parse_with_params(
        endpoint,
        &[
            ("lang", config.lang.as_str()),
            ("country", config.country.as_str()),
            ("max", &config.max_headlines.to_string()),
            ("apikey", config.news_api_key.as_str()),
        ],
    ) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Failed to build headline feed URL");
            return Vec::new();
        }
    };

    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "Headline feed request failed");
            return Vec::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(
            %status,
            body = %truncate_for_log(&body, 300),
            "Headline feed returned an error"
        );
        return Vec::new();
    }

    match response.json::<HeadlineResponse>().await {
        Ok(parsed) => {
            let mut articles = parsed.articles;
            articles.truncate(config.max_headlines as usize);
            info!(count = articles.len(), "Fetched trending headlines");
            debug!(titles = ?articles.iter().map(|a| a.title.as_str()).collect::<Vec<_>>(), "Headlines");
            articles
        }
        Err(e) => {
            error!(error = %e, "Headline feed returned a malformed body");
            Vec::new()
        }
    }
}
