//! Page photo publisher.
//!
//! Uploads a finished card plus caption to the Facebook Graph photos
//! endpoint as a multipart form post. A rejected upload is reported, not
//! retried; the local file is left in place either way, and a failed publish
//! never fails the run.

use crate::config::Config;
use crate::models::{GraphPhotoResponse, PublishOutcome};
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::error::Error;
use std::path::Path;
use tracing::{error, info, instrument};

const GRAPH_BASE_URL: &str = "https://graph.facebook.com/v19.0";

/// Upload a card image and caption to the configured page.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Run configuration (page id and access token)
/// * `image_path` - Local path of the composed JPEG
/// * `caption` - Post caption (the headline text)
///
/// # Returns
///
/// * `Ok(PublishOutcome::Published { post_id })` - 2xx response; `post_id`
///   is the page post identifier when the endpoint returned one, the photo
///   id otherwise
/// * `Ok(PublishOutcome::Failed { body })` - non-success status; the raw
///   error body is logged and returned
/// * `Err(_)` - the request itself failed (file unreadable, connect error,
///   success body that didn't parse)
pub async fn post_photo(
    client: &Client,
    config: &Config,
    image_path: &Path,
    caption: &str,
) -> Result<PublishOutcome, Box<dyn Error>> {
    post_photo_to(client, config, GRAPH_BASE_URL, image_path, caption).await
}

/// Upload against a specific graph base URL. Split out so tests can point
/// the client at a local listener.
#[instrument(level = "info", skip_all, fields(image_path = %image_path.display()))]
async fn post_photo_to(
    client: &Client,
    config: &Config,
    graph_base: &str,
    image_path: &Path,
    caption: &str,
) -> Result<PublishOutcome, Box<dyn Error>> {
    let image_bytes = tokio::fs::read(image_path).await?;
    let file_name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "card.jpg".to_string());

    let source = Part::bytes(image_bytes)
        .file_name(file_name)
        .mime_str("image/jpeg")?;
    let form = Form::new()
        .part("source", source)
        .text("caption", caption.to_string())
        .text("access_token", config.page_access_token.clone());

    let url = format!("{}/{}/photos", graph_base, config.page_id);
    let response = client.post(&url).multipart(form).send().await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        error!(
            %status,
            body = %truncate_for_log(&body, 300),
            "Publish endpoint rejected the upload"
        );
        return Ok(PublishOutcome::Failed { body });
    }

    let parsed: GraphPhotoResponse = serde_json::from_str(&body)?;
    let post_id = parsed.post_id.unwrap_or(parsed.id);
    info!(%post_id, "Card published");
    Ok(PublishOutcome::Published { post_id })
}
