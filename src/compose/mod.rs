//! Card composer: the one non-trivial piece of the pipeline.
//!
//! Given a headline and a source photo, produces a fixed 1080×1080 card:
//! the photo resized (not cropped) to the canvas, a uniform semi-transparent
//! black overlay for text contrast, and the headline word-wrapped in solid
//! white anchored to the bottom margin.
//!
//! # Recovery policy
//!
//! Both a failed photo download and a failed decode substitute a solid dark
//! placeholder canvas instead of aborting the item — this is the pipeline's
//! single recovery policy, applied uniformly (the original sources disagreed
//! on the download case; see DESIGN.md).

pub mod font;
pub mod layout;

use ab_glyph::{FontArc, PxScale};
use image::{ImageFormat, RgbImage, Rgba, RgbaImage};
use image::imageops::{self, FilterType};
use imageproc::drawing::draw_text_mut;
use layout::{
    CANVAS_SIZE, FONT_SIZE, GlyphMeasure, LINE_HEIGHT, MARGIN, MAX_LINE_WIDTH, OVERLAY_ALPHA,
    wrap_headline,
};
use reqwest::Client;
use std::error::Error;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Fill color of the placeholder canvas used when no usable photo exists.
const PLACEHOLDER_FILL: Rgba<u8> = Rgba([18, 18, 18, 255]);

/// The solid dark canvas substituted for a missing or undecodable photo.
fn placeholder_canvas() -> RgbaImage {
    RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, PLACEHOLDER_FILL)
}

/// Blend a uniform black layer of the given alpha over the whole canvas.
///
/// Guarantees text contrast regardless of the underlying photo's brightness.
/// Equivalent to alpha-compositing `(0, 0, 0, alpha)` onto an opaque image:
/// every channel scales by `(255 - alpha) / 255`.
fn darken(canvas: &mut RgbaImage, alpha: u8) {
    let keep = (255 - alpha) as u16;
    for pixel in canvas.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = (*channel as u16 * keep / 255) as u8;
        }
    }
}

/// Render a finished card from headline text and raw photo bytes.
///
/// Pure with respect to I/O: no network, no filesystem. Decoding failure
/// (or `None` bytes, for a failed download) takes the placeholder path.
/// Identical inputs yield a pixel-identical card.
///
/// # Arguments
///
/// * `headline` - Text to overlay (also wraps to zero lines when empty)
/// * `source_bytes` - Encoded photo bytes, or `None` when the download failed
/// * `font` - Loaded headline font
///
/// # Returns
///
/// An opaque RGB canvas of exactly [`CANVAS_SIZE`]×[`CANVAS_SIZE`] pixels.
pub fn render_card(headline: &str, source_bytes: Option<&[u8]>, font: &FontArc) -> RgbImage {
    let mut canvas = match source_bytes {
        Some(bytes) => match image::load_from_memory(bytes) {
            Ok(img) => {
                // Resize, not crop: original aspect ratio is discarded.
                imageops::resize(&img.to_rgba8(), CANVAS_SIZE, CANVAS_SIZE, FilterType::Triangle)
            }
            Err(e) => {
                warn!(error = %e, "Source photo failed to decode; using placeholder canvas");
                placeholder_canvas()
            }
        },
        None => placeholder_canvas(),
    };

    darken(&mut canvas, OVERLAY_ALPHA);

    let scale = PxScale::from(FONT_SIZE);
    let measure = GlyphMeasure::new(font, scale);
    let lines = wrap_headline(headline, &measure, MAX_LINE_WIDTH);

    // Anchor the line block to the bottom margin.
    let mut y = CANVAS_SIZE as i32 - (lines.len() as i32 * LINE_HEIGHT as i32) - MARGIN as i32;
    for line in &lines {
        draw_text_mut(
            &mut canvas,
            Rgba([255, 255, 255, 255]),
            MARGIN as i32,
            y,
            scale,
            font,
            line,
        );
        y += LINE_HEIGHT as i32;
    }
    info!(lines = lines.len(), "Rendered card");

    image::DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Encode a card as JPEG and persist it, creating the parent directory if
/// absent. A rerun overwrites the previous file silently.
pub async fn write_card(card: &RgbImage, output_path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let mut encoded = Vec::new();
    card.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Jpeg)?;
    tokio::fs::write(output_path, &encoded).await?;
    Ok(())
}

/// Download the source photo.
async fn fetch_photo_bytes(client: &Client, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("photo download returned status {status}").into());
    }
    Ok(response.bytes().await?.to_vec())
}

/// Download the photo, render the card, and persist it.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `headline` - Text to overlay and wrap
/// * `image_url` - Download URL of the source photo
/// * `output_path` - Destination file (JPEG)
/// * `font` - Loaded headline font
///
/// # Returns
///
/// The path of the written card. Download and decode failures degrade to the
/// placeholder canvas; only filesystem or encoding failures are errors.
#[instrument(level = "info", skip_all, fields(path = %output_path.display()))]
pub async fn compose_card(
    client: &Client,
    headline: &str,
    image_url: &str,
    output_path: &Path,
    font: &FontArc,
) -> Result<PathBuf, Box<dyn Error>> {
    let photo_bytes = match fetch_photo_bytes(client, image_url).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(url = %image_url, error = %e, "Photo download failed; using placeholder canvas");
            None
        }
    };

    let card = render_card(headline, photo_bytes.as_deref(), font);
    write_card(&card, output_path).await?;
    info!("Wrote composed card");
    Ok(output_path.to_path_buf())
}
