//! Headline font loading with an explicit, logged fallback.
//!
//! A configured font path is tried first; if it cannot be read or parsed the
//! loader warns and falls back to the embedded DejaVu Sans Bold. The choice
//! is surfaced to the caller as a [`FontChoice`] rather than swallowed.

use ab_glyph::{FontArc, FontVec};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// DejaVu Sans Bold, embedded so a run never depends on system fonts.
static BUILTIN_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

/// Which font ended up being used for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    /// The font at the configured `--font-path`.
    Configured,
    /// The embedded DejaVu Sans Bold.
    BuiltIn,
}

/// Load the headline font.
///
/// # Arguments
///
/// * `path` - Optional configured font path
///
/// # Returns
///
/// The loaded font plus which source it came from. A configured font that
/// cannot be read or parsed degrades to the built-in font with a warning;
/// the built-in font failing to parse is a hard error (the run has no way
/// to render text).
pub fn load_font(path: Option<&Path>) -> Result<(FontArc, FontChoice), Box<dyn Error>> {
    if let Some(path) = path {
        match fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded configured headline font");
                    return Ok((FontArc::from(font), FontChoice::Configured));
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Configured font failed to parse; falling back to built-in font"
                    );
                }
            },
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Configured font could not be read; falling back to built-in font"
                );
            }
        }
    }

    let font = FontArc::try_from_slice(BUILTIN_FONT)?;
    Ok((font, FontChoice::BuiltIn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_font_loads_when_no_path_configured() {
        let (_, choice) = load_font(None).unwrap();
        assert_eq!(choice, FontChoice::BuiltIn);
    }

    #[test]
    fn test_missing_configured_font_falls_back() {
        let (_, choice) = load_font(Some(Path::new("/nonexistent/headline.ttf"))).unwrap();
        assert_eq!(choice, FontChoice::BuiltIn);
    }

    #[test]
    fn test_unparseable_configured_font_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let (_, choice) = load_font(Some(file.path())).unwrap();
        assert_eq!(choice, FontChoice::BuiltIn);
    }

    #[test]
    fn test_valid_configured_font_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_FONT).unwrap();

        let (_, choice) = load_font(Some(file.path())).unwrap();
        assert_eq!(choice, FontChoice::Configured);
    }
}
