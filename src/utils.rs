//! Utility functions for logging and file system operations.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings (raw upstream error bodies, mostly) are truncated to `max`
/// characters with an ellipsis and byte count indicator appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The original string if shorter than `max` bytes, otherwise a truncated
/// version with `"…(+N bytes)"` appended. The cut lands on a char boundary,
/// so multi-byte bodies never split a character.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file. Rerunning against an
/// existing directory is harmless.
///
/// # Arguments
///
/// * `path` - The directory path to validate
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_boundary() {
        // Two-byte chars put every odd byte offset inside a character; the
        // cut must back up to the previous boundary instead of panicking.
        let s = "é".repeat(200); // 400 bytes
        let result = truncate_for_log(&s, 301);
        assert!(result.starts_with(&"é".repeat(150)));
        assert!(result.contains("…(+100 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_short_string_untouched() {
        let s = "café ☕";
        assert_eq!(truncate_for_log(s, 100), s);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("cards").to_string_lossy().into_owned();

        ensure_writable_dir(&target).await.unwrap();
        assert!(std::path::Path::new(&target).is_dir());
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().to_string_lossy().into_owned();

        ensure_writable_dir(&target).await.unwrap();
        ensure_writable_dir(&target).await.unwrap();
    }
}
