//! External content sources feeding the pipeline.
//!
//! Two read-only upstream services supply each card's ingredients:
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Headline feed | [`headlines`] | GNews top-headlines API | API key as query param |
//! | Stock photos | [`photos`] | Pexels search API | API key as `Authorization` header |
//!
//! # Common Patterns
//!
//! Source failures are non-fatal to the run: a failed headline fetch yields
//! an empty list, a failed or empty photo search skips that headline. Raw
//! upstream error bodies are logged (truncated) and never retried.

pub mod headlines;
pub mod photos;
