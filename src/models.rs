//! Data models for headlines, photo search results, and publish outcomes.
//!
//! This module defines the serde targets for every external JSON payload the
//! pipeline touches, plus the ephemeral publish outcome:
//! - [`HeadlineResponse`] / [`Headline`]: headline feed payload
//! - [`PhotoSearchResponse`] / [`Photo`] / [`PhotoSrc`]: photo search payload
//! - [`GraphPhotoResponse`]: success body of the page photo upload
//! - [`PublishOutcome`]: pass/fail result of one publish attempt
//!
//! Nothing here outlives a single run; headlines are consumed once and never
//! mutated.

use serde::Deserialize;

/// Top-level headline feed response.
///
/// The feed wraps its results in an object with an `articles` array; other
/// fields (total count, pagination) are ignored.
#[derive(Debug, Deserialize)]
pub struct HeadlineResponse {
    /// Ranked current headlines, most prominent first.
    #[serde(default)]
    pub articles: Vec<Headline>,
}

/// A single trending headline as returned by the feed.
#[derive(Debug, Deserialize)]
pub struct Headline {
    /// The headline text used for the card overlay and the post caption.
    pub title: String,
    /// Direct image URL supplied by the feed, when present. The pipeline
    /// searches for a stock photo instead of using it, matching the original
    /// behavior, but it is kept for logging and future use.
    #[serde(default)]
    pub image: Option<String>,
}

/// Top-level photo search response.
#[derive(Debug, Deserialize)]
pub struct PhotoSearchResponse {
    /// Matching photos, best match first. Empty when nothing matched.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// One photo hit from the search service.
#[derive(Debug, Deserialize)]
pub struct Photo {
    /// Download URLs at various sizes.
    pub src: PhotoSrc,
}

/// Size-keyed download URLs for a photo. Only the large variant is used.
#[derive(Debug, Deserialize)]
pub struct PhotoSrc {
    /// URL of the large-size rendition.
    pub large: String,
}

/// Success body of the graph photo upload.
///
/// The endpoint returns the photo's own `id` and, for page posts, the
/// `post_id` of the resulting feed story.
#[derive(Debug, Deserialize)]
pub struct GraphPhotoResponse {
    /// Identifier of the uploaded photo object.
    pub id: String,
    /// Identifier of the page post wrapping the photo, when returned.
    #[serde(default)]
    pub post_id: Option<String>,
}

/// Outcome of one publish attempt. Logged, never stored.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The upload succeeded; carries the post (or photo) identifier.
    Published {
        /// `post_id` when the endpoint returned one, the photo `id` otherwise.
        post_id: String,
    },
    /// The endpoint answered with a non-success status; carries the raw body.
    Failed {
        /// Raw error body as returned by the endpoint.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_response_deserialization() {
        let json = r#"{
            "totalArticles": 2,
            "articles": [
                {
                    "title": "Economy Shows Signs Of Recovery",
                    "description": "ignored",
                    "image": "https://example.com/photo.jpg"
                },
                { "title": "Markets Rally" }
            ]
        }"#;

        let resp: HeadlineResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.articles.len(), 2);
        assert_eq!(resp.articles[0].title, "Economy Shows Signs Of Recovery");
        assert_eq!(
            resp.articles[0].image.as_deref(),
            Some("https://example.com/photo.jpg")
        );
        assert!(resp.articles[1].image.is_none());
    }

    #[test]
    fn test_headline_response_missing_articles() {
        let resp: HeadlineResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.articles.is_empty());
    }

    #[test]
    fn test_photo_search_response_deserialization() {
        let json = r#"{
            "page": 1,
            "per_page": 1,
            "photos": [
                {
                    "id": 1181244,
                    "src": {
                        "original": "https://images.example.com/1181244.jpg",
                        "large": "https://images.example.com/1181244.jpg?w=940"
                    }
                }
            ]
        }"#;

        let resp: PhotoSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.photos.len(), 1);
        assert_eq!(
            resp.photos[0].src.large,
            "https://images.example.com/1181244.jpg?w=940"
        );
    }

    #[test]
    fn test_photo_search_response_no_matches() {
        let resp: PhotoSearchResponse =
            serde_json::from_str(r#"{"photos": [], "total_results": 0}"#).unwrap();
        assert!(resp.photos.is_empty());
    }

    #[test]
    fn test_graph_photo_response_with_post_id() {
        let json = r#"{"id": "111", "post_id": "222_333"}"#;
        let resp: GraphPhotoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id, "111");
        assert_eq!(resp.post_id.as_deref(), Some("222_333"));
    }

    #[test]
    fn test_graph_photo_response_without_post_id() {
        let resp: GraphPhotoResponse = serde_json::from_str(r#"{"id": "111"}"#).unwrap();
        assert_eq!(resp.id, "111");
        assert!(resp.post_id.is_none());
    }
}
