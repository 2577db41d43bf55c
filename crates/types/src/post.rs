use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope returned by the `exportarticles` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<RawPost>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    pub src: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A post as it comes off the wire. Nothing is guaranteed to be present until
/// it has been through validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub link: Option<String>,
    pub image: Option<RawImage>,
    pub date: Option<String>,
    pub timestamp: Option<i64>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<u64>,
    pub category_name: Option<String>,
    pub comment_status: Option<String>,
    pub no_comments: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub link: String,
    pub image: Option<Image>,
    pub date: Option<String>,
    pub timestamp: Option<i64>,
    pub description: String,
    pub content: Option<String>,
    pub category_id: Option<u64>,
    pub category_name: Option<String>,
    pub comment_status: Option<String>,
    pub no_comments: u32,
}

impl Post {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn comments_open(&self) -> bool {
        self.comment_status.as_deref() == Some("open")
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
    }

    /// Plain-text version of the description, for the carousel caption.
    pub fn excerpt(&self) -> String {
        crate::utils::remove_html(&self.description).unwrap_or_else(|_| self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: 12,
            title: "Hello".to_string(),
            author: "admin".to_string(),
            link: "https://example.com/hello".to_string(),
            image: None,
            date: None,
            timestamp: Some(1_700_000_000),
            description: "<p>A <em>short</em> intro &amp; more</p>".to_string(),
            content: None,
            category_id: Some(3),
            category_name: Some("News".to_string()),
            comment_status: Some("open".to_string()),
            no_comments: 0,
        }
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_excerpt() {
        assert_eq!(post().excerpt(), "A short intro & more");
    }

    #[test]
    fn test_published_at() {
        let published = post().published_at().unwrap();
        assert_eq!(published.timestamp(), 1_700_000_000);
        let undated = Post {
            timestamp: None,
            ..post()
        };
        assert!(undated.published_at().is_none());
    }

    #[test]
    fn test_flags() {
        let p = post();
        assert!(p.comments_open());
        assert!(!p.has_image());
    }

    #[test]
    fn test_parse_articles_response() {
        let body = r#"{"articles":[{"id":7,"title":"T","link":"https://x/7","image":{"src":"https://x/7.jpg","width":640}},{"title":null}]}"#;
        let resp: ArticlesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.articles.len(), 2);
        assert_eq!(resp.articles[0].id, Some(7));
        assert_eq!(resp.articles[0].image.as_ref().unwrap().width, Some(640));
        assert_eq!(resp.articles[1], RawPost::default());
    }
}
