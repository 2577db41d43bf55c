use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Categories { with_articles: bool },
    Posts { limit: u32 },
}

impl Endpoint {
    pub fn url(&self, base_url: &str, export_path: &str) -> String {
        format!(
            "{}/{}?{}",
            base_url.trim_end_matches('/'),
            export_path.trim_start_matches('/'),
            self
        )
    }
}

/// Renders the query string understood by the export script.
impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Categories { with_articles } => write!(
                f,
                "content=exportcategories&withArticles={}",
                u8::from(*with_articles)
            ),
            Self::Posts { limit } => write!(f, "content=exportarticles&limit={}", limit),
        }
    }
}
