use serde::{Deserialize, Serialize};

use super::post::{Post, RawImage, RawPost, Image};

/// Envelope returned by the `exportcategories` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<RawCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: Option<u64>,
    pub order: Option<u32>,
    pub name: Option<String>,
    pub name_slug: Option<String>,
    pub parent_id: Option<u64>,
    pub link: Option<String>,
    pub image: Option<RawImage>,
    /// Only present when the categories were requested with articles.
    pub articles: Option<Vec<RawPost>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub order: u32,
    pub name: String,
    pub name_slug: String,
    pub parent_id: Option<u64>,
    pub link: Option<String>,
    pub image: Option<Image>,
    pub articles: Vec<Post>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        matches!(self.parent_id, None | Some(0))
    }
}
