use appticles_types::{category::Category, post::Post};

/// Fields read by the latest-posts carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    /// Set once the load settles, whether or not anything was loaded.
    pub content_loaded: bool,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.categories.is_empty()
    }
}
