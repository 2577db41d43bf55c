use std::collections::HashSet;

use appticles_types::{
    category::{Category, RawCategory},
    post::{Image, Post, RawImage, RawPost},
    utils::slugify,
};
use tracing::debug;

use super::error::Error;

/// Checks API payloads before they reach a view.
pub trait Validator: Send + Sync {
    fn validate_posts(&self, posts: Vec<RawPost>) -> Result<Vec<Post>, Error>;

    fn validate_categories(&self, categories: Vec<RawCategory>) -> Result<Vec<Category>, Error>;
}

/// The default rule set for export API payloads.
///
/// Posts need an id, a non-blank title and a link; categories need an id and
/// a non-blank name. Ids must be unique within a batch. An empty batch is
/// valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validation;

impl Validation {
    const POST: &'static str = "post";
    const CATEGORY: &'static str = "category";

    fn required<T>(
        value: Option<T>,
        kind: &'static str,
        index: usize,
        field: &'static str,
    ) -> Result<T, Error> {
        value.ok_or(Error::MissingField { kind, index, field })
    }

    fn non_blank(
        value: Option<String>,
        kind: &'static str,
        index: usize,
        field: &'static str,
    ) -> Result<String, Error> {
        let value = Self::required(value, kind, index, field)?;
        if value.trim().is_empty() {
            return Err(Error::BlankField { kind, index, field });
        }
        Ok(value)
    }

    fn unique(seen: &mut HashSet<u64>, kind: &'static str, id: u64) -> Result<(), Error> {
        if seen.insert(id) {
            Ok(())
        } else {
            Err(Error::DuplicateId { kind, id })
        }
    }

    fn image(raw: Option<RawImage>) -> Option<Image> {
        raw.and_then(|img| {
            img.src.map(|src| Image {
                src,
                width: img.width,
                height: img.height,
            })
        })
    }

    fn post(index: usize, raw: RawPost) -> Result<Post, Error> {
        Ok(Post {
            id: Self::required(raw.id, Self::POST, index, "id")?,
            title: Self::non_blank(raw.title, Self::POST, index, "title")?,
            link: Self::required(raw.link, Self::POST, index, "link")?,
            author: raw.author.unwrap_or_default(),
            image: Self::image(raw.image),
            date: raw.date,
            timestamp: raw.timestamp,
            description: raw.description.unwrap_or_default(),
            content: raw.content,
            category_id: raw.category_id,
            category_name: raw.category_name,
            comment_status: raw.comment_status,
            no_comments: raw.no_comments.unwrap_or(0),
        })
    }

    fn category(&self, index: usize, raw: RawCategory) -> Result<Category, Error> {
        let id = Self::required(raw.id, Self::CATEGORY, index, "id")?;
        let name = Self::non_blank(raw.name, Self::CATEGORY, index, "name")?;
        let articles = match raw.articles {
            Some(articles) => self.validate_posts(articles)?,
            None => vec![],
        };
        Ok(Category {
            id,
            order: raw.order.unwrap_or(0),
            name_slug: raw.name_slug.unwrap_or_else(|| slugify(&name)),
            name,
            parent_id: raw.parent_id,
            link: raw.link,
            image: Self::image(raw.image),
            articles,
        })
    }
}

impl Validator for Validation {
    fn validate_posts(&self, posts: Vec<RawPost>) -> Result<Vec<Post>, Error> {
        let mut seen = HashSet::with_capacity(posts.len());
        posts
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let post = Self::post(index, raw)?;
                Self::unique(&mut seen, Self::POST, post.id)?;
                Ok(post)
            })
            .collect::<Result<Vec<_>, Error>>()
            .inspect_err(|e| debug!("Rejected posts: {}", e))
    }

    fn validate_categories(&self, categories: Vec<RawCategory>) -> Result<Vec<Category>, Error> {
        let mut seen = HashSet::with_capacity(categories.len());
        categories
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let category = self.category(index, raw)?;
                Self::unique(&mut seen, Self::CATEGORY, category.id)?;
                Ok(category)
            })
            .collect::<Result<Vec<_>, Error>>()
            .inspect_err(|e| debug!("Rejected categories: {}", e))
    }
}
