pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;

pub use client::{CategoriesQuery, Client, Config, ContentApi, PostsQuery};
pub use error::Error;
