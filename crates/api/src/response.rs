use std::sync::Arc;

use super::endpoint::Endpoint;
use appticles_types::{
    category::{CategoriesResponse, RawCategory},
    post::{ArticlesResponse, RawPost},
};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Categories(Arc<Vec<RawCategory>>),
    Posts(Arc<Vec<RawPost>>),
}

impl ClientResponse {
    pub async fn parse(
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<Self, reqwest::Error> {
        match endpoint {
            Endpoint::Categories { .. } => Ok(ClientResponse::Categories(Arc::new(
                resp.json::<CategoriesResponse>().await?.categories,
            ))),
            Endpoint::Posts { .. } => Ok(ClientResponse::Posts(Arc::new(
                resp.json::<ArticlesResponse>().await?.articles,
            ))),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ClientResponse::Categories(categories) => categories.len(),
            ClientResponse::Posts(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
