use appticles_types::{category::RawCategory, post::RawPost};
use async_trait::async_trait;
use tracing::{debug, error};

use super::{endpoint::Endpoint, error::Error, response::ClientResponse};
use std::sync::Arc;

/// Configuration for the client.
/// base_url: Root of the WordPress site serving the export script.
/// export_path: Path of the export script relative to base_url.
/// (default: the WordPress Mobile Pack plugin location)
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub export_path: Option<String>,
}

impl Config {
    const DEFAULT_EXPORT_PATH: &'static str =
        "/wp-content/plugins/wordpress-mobile-pack/export/content.php";

    pub fn new(base_url: impl Into<String>, export_path: Option<String>) -> Self {
        Config {
            base_url: base_url.into(),
            export_path,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn export_path(&self) -> &str {
        self.export_path
            .as_deref()
            .unwrap_or(Self::DEFAULT_EXPORT_PATH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoriesQuery {
    pub with_articles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsQuery {
    pub limit: u32,
}

/// Content source for the reader views.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn find_categories(&self, query: CategoriesQuery) -> Result<Vec<RawCategory>, Error>;

    async fn find_posts(&self, query: PostsQuery) -> Result<Vec<RawPost>, Error>;
}

/// A client for the Appticles content export API.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn new_request(&self, endpoint: &Endpoint) -> Result<reqwest::Request, Error> {
        let url = endpoint.url(self.cfg.base_url(), self.cfg.export_path());
        let parsed = url.parse().map_err(|_| Error::InvalidUrl(url))?;
        Ok(reqwest::Request::new(reqwest::Method::GET, parsed))
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        let request = self.new_request(endpoint)?;
        debug!("Sending request to {}", request.url());
        self.handle_response(endpoint, self.http.execute(request).await?)
            .await
    }

    pub async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        match resp.status() {
            reqwest::StatusCode::OK => {
                let parsed = ClientResponse::parse(endpoint, resp).await?;
                debug!("request: {} status: OK, items: {}", endpoint, parsed.len());
                Ok(parsed)
            }
            _ => {
                error!("request {} status: {}", endpoint, resp.status());
                Err(Error::StatusCode(resp.status().as_u16().to_string()))
            }
        }
    }

    pub async fn get_categories(&self, with_articles: bool) -> Result<Arc<Vec<RawCategory>>, Error> {
        match self.get(&Endpoint::Categories { with_articles }).await? {
            ClientResponse::Categories(categories) => Ok(categories),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_posts(&self, limit: u32) -> Result<Arc<Vec<RawPost>>, Error> {
        match self.get(&Endpoint::Posts { limit }).await? {
            ClientResponse::Posts(posts) => Ok(posts),
            _ => Err(Error::InvalidResponse),
        }
    }
}

#[async_trait]
impl ContentApi for Client {
    async fn find_categories(&self, query: CategoriesQuery) -> Result<Vec<RawCategory>, Error> {
        self.get_categories(query.with_articles)
            .await
            .map(Arc::unwrap_or_clone)
    }

    async fn find_posts(&self, query: PostsQuery) -> Result<Vec<RawPost>, Error> {
        self.get_posts(query.limit).await.map(Arc::unwrap_or_clone)
    }
}
