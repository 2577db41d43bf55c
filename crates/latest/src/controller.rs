use appticles_api::{CategoriesQuery, ContentApi, PostsQuery};
use appticles_types::{
    category::{Category, RawCategory},
    post::{Post, RawPost},
};
use appticles_validation::Validator;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::{
    error::Error,
    shell::{Canonical, ErrorReporter, LoadingOverlay},
    view::ViewModel,
};

/// Everything the latest-posts view needs from the outside world.
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn ContentApi>,
    pub validation: Arc<dyn Validator>,
    pub canonical: Arc<dyn Canonical>,
    pub loading: Arc<dyn LoadingOverlay>,
    pub reporter: Arc<dyn ErrorReporter>,
}

struct RawBatch {
    posts: Vec<RawPost>,
    categories: Vec<RawCategory>,
}

struct Batch {
    posts: Vec<Post>,
    categories: Vec<Category>,
}

/// Loads the home carousel: the latest posts plus all categories.
///
/// Construction kicks off a single load:
/// 1. Set the canonical url and show the loading overlay
/// 2. Fetch categories and posts concurrently, waiting for both
/// 3. Validate both batches, rejecting the load if either is invalid
/// 4. Publish both batches to the view model in one update
/// 5. Hide the overlay and mark the content as loaded, whatever happened
/// 6. Report the error, if any
///
/// The load is never retried.
pub struct LatestController {
    view: watch::Receiver<ViewModel>,
}

impl LatestController {
    const POSTS_LIMIT: u32 = 9;
    const WITH_ARTICLES: bool = false;

    /// Must be called from within a tokio runtime.
    pub fn new(services: Services) -> Self {
        let (view_tx, view_rx) = watch::channel(ViewModel::default());
        services.canonical.set();
        services.loading.show();
        tokio::spawn(Self::run(services, view_tx));
        Self { view: view_rx }
    }

    pub fn view(&self) -> ViewModel {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.view.clone()
    }

    /// Waits for the load to settle and returns the final view model.
    pub async fn settled(&self) -> Result<ViewModel, Error> {
        let mut view = self.view.clone();
        let vm = view
            .wait_for(|vm| vm.content_loaded)
            .await
            .map_err(|_| Error::Closed)?;
        Ok(vm.clone())
    }

    async fn run(services: Services, view: watch::Sender<ViewModel>) {
        let result = Self::load(&services)
            .await
            .map(|batch| Self::populate(&view, batch));

        services.loading.hide();
        view.send_modify(|vm| vm.content_loaded = true);

        if let Err(e) = result {
            services.reporter.error(&e);
        }
    }

    async fn load(services: &Services) -> Result<Batch, Error> {
        let raw = Self::fetch_all(services.api.as_ref()).await?;
        Self::validate(services.validation.as_ref(), raw)
    }

    /// Both requests always run to completion; a failed one does not cancel
    /// the other.
    async fn fetch_all(api: &dyn ContentApi) -> Result<RawBatch, Error> {
        debug!("Fetching latest posts and categories");
        let (categories, posts) = futures::future::join(
            api.find_categories(CategoriesQuery {
                with_articles: Self::WITH_ARTICLES,
            }),
            api.find_posts(PostsQuery {
                limit: Self::POSTS_LIMIT,
            }),
        )
        .await;
        Ok(RawBatch {
            categories: categories?,
            posts: posts?,
        })
    }

    fn validate(validation: &dyn Validator, raw: RawBatch) -> Result<Batch, Error> {
        let posts = validation.validate_posts(raw.posts);
        let categories = validation.validate_categories(raw.categories);
        match (posts, categories) {
            (Ok(posts), Ok(categories)) => Ok(Batch { posts, categories }),
            (posts, categories) => {
                debug!(
                    "Validation failed, posts: {:?}, categories: {:?}",
                    posts.err(),
                    categories.err()
                );
                Err(Error::InvalidData)
            }
        }
    }

    fn populate(view: &watch::Sender<ViewModel>, batch: Batch) {
        info!(
            "Loaded {} posts and {} categories",
            batch.posts.len(),
            batch.categories.len()
        );
        view.send_modify(|vm| {
            vm.posts = batch.posts;
            vm.categories = batch.categories;
        });
    }
}
