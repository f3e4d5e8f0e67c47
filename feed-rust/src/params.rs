use crate::ArticleFeed;
use std::sync::Arc;
use web3_news::{ArticleService, ArticleStore, DEFAULT_TRENDING_LIMIT};

/// Parameters required to create a feed.
/// # Default Values
/// - `remote`: `None`
/// - `trending_limit`: 3
pub struct FeedParams {
    /// The store that owns local article state.
    pub store: Arc<ArticleStore>,
    /// A remote article service preferred for reads when present.
    pub remote: Option<Arc<dyn ArticleService>>,
    /// Number of articles in trending views.
    pub trending_limit: usize,
}

impl FeedParams {
    pub fn new(store: Arc<ArticleStore>) -> Self {
        Self {
            store,
            remote: None,
            trending_limit: DEFAULT_TRENDING_LIMIT,
        }
    }

    /// Set the remote article service
    #[must_use]
    pub fn remote(mut self, remote: Arc<dyn ArticleService>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Set the number of articles in trending views
    #[must_use]
    pub fn trending_limit(mut self, trending_limit: usize) -> Self {
        self.trending_limit = trending_limit;
        self
    }

    #[must_use]
    pub fn build(self) -> ArticleFeed {
        ArticleFeed::new(self)
    }
}
