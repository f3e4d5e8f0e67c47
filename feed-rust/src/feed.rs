use crate::{resolve, FeedParams, FeedResult, FeedSession, Sourced, UserRole, WalletSession};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};
use web3_news::{Article, ArticleService, ArticleStore, Category, ListOptions};

/// Entry point for the rendering layer.
///
/// Reads prefer the remote article service when one is configured and fall
/// back to the local store. Writes go through a [`FeedSession`].
pub struct ArticleFeed {
    store: Arc<ArticleStore>,
    remote: Option<Arc<dyn ArticleService>>,
    trending_limit: usize,
    /// Local article id to the id the remote service assigned on create.
    remote_ids: RwLock<HashMap<String, String>>,
}

impl ArticleFeed {
    #[must_use]
    pub fn new(params: FeedParams) -> Self {
        Self {
            store: params.store,
            remote: params.remote,
            trending_limit: params.trending_limit,
            remote_ids: RwLock::new(HashMap::new()),
        }
    }

    pub fn builder(store: Arc<ArticleStore>) -> FeedParams {
        FeedParams::new(store)
    }

    #[must_use]
    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub(crate) fn remote(&self) -> Option<&dyn ArticleService> {
        self.remote.as_deref()
    }

    /// The id the remote service knows a locally published article by.
    #[must_use]
    pub fn remote_id(&self, article_id: &str) -> Option<String> {
        self.remote_ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(article_id)
            .cloned()
    }

    pub(crate) fn link_remote_id(&self, article_id: &str, remote_id: String) {
        self.remote_ids
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(article_id.to_string(), remote_id);
    }

    pub(crate) fn unlink_remote_id(&self, article_id: &str) -> Option<String> {
        self.remote_ids
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(article_id)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories()
    }

    pub fn category(&self, category_id: &str) -> FeedResult<Category> {
        Ok(self.store.get_category_by_id(category_id)?)
    }

    /// Articles for the home or category page. `None` lists every category.
    pub async fn load_articles(&self, category_id: Option<&str>) -> FeedResult<Sourced<Vec<Article>>> {
        let remote = self.remote().map(|service| {
            let options = match category_id {
                Some(category_id) => ListOptions::default().category(category_id),
                None => ListOptions::default(),
            };
            service.list(options)
        });

        resolve(remote, || {
            Ok(match category_id {
                Some(category_id) => self.store.list_by_category(category_id),
                None => self.store.articles(),
            })
        })
        .await
    }

    /// One article for the article page.
    pub async fn load_article(&self, article_id: &str) -> FeedResult<Sourced<Article>> {
        let remote = self.remote().map(|service| service.get(article_id));
        resolve(remote, || self.store.get_by_id(article_id)).await
    }

    /// Highest-voted local articles, optionally within one category.
    #[must_use]
    pub fn trending(&self, category_id: Option<&str>) -> Vec<Article> {
        self.store.trending(category_id, self.trending_limit)
    }

    /// Open a session acting as the given wallet and role.
    #[must_use]
    pub fn session(&self, wallet: &WalletSession, role: UserRole) -> FeedSession<'_> {
        FeedSession::new(self, wallet.voter_id().map(ToString::to_string), role)
    }
}
