use crate::{ArticleFeed, FeedError, FeedResult, Profile, UserRole};
use tracing::{debug, info, warn};
use web3_news::{Article, ArticleDraft, ArticleQuery, VoteOutcome, VoteType};

/// Actions taken on behalf of one wallet.
///
/// Every mutation needs a connected wallet. Editing and deleting an article
/// additionally need the wallet to be its author, or the admin flag.
pub struct FeedSession<'a> {
    feed: &'a ArticleFeed,
    voter_id: Option<String>,
    role: UserRole,
}

impl<'a> FeedSession<'a> {
    pub(crate) fn new(feed: &'a ArticleFeed, voter_id: Option<String>, role: UserRole) -> Self {
        Self {
            feed,
            voter_id,
            role,
        }
    }

    fn require_wallet(&self) -> FeedResult<&str> {
        self.voter_id.as_deref().ok_or(FeedError::WalletNotConnected)
    }

    fn require_manage(&self, article: &Article) -> FeedResult<()> {
        if self.can_manage(article) {
            Ok(())
        } else {
            Err(FeedError::NotPermitted(format!(
                "only the author or an admin can change article {}",
                article.id
            )))
        }
    }

    #[must_use]
    pub fn voter_id(&self) -> Option<&str> {
        self.voter_id.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Whether this session may edit or delete `article`.
    #[must_use]
    pub fn can_manage(&self, article: &Article) -> bool {
        self.role.is_admin() || self.voter_id.as_deref() == Some(article.author.as_str())
    }

    /// The ballot this session's wallet holds on `article`.
    #[must_use]
    pub fn current_vote(&self, article: &Article) -> Option<VoteType> {
        self.voter_id
            .as_deref()
            .and_then(|voter_id| article.ballot_for(voter_id))
    }

    /// Vote `"up"` or `"down"` on a local article.
    pub fn vote(&self, article_id: &str, vote_type: &str) -> FeedResult<VoteOutcome> {
        let voter_id = self.require_wallet()?;
        Ok(self.feed.store().vote_raw(article_id, vote_type, voter_id)?)
    }

    /// Publish as this wallet. The draft's author is always the wallet.
    ///
    /// When a remote service is configured the article is forwarded to it
    /// after the local publish and the id the service assigns is remembered.
    /// A remote failure is logged and the local article is kept.
    pub async fn publish(&self, draft: ArticleDraft) -> FeedResult<String> {
        let voter_id = self.require_wallet()?;
        let draft = draft.with_author(voter_id);

        let article_id = self.feed.store().publish(draft.clone())?;
        info!(article_id = %article_id, author = voter_id, "published article");

        if let Some(remote) = self.feed.remote() {
            match remote.create(&draft).await {
                Ok(created) => {
                    debug!(article_id = %article_id, remote_id = %created.id, "forwarded article");
                    self.feed.link_remote_id(&article_id, created.id);
                }
                Err(err) => warn!(
                    article_id = %article_id,
                    "failed to forward article to {}: {err}",
                    remote.provider()
                ),
            }
        }

        Ok(article_id)
    }

    pub fn edit(&self, article_id: &str, draft: ArticleDraft) -> FeedResult<Article> {
        self.require_wallet()?;
        let article = self.feed.store().get_by_id(article_id)?;
        self.require_manage(&article)?;

        Ok(self.feed.store().edit(article_id, draft)?)
    }

    /// Delete as the author or an admin. When the article was forwarded on
    /// publish, the remote copy is deleted by its remote id afterwards on a
    /// best-effort basis.
    pub async fn delete(&self, article_id: &str) -> FeedResult<()> {
        self.require_wallet()?;
        let article = self.feed.store().get_by_id(article_id)?;
        self.require_manage(&article)?;

        self.feed.store().delete_by_id(article_id)?;
        info!(article_id, admin = self.role.is_admin(), "deleted article");

        let remote_id = self.feed.unlink_remote_id(article_id);
        match (self.feed.remote(), remote_id) {
            (Some(remote), Some(remote_id)) => {
                if let Err(err) = remote.delete(&remote_id).await {
                    warn!(
                        article_id,
                        remote_id = %remote_id,
                        "failed to delete article from {}: {err}",
                        remote.provider()
                    );
                }
            }
            (Some(_), None) => {
                debug!(article_id, "article was never forwarded, skipping remote delete");
            }
            (None, _) => {}
        }

        Ok(())
    }

    /// Articles this wallet published and the ballots it holds.
    pub fn profile(&self) -> FeedResult<Profile> {
        let voter_id = self.require_wallet()?;
        let store = self.feed.store();

        Ok(Profile {
            voter_id: voter_id.to_string(),
            published: store.articles_by_author(voter_id),
            votes: store.votes_by_voter(voter_id),
        })
    }

    /// The moderation listing. Requires the admin flag.
    pub fn admin_articles(&self, query: &ArticleQuery) -> FeedResult<Vec<Article>> {
        self.require_wallet()?;
        if !self.role.is_admin() {
            return Err(FeedError::NotPermitted(
                "the admin dashboard requires the admin flag".to_string(),
            ));
        }

        Ok(self.feed.store().search(query))
    }
}
