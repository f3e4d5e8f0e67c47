use crate::{
    seed, Article, ArticleDraft, ArticleQuery, Category, StoreError, StoreResult, VoteOutcome,
    VoteType, VoterBallot,
};
use chrono::Utc;
use std::{
    collections::HashSet,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::debug;

/// Owns the article collection and the category list.
///
/// The store is the only writer of article data. Every query hands out
/// cloned snapshots, and every mutation runs as one read-modify-write under
/// a single write lock, so readers never observe ballots and tally out of
/// step and concurrent voters never overwrite each other.
#[derive(Debug)]
pub struct ArticleStore {
    state: RwLock<StoreState>,
}

#[derive(Debug)]
struct StoreState {
    /// Newest first.
    articles: Vec<Article>,
    categories: Vec<Category>,
    /// Every id ever held by this store, including deleted ones.
    issued_ids: HashSet<String>,
    next_sequence: u64,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

impl ArticleStore {
    /// Create a store over the given categories and articles. Articles keep
    /// their order; their tallies are recomputed from their ballots and
    /// duplicate ids after the first are dropped.
    #[must_use]
    pub fn new(categories: Vec<Category>, articles: Vec<Article>) -> Self {
        let mut issued_ids = HashSet::new();
        let articles = articles
            .into_iter()
            .filter_map(|mut article| {
                if !issued_ids.insert(article.id.clone()) {
                    debug!(article_id = %article.id, "dropping article with duplicate id");
                    return None;
                }
                article.reconcile();
                Some(article)
            })
            .collect();

        Self {
            state: RwLock::new(StoreState {
                articles,
                categories,
                issued_ids,
                next_sequence: 1,
            }),
        }
    }

    /// Create a store populated with the site's starting categories and
    /// articles.
    #[must_use]
    pub fn with_seed_data() -> Self {
        Self::new(seed::categories(), seed::articles())
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every article, newest first.
    #[must_use]
    pub fn articles(&self) -> Vec<Article> {
        self.read().articles.clone()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().articles.is_empty()
    }

    /// Articles in `category_id`, in collection order.
    #[must_use]
    pub fn list_by_category(&self, category_id: &str) -> Vec<Article> {
        self.read()
            .articles
            .iter()
            .filter(|article| article.category_id == category_id)
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, article_id: &str) -> StoreResult<Article> {
        self.read()
            .articles
            .iter()
            .find(|article| article.id == article_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("article {article_id}")))
    }

    pub fn get_category_by_id(&self, category_id: &str) -> StoreResult<Category> {
        self.read()
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("category {category_id}")))
    }

    /// Highest-voted articles, optionally within one category. Equal tallies
    /// keep their collection order. At most `limit` articles are returned.
    #[must_use]
    pub fn trending(&self, category_id: Option<&str>, limit: usize) -> Vec<Article> {
        if limit == 0 {
            return vec![];
        }

        let mut ranked: Vec<Article> = self
            .read()
            .articles
            .iter()
            .filter(|article| category_id.is_none_or(|id| article.category_id == id))
            .cloned()
            .collect();

        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked.truncate(limit);
        ranked
    }

    /// Record `voter_id`'s ballot on an article.
    ///
    /// A first vote is cast, repeating the same vote retracts it, and voting
    /// the other way switches the ballot. The tally is recomputed from the
    /// ballot set every time.
    pub fn vote(
        &self,
        article_id: &str,
        vote_type: VoteType,
        voter_id: &str,
    ) -> StoreResult<VoteOutcome> {
        if voter_id.trim().is_empty() {
            return Err(StoreError::InvalidVoter);
        }

        let mut state = self.write();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == article_id)
            .ok_or_else(|| StoreError::NotFound(format!("article {article_id}")))?;

        let change = article.apply_ballot(voter_id, vote_type);
        debug!(
            article_id,
            voter_id,
            vote_type = %vote_type,
            ?change,
            votes = article.votes,
            "applied vote"
        );

        Ok(VoteOutcome {
            article_id: article.id.clone(),
            change,
            votes: article.votes,
            ballot: article.ballot_for(voter_id),
        })
    }

    /// Same as [`ArticleStore::vote`] with the vote type given in its string
    /// form (`"up"` or `"down"`).
    pub fn vote_raw(
        &self,
        article_id: &str,
        vote_type: &str,
        voter_id: &str,
    ) -> StoreResult<VoteOutcome> {
        if voter_id.trim().is_empty() {
            return Err(StoreError::InvalidVoter);
        }
        // Resolve the article first so an unknown id wins over a bad type.
        self.get_by_id(article_id)?;
        self.vote(article_id, vote_type.parse()?, voter_id)
    }

    /// Add a new article to the front of the collection and return its id.
    pub fn publish(&self, draft: ArticleDraft) -> StoreResult<String> {
        draft.validate()?;

        let mut state = self.write();
        let id = state.issue_id();
        let author_name = draft.resolved_author_name();
        let image_url = draft.resolved_image_url();

        let article = Article {
            id: id.clone(),
            title: draft.title,
            content: draft.content,
            category_id: draft.category_id,
            author: draft.author,
            author_name,
            image_url,
            created_at: Utc::now(),
            votes: 0,
            user_votes: vec![],
        };

        debug!(article_id = %id, category_id = %article.category_id, "published article");
        state.articles.insert(0, article);
        Ok(id)
    }

    /// Replace the editable fields of an article. Its id, author, creation
    /// time and ballots are kept.
    pub fn edit(&self, article_id: &str, draft: ArticleDraft) -> StoreResult<Article> {
        draft.validate()?;

        let mut state = self.write();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == article_id)
            .ok_or_else(|| StoreError::NotFound(format!("article {article_id}")))?;

        article.author_name = draft.resolved_author_name();
        article.image_url = draft.resolved_image_url();
        article.title = draft.title;
        article.content = draft.content;
        article.category_id = draft.category_id;

        debug!(article_id, "edited article");
        Ok(article.clone())
    }

    /// Remove an article. Deleting an id that is not present, including one
    /// that was already deleted, fails with `NotFound`.
    pub fn delete_by_id(&self, article_id: &str) -> StoreResult<()> {
        let mut state = self.write();
        let index = state
            .articles
            .iter()
            .position(|article| article.id == article_id)
            .ok_or_else(|| StoreError::NotFound(format!("article {article_id}")))?;

        state.articles.remove(index);
        debug!(article_id, "deleted article");
        Ok(())
    }

    /// Articles published by `author`, in collection order.
    #[must_use]
    pub fn articles_by_author(&self, author: &str) -> Vec<Article> {
        self.read()
            .articles
            .iter()
            .filter(|article| article.author == author)
            .cloned()
            .collect()
    }

    /// Every article `voter_id` holds a ballot on, with that ballot.
    #[must_use]
    pub fn votes_by_voter(&self, voter_id: &str) -> Vec<VoterBallot> {
        self.read()
            .articles
            .iter()
            .filter_map(|article| {
                article.ballot_for(voter_id).map(|vote_type| VoterBallot {
                    article: article.clone(),
                    vote_type,
                })
            })
            .collect()
    }

    /// Articles matching `query`, newest first by creation time.
    #[must_use]
    pub fn search(&self, query: &ArticleQuery) -> Vec<Article> {
        let mut found: Vec<Article> = self
            .read()
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect();

        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl StoreState {
    fn issue_id(&mut self) -> String {
        loop {
            let id = format!(
                "article-{}-{}",
                Utc::now().timestamp_millis(),
                self.next_sequence
            );
            self.next_sequence += 1;
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }
}
