use crate::{
    Article, ArticleDraft, ArticleQuery, Ballot, StoreError, VoteChange, VoteType,
    ANONYMOUS_AUTHOR, PLACEHOLDER_IMAGE_URL,
};
use std::{fmt, str::FromStr};

impl VoteType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(StoreError::InvalidVoteType(other.to_string())),
        }
    }
}

impl Ballot {
    pub fn new(voter_id: impl Into<String>, vote_type: VoteType) -> Self {
        Self {
            voter_id: voter_id.into(),
            vote_type,
        }
    }
}

impl Article {
    /// Count of up ballots minus count of down ballots.
    #[must_use]
    pub fn tally(&self) -> i64 {
        tally(&self.user_votes)
    }

    /// The ballot `voter_id` currently holds on this article.
    #[must_use]
    pub fn ballot_for(&self, voter_id: &str) -> Option<VoteType> {
        self.user_votes
            .iter()
            .find(|ballot| ballot.voter_id == voter_id)
            .map(|ballot| ballot.vote_type)
    }

    /// Apply one voter's ballot following the toggle rules: a first vote is
    /// cast, a repeated vote is retracted, an opposite vote replaces the
    /// existing ballot in place. The tally is recomputed from the ballots.
    pub(crate) fn apply_ballot(&mut self, voter_id: &str, vote_type: VoteType) -> VoteChange {
        let existing = self
            .user_votes
            .iter()
            .position(|ballot| ballot.voter_id == voter_id);

        let change = match existing {
            None => {
                self.user_votes.push(Ballot::new(voter_id, vote_type));
                VoteChange::Cast
            }
            Some(index) if self.user_votes[index].vote_type == vote_type => {
                self.user_votes.remove(index);
                VoteChange::Retracted
            }
            Some(index) => {
                self.user_votes[index].vote_type = vote_type;
                VoteChange::Switched
            }
        };

        self.recount();
        change
    }

    /// Drop duplicate ballots (the first one per voter wins) and recompute
    /// the tally. Used on articles entering a store from outside.
    pub(crate) fn reconcile(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.user_votes
            .retain(|ballot| seen.insert(ballot.voter_id.clone()));
        self.recount();
    }

    fn recount(&mut self) {
        self.votes = tally(&self.user_votes);
    }
}

pub(crate) fn tally(ballots: &[Ballot]) -> i64 {
    ballots.iter().fold(0, |acc, ballot| match ballot.vote_type {
        VoteType::Up => acc + 1,
        VoteType::Down => acc - 1,
    })
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category_id: category_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Names of the required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = vec![];
        if self.title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if self.content.trim().is_empty() {
            missing.push("content".to_string());
        }
        missing
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        let missing_fields = self.missing_fields();
        if missing_fields.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation { missing_fields })
        }
    }

    pub(crate) fn resolved_author_name(&self) -> String {
        non_blank(self.author_name.as_deref()).unwrap_or(ANONYMOUS_AUTHOR).to_string()
    }

    pub(crate) fn resolved_image_url(&self) -> String {
        non_blank(self.image_url.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
            .to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ArticleQuery {
    #[must_use]
    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    #[must_use]
    pub fn matching(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub(crate) fn matches(&self, article: &Article) -> bool {
        if let Some(category_id) = &self.category_id {
            if &article.category_id != category_id {
                return false;
            }
        }

        match non_blank(self.term.as_deref()) {
            Some(term) => {
                let term = term.trim().to_lowercase();
                article.title.to_lowercase().contains(&term)
                    || article.content.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}
