use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when an article is published without one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Image used when an article is published without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg?height=400&width=800";

/// Number of articles returned by a trending view unless told otherwise.
pub const DEFAULT_TRENDING_LIMIT: usize = 3;

/// A browseable section of the site. Categories are seeded at startup and
/// never change at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Direction of a ballot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// A single voter's active vote on one article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    /// Opaque voter identity, usually a wallet address.
    #[serde(rename = "walletAddress", alias = "voterId")]
    pub voter_id: String,
    pub vote_type: VoteType,
}

/// The canonical article shape shared by the store, the remote service and
/// the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Formatted text blob. Never parsed here.
    pub content: String,
    pub category_id: String,
    /// Identity of the publisher, usually a wallet address.
    pub author: String,
    pub author_name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    /// Always `up - down` over `user_votes`.
    pub votes: i64,
    /// At most one ballot per voter, in the order they were first cast.
    pub user_votes: Vec<Ballot>,
}

/// Caller-supplied fields of a new or edited article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category_id: String,
    #[serde(default)]
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// What a call to vote did to the voter's ballot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VoteChange {
    /// The voter had no ballot and now has one.
    Cast,
    /// The voter repeated their ballot, which removes it.
    Retracted,
    /// The voter flipped their ballot to the other direction.
    Switched,
}

/// Result of a vote on an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub article_id: String,
    pub change: VoteChange,
    /// The recomputed tally.
    pub votes: i64,
    /// The voter's ballot after the vote, if any.
    pub ballot: Option<VoteType>,
}

/// An article a voter holds a ballot on, for profile views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VoterBallot {
    pub article: Article,
    pub vote_type: VoteType,
}

/// Moderation filter over the whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    /// Restrict to one category. `None` matches every category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Case-insensitive substring matched against title or content. Blank
    /// terms are ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}
