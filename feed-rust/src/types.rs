use serde::{Deserialize, Serialize};
use web3_news::{Article, VoterBallot};

/// What a connected wallet has published and voted on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub voter_id: String,
    pub published: Vec<Article>,
    pub votes: Vec<VoterBallot>,
}
