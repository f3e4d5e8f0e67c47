//! Mapping of article payloads from the remote service into the canonical
//! [`Article`] shape.
//!
//! The backend has served several shapes over time: `id` or `_id`, a flat
//! `categoryId` or a nested `category`, the author as a string or an
//! object. Every caller goes through [`normalize_article`] instead of
//! guessing fields itself.

use crate::{
    types_ext::tally, Article, Ballot, ServiceError, ServiceResult, VoteType, ANONYMOUS_AUTHOR,
    PLACEHOLDER_IMAGE_URL,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, warn};

/// Map one remote article payload to an [`Article`].
///
/// Only the id is required. The tally is always recomputed from the
/// ballots; a `votes` number sent without matching ballots is discarded.
pub fn normalize_article(value: &Value) -> ServiceResult<Article> {
    let object = value
        .as_object()
        .ok_or_else(|| ServiceError::Invariant(format!("Expected article object, got {value}")))?;

    let id = ["id", "_id"]
        .iter()
        .find_map(|key| object.get(*key).and_then(id_string))
        .ok_or_else(|| ServiceError::Invariant("Article payload has no id".to_string()))?;

    let category_id = object
        .get("categoryId")
        .and_then(scalar_string)
        .or_else(|| match object.get("category") {
            Some(Value::Object(category)) => category.get("id").and_then(scalar_string),
            Some(other) => scalar_string(other),
            None => None,
        })
        .unwrap_or_default();

    let (author, nested_author_name) = match object.get("author") {
        Some(Value::Object(author)) => (
            ["walletAddress", "id", "address"]
                .iter()
                .find_map(|key| author.get(*key).and_then(scalar_string))
                .unwrap_or_default(),
            author.get("name").and_then(non_blank_string),
        ),
        Some(other) => (scalar_string(other).unwrap_or_default(), None),
        None => (String::new(), None),
    };

    let author_name = object
        .get("authorName")
        .and_then(non_blank_string)
        .or(nested_author_name)
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

    let image_url = ["imageUrl", "image"]
        .iter()
        .find_map(|key| object.get(*key).and_then(non_blank_string))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    let created_at = match object.get("createdAt").and_then(Value::as_str) {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(err) => {
                warn!(article_id = %id, raw, "unparseable createdAt: {err}");
                DateTime::default()
            }
        },
        None => {
            warn!(article_id = %id, "missing createdAt, using the Unix epoch");
            DateTime::default()
        }
    };

    let user_votes = object
        .get("userVotes")
        .and_then(Value::as_array)
        .map(|entries| normalize_ballots(&id, entries))
        .unwrap_or_default();

    let votes = tally(&user_votes);
    if let Some(reported) = object.get("votes").and_then(Value::as_i64) {
        if reported != votes {
            debug!(
                article_id = %id,
                reported,
                recomputed = votes,
                "discarding remote vote count that does not match ballots"
            );
        }
    }

    let mut article = Article {
        id,
        title: string_field(object.get("title")),
        content: string_field(object.get("content")),
        category_id,
        author,
        author_name,
        image_url,
        created_at,
        votes,
        user_votes,
    };
    article.reconcile();
    Ok(article)
}

/// Map a remote listing to articles. Both `{"articles": [...]}` and a bare
/// array are accepted.
pub fn normalize_listing(value: &Value) -> ServiceResult<Vec<Article>> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(object) => object
            .get("articles")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ServiceError::Invariant("Listing payload has no articles array".to_string())
            })?,
        other => {
            return Err(ServiceError::Invariant(format!(
                "Expected article listing, got {other}"
            )))
        }
    };

    entries.iter().map(normalize_article).collect()
}

fn normalize_ballots(article_id: &str, entries: &[Value]) -> Vec<Ballot> {
    entries
        .iter()
        .filter_map(|entry| {
            let voter_id = ["walletAddress", "voterId"]
                .iter()
                .find_map(|key| entry.get(*key).and_then(non_blank_string));
            let vote_type = entry
                .get("voteType")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse::<VoteType>().ok());

            if let (Some(voter_id), Some(vote_type)) = (voter_id, vote_type) {
                Some(Ballot::new(voter_id, vote_type))
            } else {
                warn!(article_id, %entry, "dropping malformed ballot");
                None
            }
        })
        .collect()
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn id_string(value: &Value) -> Option<String> {
    scalar_string(value).filter(|id| !id.trim().is_empty())
}

fn non_blank_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .unwrap_or_default()
}
