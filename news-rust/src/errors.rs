use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No article or category resolves to the given id.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Required fields were empty after trimming.
    #[error("Missing required fields: {}", missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },
    /// The voter identity was empty.
    #[error("A voter identity is required to vote")]
    InvalidVoter,
    /// The vote type was neither "up" nor "down".
    #[error("Invalid vote type: {0}")]
    InvalidVoteType(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request to the article service failed or the response body could
    /// not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the service had a shape that could not be mapped to
    /// an article (e.g. an article without an id).
    #[error("Invariant: {0}")]
    Invariant(String),
    /// An in-process service rejected the operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
