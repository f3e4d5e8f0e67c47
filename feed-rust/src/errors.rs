use thiserror::Error;
use web3_news::{ServiceError, StoreError};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Article service error: {0}")]
    Service(#[from] ServiceError),
    #[error("A connected wallet is required")]
    WalletNotConnected,
    #[error("Not permitted: {0}")]
    NotPermitted(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
