use crate::FeedResult;
use std::future::Future;
use tracing::warn;
use web3_news::{ServiceResult, StoreResult};

/// A value tagged with where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// Served by the remote article service.
    Remote(T),
    /// Served by the local store, either because no remote service is
    /// configured or because the remote attempt failed.
    Local(T),
}

impl<T> Sourced<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Remote(value) | Self::Local(value) => value,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Self::Remote(value) | Self::Local(value) => value,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        match self {
            Self::Remote(value) => Sourced::Remote(f(value)),
            Self::Local(value) => Sourced::Local(f(value)),
        }
    }
}

/// Read remote-first with local fallback.
///
/// A successful remote attempt wins. A failed one is logged and the local
/// read is used instead; if that also fails, its error is returned. The
/// local read is not evaluated when the remote attempt succeeds.
pub async fn resolve<T, Fut>(
    remote: Option<Fut>,
    local: impl FnOnce() -> StoreResult<T>,
) -> FeedResult<Sourced<T>>
where
    Fut: Future<Output = ServiceResult<T>>,
{
    if let Some(remote) = remote {
        match remote.await {
            Ok(value) => return Ok(Sourced::Remote(value)),
            Err(err) => warn!("remote article service failed, falling back to local data: {err}"),
        }
    }

    Ok(Sourced::Local(local()?))
}
