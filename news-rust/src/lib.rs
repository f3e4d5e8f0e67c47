mod article_service;
mod client_utils;
mod errors;
pub mod news_test;
mod normalize;
pub mod opentelemetry;
mod remote;
pub mod seed;
mod store;
mod stream_utils;
mod types;
mod types_ext;

pub use article_service::{ArticleService, ListOptions, SortOrder};
pub use errors::*;
pub use normalize::{normalize_article, normalize_listing};
pub use remote::{RemoteArticleService, RemoteArticleServiceOptions};
pub use store::ArticleStore;
pub use stream_utils::list_all;
pub use types::*;
