mod errors;
mod feed;
mod params;
mod session;
mod source;
mod types;
mod wallet;

pub use errors::{FeedError, FeedResult};
pub use feed::ArticleFeed;
pub use params::FeedParams;
pub use session::FeedSession;
pub use source::{resolve, Sourced};
pub use types::Profile;
pub use wallet::{UserRole, WalletSession};
