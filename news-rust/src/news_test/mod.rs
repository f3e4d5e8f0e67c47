//! Test doubles for code built on this crate.

mod service;

pub use service::{MockArticleService, MockCall};
