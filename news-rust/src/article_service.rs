use crate::{Article, ArticleDraft, ServiceResult};
use serde::{Deserialize, Serialize};

/// Sort direction of a remote listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Paging and filtering of a remote listing.
/// # Default Values
/// - `page`: 1
/// - `limit`: 20
/// - `category`: `None`
/// - `sort_by`: `"createdAt"`
/// - `order`: `SortOrder::Desc`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ListOptions {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "sort")]
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            category: None,
            sort_by: "createdAt".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl ListOptions {
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// A backend that stores articles outside this process.
///
/// Implementations return articles already normalized to the canonical
/// shape.
#[async_trait::async_trait]
pub trait ArticleService: Send + Sync {
    fn provider(&self) -> &'static str;
    async fn list(&self, options: ListOptions) -> ServiceResult<Vec<Article>>;
    async fn get(&self, article_id: &str) -> ServiceResult<Article>;
    async fn create(&self, draft: &ArticleDraft) -> ServiceResult<Article>;
    async fn delete(&self, article_id: &str) -> ServiceResult<()>;
}
