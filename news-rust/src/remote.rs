use crate::{
    client_utils::{send_empty, send_json, unwrap_envelope},
    normalize::{normalize_article, normalize_listing},
    opentelemetry::{trace_call, ServiceOperation},
    Article, ArticleDraft, ArticleService, ListOptions, ServiceResult,
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};

const PROVIDER: &str = "rest";
const DEFAULT_BASE_URL: &str = "http://localhost:5050";
const DEFAULT_API_PATH: &str = "/api/v1/articles";

/// # Default Values
/// - `base_url`: `http://localhost:5050`
/// - `api_path`: `/api/v1/articles`
/// - `client`: a fresh `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct RemoteArticleServiceOptions {
    pub base_url: Option<String>,
    pub api_path: Option<String>,
    pub client: Option<Client>,
}

/// Article service backed by a REST API.
pub struct RemoteArticleService {
    base_url: String,
    api_path: String,
    client: Client,
}

impl RemoteArticleService {
    #[must_use]
    pub fn new(options: RemoteArticleServiceOptions) -> Self {
        Self {
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_path: options
                .api_path
                .unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
            client: options.client.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.api_path)
    }

    fn article_url(&self, article_id: &str) -> String {
        format!("{}/{}", self.collection_url(), article_id)
    }

    fn json_headers(request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
    }
}

impl Default for RemoteArticleService {
    fn default() -> Self {
        Self::new(RemoteArticleServiceOptions::default())
    }
}

#[async_trait::async_trait]
impl ArticleService for RemoteArticleService {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn list(&self, options: ListOptions) -> ServiceResult<Vec<Article>> {
        trace_call(PROVIDER, ServiceOperation::List, None, async {
            let request = Self::json_headers(self.client.get(self.collection_url()).query(&options));
            let body = send_json(request).await?;
            normalize_listing(&body)
        })
        .await
    }

    async fn get(&self, article_id: &str) -> ServiceResult<Article> {
        trace_call(PROVIDER, ServiceOperation::Get, Some(article_id), async {
            let request = Self::json_headers(self.client.get(self.article_url(article_id)));
            let body = send_json(request).await?;
            normalize_article(&unwrap_envelope(body))
        })
        .await
    }

    async fn create(&self, draft: &ArticleDraft) -> ServiceResult<Article> {
        trace_call(PROVIDER, ServiceOperation::Create, None, async {
            let request = Self::json_headers(self.client.post(self.collection_url()).json(draft));
            let body = send_json(request).await?;
            normalize_article(&unwrap_envelope(body))
        })
        .await
    }

    async fn delete(&self, article_id: &str) -> ServiceResult<()> {
        trace_call(PROVIDER, ServiceOperation::Delete, Some(article_id), async {
            let request = Self::json_headers(self.client.delete(self.article_url(article_id)));
            send_empty(request).await
        })
        .await
    }
}
