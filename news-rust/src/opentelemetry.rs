use crate::{Article, ServiceResult};
use opentelemetry::trace::Status;
use std::{future::Future, time::Instant};
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone, Copy, Debug)]
pub enum ServiceOperation {
    List,
    Get,
    Create,
    Delete,
}

impl ServiceOperation {
    fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

/// Span around one call to an article service.
pub struct ServiceSpan {
    span: Span,
    start_time: Instant,
    article_count: Option<usize>,
    ended: bool,
}

impl ServiceSpan {
    pub fn new(provider: &str, operation: ServiceOperation, article_id: Option<&str>) -> Self {
        let span = info_span!("web3_news.article_service");
        span.set_attribute("web3_news.provider", provider.to_string());
        span.set_attribute("web3_news.operation", operation.as_str());
        if let Some(article_id) = article_id {
            span.set_attribute("web3_news.article_id", article_id.to_string());
        }

        Self {
            span,
            start_time: Instant::now(),
            article_count: None,
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_articles(&mut self, count: usize) {
        *self.article_count.get_or_insert(0) += count;
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(count) = self.article_count {
            self.span.set_attribute(
                "web3_news.article_count",
                i64::try_from(count).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute(
            "web3_news.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

impl Drop for ServiceSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

/// Outputs of a service call that carry articles.
pub trait ArticleCount {
    fn article_count(&self) -> usize;
}

impl ArticleCount for Vec<Article> {
    fn article_count(&self) -> usize {
        self.len()
    }
}

impl ArticleCount for Article {
    fn article_count(&self) -> usize {
        1
    }
}

impl ArticleCount for () {
    fn article_count(&self) -> usize {
        0
    }
}

/// Run one service call inside a [`ServiceSpan`].
pub async fn trace_call<T, Fut>(
    provider: &str,
    operation: ServiceOperation,
    article_id: Option<&str>,
    future: Fut,
) -> ServiceResult<T>
where
    T: ArticleCount,
    Fut: Future<Output = ServiceResult<T>>,
{
    let mut span = ServiceSpan::new(provider, operation, article_id);
    let result = span.instrument_future(future).await;

    match &result {
        Ok(output) => span.on_articles(output.article_count()),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
