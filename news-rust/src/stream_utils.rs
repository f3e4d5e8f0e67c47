use crate::{Article, ArticleService, ListOptions, ServiceResult};
use futures::stream::BoxStream;
use std::collections::HashSet;
use tracing::warn;

/// Walk a service listing page by page, starting at `options.page`, and
/// yield every article. Stops after the first page shorter than
/// `options.limit`, at the first error, when a page starts with an article
/// already yielded (a backend that ignores paging), or when the page number
/// would overflow.
pub fn list_all(
    service: &dyn ArticleService,
    options: ListOptions,
) -> BoxStream<'_, ServiceResult<Article>> {
    let stream = async_stream::try_stream! {
        let mut options = options;
        let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);
        let mut seen = HashSet::new();
        let mut done = limit == 0;

        while !done {
            let page = service.list(options.clone()).await?;

            if page.first().is_some_and(|article| seen.contains(&article.id)) {
                warn!(page = options.page, "listing repeated an earlier page, stopping");
                break;
            }

            done = page.len() < limit;
            for article in page {
                seen.insert(article.id.clone());
                yield article;
            }

            match options.page.checked_add(1) {
                Some(next) => options.page = next,
                None => done = true,
            }
        }
    };

    Box::pin(stream)
}
