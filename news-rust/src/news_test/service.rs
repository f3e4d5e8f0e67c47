use std::{collections::VecDeque, sync::Mutex};

use crate::{
    Article, ArticleDraft, ArticleService, ListOptions, ServiceError, ServiceResult,
};

/// A call received by [`MockArticleService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List(ListOptions),
    Get(String),
    Create(ArticleDraft),
    Delete(String),
}

#[derive(Default)]
struct MockArticleServiceState {
    mocked_list_results: VecDeque<ServiceResult<Vec<Article>>>,
    mocked_get_results: VecDeque<ServiceResult<Article>>,
    mocked_create_results: VecDeque<ServiceResult<Article>>,
    mocked_delete_results: VecDeque<ServiceResult<()>>,
    tracked_calls: Vec<MockCall>,
}

impl MockArticleServiceState {
    fn reset(&mut self) {
        self.tracked_calls.clear();
    }

    fn restore(&mut self) {
        self.mocked_list_results.clear();
        self.mocked_get_results.clear();
        self.mocked_create_results.clear();
        self.mocked_delete_results.clear();
        self.reset();
    }
}

/// An article service for tests that records calls and answers with
/// enqueued results, in order. A call with nothing enqueued fails with
/// [`ServiceError::Invariant`].
pub struct MockArticleService {
    provider: &'static str,
    state: Mutex<MockArticleServiceState>,
}

impl Default for MockArticleService {
    fn default() -> Self {
        Self {
            provider: "mock",
            state: Mutex::new(MockArticleServiceState::default()),
        }
    }
}

impl MockArticleService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the provider identifier returned by the mock.
    pub fn set_provider(&mut self, provider: &'static str) {
        self.provider = provider;
    }

    pub fn enqueue_list(&self, result: ServiceResult<Vec<Article>>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_list_results.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_get(&self, result: ServiceResult<Article>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_get_results.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_create(&self, result: ServiceResult<Article>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_create_results.push_back(result);
        drop(state);
        self
    }

    pub fn enqueue_delete(&self, result: ServiceResult<()>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_delete_results.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the calls received so far.
    pub fn tracked_calls(&self) -> Vec<MockCall> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.clone()
    }

    /// Reset tracked calls without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked calls and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }

    fn exhausted(&self, operation: &str) -> ServiceError {
        ServiceError::Invariant(format!(
            "{}: no mocked {operation} results available",
            self.provider
        ))
    }
}

#[async_trait::async_trait]
impl ArticleService for MockArticleService {
    fn provider(&self) -> &'static str {
        self.provider
    }

    async fn list(&self, options: ListOptions) -> ServiceResult<Vec<Article>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(MockCall::List(options));
        state
            .mocked_list_results
            .pop_front()
            .unwrap_or_else(|| Err(self.exhausted("list")))
    }

    async fn get(&self, article_id: &str) -> ServiceResult<Article> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(MockCall::Get(article_id.to_string()));
        state
            .mocked_get_results
            .pop_front()
            .unwrap_or_else(|| Err(self.exhausted("get")))
    }

    async fn create(&self, draft: &ArticleDraft) -> ServiceResult<Article> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(MockCall::Create(draft.clone()));
        state
            .mocked_create_results
            .pop_front()
            .unwrap_or_else(|| Err(self.exhausted("create")))
    }

    async fn delete(&self, article_id: &str) -> ServiceResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_calls.push(MockCall::Delete(article_id.to_string()));
        state
            .mocked_delete_results
            .pop_front()
            .unwrap_or_else(|| Err(self.exhausted("delete")))
    }
}
