use std::sync::atomic::{AtomicU64, Ordering};

use snafu::ensure;

use crate::client::{ApiConfig, ApiResult, BoxFuture, ChatApi, EmptyMessageSnafu};
use crate::reply::ApiReply;

pub const MOCK_API_ID: &str = "mock";

/// Placeholder chat client.
///
/// Simulates network latency with a tokio sleep and returns synthetic text
/// quoting the request. No I/O happens; the configured endpoint is carried
/// only for the real client that replaces this one.
pub struct MockApi {
    config: ApiConfig,
    next_reply_id: AtomicU64,
}

impl MockApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            next_reply_id: AtomicU64::new(1),
        }
    }

    fn reply_text(content: &str) -> String {
        format!(
            "This is a mock AI response to: \"{content}\". \
             Replace the MockApi client in banter-api with your actual API integration."
        )
    }
}

impl ChatApi for MockApi {
    fn id(&self) -> &str {
        MOCK_API_ID
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn send_message<'a>(&'a self, content: &'a str) -> BoxFuture<'a, ApiResult<ApiReply>> {
        Box::pin(async move {
            let content = content.trim();
            ensure!(!content.is_empty(), EmptyMessageSnafu { stage: "mock-send" });

            tokio::time::sleep(self.config.reply_delay).await;

            let reply_id = self.next_reply_id.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(reply_id, "mock api produced reply");
            Ok(ApiReply::assistant(reply_id, Self::reply_text(content)))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::client::{ApiError, DEFAULT_REPLY_DELAY};
    use crate::reply::ReplyRole;

    use super::*;

    fn fast_mock() -> MockApi {
        MockApi::new(ApiConfig::new("/api/chat", Duration::ZERO))
    }

    #[tokio::test]
    async fn reply_quotes_the_request_with_assistant_role() {
        let api = fast_mock();
        let reply = api.send_message("hello there").await.unwrap();

        assert_eq!(reply.role, ReplyRole::Assistant);
        assert!(reply.content.contains("\"hello there\""));
    }

    #[tokio::test]
    async fn reply_ids_are_monotonic() {
        let api = fast_mock();
        let first = api.send_message("one").await.unwrap();
        let second = api.send_message("two").await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn blank_content_is_rejected_without_sleeping() {
        let api = MockApi::new(ApiConfig::default());
        let started = Instant::now();
        let error = api.send_message("   \n\t").await.unwrap_err();

        assert!(matches!(error, ApiError::EmptyMessage { .. }));
        // Rejection happens before the artificial latency.
        assert!(started.elapsed() < DEFAULT_REPLY_DELAY);
    }

    #[tokio::test]
    async fn configured_delay_elapses_before_the_reply() {
        let delay = Duration::from_millis(25);
        let api = MockApi::new(ApiConfig::new("/api/chat", delay));

        let started = Instant::now();
        api.send_message("ping").await.unwrap();

        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_trimmed_from_the_echo() {
        let api = fast_mock();
        let reply = api.send_message("  padded  ").await.unwrap();

        assert!(reply.content.contains("\"padded\""));
    }
}
