//! Chat API boundary for the banter app.
//!
//! The only shipped implementation is [`MockApi`], a placeholder client that
//! sleeps for a configured delay and returns canned text. The [`ChatApi`]
//! trait is the seam where a real HTTP client would slot in later.

use std::sync::Arc;

mod client;
mod mock;
mod reply;

pub use client::{
    ApiConfig, ApiError, ApiResult, BoxFuture, ChatApi, DEFAULT_ENDPOINT, DEFAULT_REPLY_DELAY,
};
pub use mock::{MOCK_API_ID, MockApi};
pub use reply::{ApiReply, ReplyRole};

/// Builds the chat client for the given config.
///
/// Always returns the mock client for now; kept as a factory so the UI never
/// names a concrete client type.
pub fn create_api(config: ApiConfig) -> Arc<dyn ChatApi> {
    Arc::new(MockApi::new(config))
}
