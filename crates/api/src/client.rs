use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use snafu::Snafu;

use crate::reply::ApiReply;

/// Endpoint a real client would dial. The mock never opens a connection.
pub const DEFAULT_ENDPOINT: &str = "/api/chat";

/// Artificial latency the mock sleeps before answering.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Client configuration shared by mock and future real implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub reply_delay: Duration,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>, reply_delay: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim().to_string(),
            reply_delay,
        }
    }

    /// Reads config from the environment, falling back to defaults.
    ///
    /// `BANTER_API_ENDPOINT` overrides the endpoint placeholder and
    /// `BANTER_REPLY_DELAY_MS` the mock latency.
    pub fn from_environment() -> Self {
        let endpoint = std::env::var("BANTER_API_ENDPOINT")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let reply_delay = std::env::var("BANTER_REPLY_DELAY_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY);

        Self { endpoint, reply_delay }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_REPLY_DELAY)
    }
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("message content is empty"))]
    EmptyMessage { stage: &'static str },
    #[snafu(display("chat request failed on `{stage}`: {message}"))]
    RequestFailed {
        stage: &'static str,
        message: String,
    },
}

/// Boundary for sending one message and receiving one reply.
pub trait ChatApi: Send + Sync {
    fn id(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn send_message<'a>(&'a self, content: &'a str) -> BoxFuture<'a, ApiResult<ApiReply>>;
}
