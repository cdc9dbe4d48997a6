use chrono::{DateTime, Utc};

/// Author role the backend contract promises on a reply.
///
/// Only `Assistant` exists today; the variant is kept as an enum so the wire
/// contract stays explicit at the crate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyRole {
    Assistant,
}

/// One reply object as returned by the chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub id: u64,
    pub content: String,
    pub role: ReplyRole,
    pub timestamp: DateTime<Utc>,
}

impl ApiReply {
    /// Creates an assistant reply stamped with the current time.
    pub fn assistant(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            role: ReplyRole::Assistant,
            timestamp: Utc::now(),
        }
    }
}
