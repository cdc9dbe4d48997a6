use chrono::{DateTime, Utc};

/// Stable identifier for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Chat speaker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message with an explicit timestamp.
    pub fn new(
        id: MessageId,
        role: Role,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Creates a user message stamped with the current time.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Role::User, content, Utc::now())
    }
}

/// Page state for the single chat transcript.
///
/// Messages are append-only and insertion-ordered for the lifetime of the
/// window. At most one request is outstanding at a time, tracked by the
/// `pending` flag; any failure collapses into one visible error string.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    pending: bool,
    error: Option<String>,
    next_message_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
            error: None,
            next_message_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts one request/response exchange.
    ///
    /// Appends exactly one user message and raises the pending flag. Returns
    /// `None` without mutating anything for blank input or while another
    /// exchange is still pending.
    pub fn begin_exchange(&mut self, content: &str) -> Option<MessageId> {
        let content = content.trim();
        if content.is_empty() || self.pending {
            return None;
        }

        self.error = None;
        let id = self.alloc_message_id();
        self.messages.push(Message::user(id, content));
        self.pending = true;
        Some(id)
    }

    /// Settles the pending exchange with the assistant reply.
    ///
    /// Appends exactly one assistant message. A completion with no pending
    /// exchange is stale and ignored.
    pub fn complete_exchange(
        &mut self,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Option<MessageId> {
        if !self.pending {
            return None;
        }

        self.pending = false;
        let id = self.alloc_message_id();
        self.messages
            .push(Message::new(id, Role::Assistant, content, timestamp));
        Some(id)
    }

    /// Settles the pending exchange with a failure.
    ///
    /// No message is appended; the error string is the only visible trace.
    pub fn fail_exchange(&mut self, message: impl Into<String>) {
        if !self.pending {
            return;
        }

        self.pending = false;
        self.error = Some(message.into());
    }

    fn alloc_message_id(&mut self) -> MessageId {
        let id = MessageId::new(self.next_message_id);
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_appends_one_user_then_one_assistant_message() {
        let mut transcript = Transcript::new();

        transcript.begin_exchange("hello").expect("accepted");
        assert_eq!(transcript.messages().len(), 1);
        assert!(transcript.is_pending());

        transcript
            .complete_exchange("hi back", Utc::now())
            .expect("completed");

        let roles = transcript
            .messages()
            .iter()
            .map(|message| message.role)
            .collect::<Vec<_>>();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn blank_input_appends_nothing() {
        let mut transcript = Transcript::new();

        assert!(transcript.begin_exchange("").is_none());
        assert!(transcript.begin_exchange("   \n\t").is_none());
        assert!(transcript.messages().is_empty());
        assert!(!transcript.is_pending());
    }

    #[test]
    fn second_submit_is_rejected_while_pending() {
        let mut transcript = Transcript::new();

        transcript.begin_exchange("first").expect("accepted");
        assert!(transcript.begin_exchange("second").is_none());
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn insertion_order_and_ids_are_preserved() {
        let mut transcript = Transcript::new();

        for turn in 0..5 {
            transcript
                .begin_exchange(&format!("question {turn}"))
                .expect("accepted");
            transcript
                .complete_exchange(format!("answer {turn}"), Utc::now())
                .expect("completed");
        }

        let ids = transcript
            .messages()
            .iter()
            .map(|message| message.id)
            .collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn failure_sets_the_error_string_without_a_message() {
        let mut transcript = Transcript::new();

        transcript.begin_exchange("hello").expect("accepted");
        transcript.fail_exchange("Failed to send message. Please try again.");

        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.is_pending());
        assert_eq!(
            transcript.error(),
            Some("Failed to send message. Please try again.")
        );
    }

    #[test]
    fn request_failure_maps_to_the_page_error_string() {
        let mut transcript = Transcript::new();
        transcript.begin_exchange("hello").expect("accepted");

        // Same mapping the view applies when a request settles with an error.
        let error = banter_api::ApiError::RequestFailed {
            stage: "send",
            message: "connection reset".to_string(),
        };
        transcript.fail_exchange(format!("Failed to send message: {error}"));

        assert_eq!(
            transcript.error(),
            Some("Failed to send message: chat request failed on `send`: connection reset")
        );
        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn next_submit_clears_a_previous_error() {
        let mut transcript = Transcript::new();

        transcript.begin_exchange("hello").expect("accepted");
        transcript.fail_exchange("boom");
        transcript.begin_exchange("retry").expect("accepted");

        assert!(transcript.error().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut transcript = Transcript::new();

        assert!(transcript.complete_exchange("orphan", Utc::now()).is_none());
        transcript.fail_exchange("orphan failure");

        assert!(transcript.messages().is_empty());
        assert!(transcript.error().is_none());
    }

    #[test]
    fn submitted_content_is_trimmed() {
        let mut transcript = Transcript::new();

        transcript.begin_exchange("  hello  ").expect("accepted");
        assert_eq!(transcript.messages()[0].content, "hello");
    }
}
