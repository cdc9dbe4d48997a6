use std::sync::Arc;

use banter_api::{ApiConfig, ApiReply, ApiResult, ChatApi, create_api};
use gpui::*;
use gpui_component::{ActiveTheme, v_flex};
use gpui_tokio_bridge::Tokio;

use crate::chat::events::Submit;
use crate::chat::message::Transcript;
use crate::chat::{MessageInput, MessageList};

/// Parent coordinator for the chat page: owns the transcript, wires the input
/// to the API client, and mirrors state into the message list.
pub struct ChatView {
    message_list: Entity<MessageList>,
    message_input: Entity<MessageInput>,
    api: Arc<dyn ChatApi>,
    transcript: Transcript,
    reply_task: Option<Task<()>>,
}

impl ChatView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let message_list = cx.new(MessageList::new);
        let message_input = cx.new(|cx| MessageInput::new(window, cx));
        let api = create_api(ApiConfig::from_environment());

        tracing::info!(api = api.id(), endpoint = api.endpoint(), "chat api ready");

        cx.subscribe(&message_input, |this, _, event: &Submit, cx| {
            this.handle_submit(event.clone(), cx);
        })
        .detach();

        Self {
            message_list,
            message_input,
            api,
            transcript: Transcript::new(),
            reply_task: None,
        }
    }

    /// Page-level error string, if the last exchange failed.
    pub fn error(&self) -> Option<&str> {
        self.transcript.error()
    }

    fn handle_submit(&mut self, event: Submit, cx: &mut Context<Self>) {
        // Blank input and double-submits while pending are rejected here even
        // though the input component already guards both.
        if self.transcript.begin_exchange(&event.content).is_none() {
            return;
        }

        self.message_input.update(cx, |input, cx| {
            input.set_sending(true, cx);
        });
        self.sync_message_list(cx);

        let api = self.api.clone();
        let content = event.content.trim().to_string();

        // The request runs on the tokio runtime; the GPUI side only awaits
        // settlement and applies it back to the transcript.
        let request = Tokio::spawn(cx, async move { api.send_message(&content).await });

        self.reply_task = Some(cx.spawn(async move |this, cx| {
            let outcome = request.await;
            let _ = this.update(cx, |this, cx| {
                this.handle_settled(outcome, cx);
            });
        }));

        cx.notify();
    }

    fn handle_settled(
        &mut self,
        outcome: Result<ApiResult<ApiReply>, gpui_tokio_bridge::JoinError>,
        cx: &mut Context<Self>,
    ) {
        self.reply_task = None;

        match outcome {
            Ok(Ok(reply)) => {
                self.transcript.complete_exchange(reply.content, reply.timestamp);
            }
            Ok(Err(error)) => {
                tracing::error!("chat request failed: {error}");
                self.transcript
                    .fail_exchange(format!("Failed to send message: {error}"));
            }
            Err(error) => {
                tracing::error!("chat request worker failed: {error}");
                self.transcript
                    .fail_exchange("Failed to send message. Please try again.");
            }
        }

        self.message_input.update(cx, |input, cx| {
            input.set_sending(false, cx);
        });
        self.sync_message_list(cx);
        cx.notify();
    }

    fn sync_message_list(&mut self, cx: &mut Context<Self>) {
        let messages = self.transcript.messages().to_vec();
        let pending = self.transcript.is_pending();

        self.message_list.update(cx, |list, cx| {
            list.set_state(messages, pending, cx);
        });
    }
}

impl Render for ChatView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .id("chat-view")
            .relative()
            .size_full()
            .min_h_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(
                div()
                    .id("chat-view-message-list")
                    .flex_1()
                    .min_h_0()
                    .child(self.message_list.clone()),
            )
            .child(
                div()
                    .id("chat-view-message-input")
                    .flex_shrink_0()
                    .w_full()
                    .border_t_1()
                    .border_color(theme.border)
                    .child(self.message_input.clone()),
            )
    }
}
