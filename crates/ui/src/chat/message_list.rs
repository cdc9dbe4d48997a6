use chrono::{DateTime, Local, Utc};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use crate::chat::message::{Message, Role};
use crate::chat::scroll_manager::ScrollManager;

const USER_BUBBLE_MAX_WIDTH: Pixels = px(540.);
const TYPING_DOT_SIZE: Pixels = px(8.);

/// Scrolling transcript view: message bubbles in insertion order, a welcome
/// placeholder when empty, and a typing indicator while a reply is pending.
pub struct MessageList {
    messages: Vec<Message>,
    pending: bool,
    scroll_manager: ScrollManager,
}

impl MessageList {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
            scroll_manager: ScrollManager::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn set_state(&mut self, messages: Vec<Message>, pending: bool, cx: &mut Context<Self>) {
        let rows_appended = messages.len() > self.messages.len() || (pending && !self.pending);

        self.messages = messages;
        self.pending = pending;

        if rows_appended {
            self.scroll_manager.note_new_rows();
        }

        cx.notify();
    }

    fn render_welcome(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_2()
            .child(
                Label::new("Welcome to AI Chat")
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground),
            )
            .child(
                Label::new("Start a conversation by typing a message below.")
                    .text_sm()
                    .text_color(theme.muted_foreground),
            )
            .into_any_element()
    }

    fn render_message_row(&self, message: &Message, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let is_user = message.role == Role::User;
        let speaker = if is_user { "You" } else { "AI Assistant" };

        let (bubble_bg, bubble_fg) = if is_user {
            (theme.accent, theme.accent_foreground)
        } else {
            (theme.muted, theme.muted_foreground)
        };

        let bubble = v_flex()
            .max_w(USER_BUBBLE_MAX_WIDTH)
            .px_4()
            .py_3()
            .rounded_lg()
            .bg(bubble_bg)
            .gap_1()
            .child(
                Label::new(speaker)
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(bubble_fg.opacity(0.8)),
            )
            .child(
                Label::new(message.content.clone())
                    .text_sm()
                    .text_color(bubble_fg),
            )
            .child(
                Label::new(format_clock_time(&message.timestamp))
                    .text_xs()
                    .text_color(bubble_fg.opacity(0.7)),
            );

        h_flex()
            .w_full()
            .when(is_user, |row| row.justify_end())
            .when(!is_user, |row| row.justify_start())
            .child(bubble)
            .into_any_element()
    }

    fn render_typing_indicator(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        let dot = |opacity: f32| {
            div()
                .size(TYPING_DOT_SIZE)
                .rounded_full()
                .bg(theme.muted_foreground.opacity(opacity))
        };

        h_flex()
            .w_full()
            .justify_start()
            .child(
                h_flex()
                    .px_4()
                    .py_3()
                    .rounded_lg()
                    .bg(theme.muted)
                    .gap_2()
                    .items_center()
                    .child(dot(0.9))
                    .child(dot(0.6))
                    .child(dot(0.3)),
            )
            .into_any_element()
    }
}

impl Render for MessageList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.scroll_manager.sync();

        if shows_welcome(&self.messages, self.pending) {
            return v_flex()
                .size_full()
                .min_h_0()
                .child(self.render_welcome(cx))
                .into_any_element();
        }

        let rows = self
            .messages
            .iter()
            .map(|message| self.render_message_row(message, cx))
            .collect::<Vec<_>>();

        v_flex()
            .size_full()
            .min_h_0()
            .child(
                v_flex()
                    .id("message-list-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .track_scroll(self.scroll_manager.handle())
                    .px_4()
                    .py_3()
                    .gap_4()
                    .children(rows)
                    .when(self.pending, |list| {
                        list.child(self.render_typing_indicator(cx))
                    }),
            )
            .into_any_element()
    }
}

/// An empty transcript shows the welcome placeholder instead of message rows.
/// A pending first exchange already has a user row, so the placeholder never
/// competes with the typing indicator.
fn shows_welcome(messages: &[Message], pending: bool) -> bool {
    messages.is_empty() && !pending
}

fn format_clock_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    // `use super::*` pulls in gpui's `test` attribute macro via `use gpui::*`;
    // shadow it with the built-in `#[test]` so the harness picks these up.
    use core::prelude::v1::test;

    use crate::chat::message::MessageId;

    use super::*;

    #[test]
    fn empty_transcript_shows_the_welcome_placeholder() {
        assert!(shows_welcome(&[], false));
    }

    #[test]
    fn pending_or_populated_transcripts_hide_the_placeholder() {
        // Pending with no rows yet still means an exchange is underway.
        assert!(!shows_welcome(&[], true));

        let messages = vec![Message::user(MessageId::new(1), "hello")];
        assert!(!shows_welcome(&messages, false));
        assert!(!shows_welcome(&messages, true));
    }

    #[test]
    fn clock_time_renders_as_hh_mm_ss() {
        let rendered = format_clock_time(&Utc::now());

        assert_eq!(rendered.len(), 8);
        assert_eq!(&rendered[2..3], ":");
        assert_eq!(&rendered[5..6], ":");
    }
}
