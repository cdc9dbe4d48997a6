use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use crate::chat::ChatView;

gpui::actions!(shell, [Quit]);

/// Main application shell: a static header bar above the chat page.
///
/// The header carries the page title and, when the last request failed, the
/// single page-level error string.
pub struct ChatAppShell {
    chat_view: Entity<ChatView>,
}

impl ChatAppShell {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let chat_view = cx.new(|cx| ChatView::new(window, cx));

        // The header renders the chat view's error string, so the shell must
        // re-render whenever the view settles an exchange.
        cx.observe(&chat_view, |_, _, cx| cx.notify()).detach();

        Self { chat_view }
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let error = self
            .chat_view
            .read(cx)
            .error()
            .map(|message| message.to_string());

        v_flex()
            .id("app-header")
            .w_full()
            .flex_shrink_0()
            .px_4()
            .py_3()
            .gap_1()
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .child(
                h_flex().w_full().items_center().child(
                    Label::new("AI Chat Interface")
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .text_color(theme.foreground),
                ),
            )
            .when_some(error, |header, message| {
                header.child(
                    div()
                        .id("app-header-error")
                        .w_full()
                        .px_3()
                        .py_2()
                        .rounded_md()
                        .bg(theme.danger.opacity(0.1))
                        .border_1()
                        .border_color(theme.danger)
                        .child(Label::new(message).text_sm().text_color(theme.danger)),
                )
            })
    }
}

impl Render for ChatAppShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .bg(theme.background)
            .child(self.render_header(cx))
            .child(
                v_flex()
                    .id("main-content")
                    .flex_1()
                    .w_full()
                    .min_h_0()
                    .overflow_hidden()
                    .child(self.chat_view.clone()),
            )
    }
}
