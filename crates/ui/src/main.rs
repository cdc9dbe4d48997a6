use gpui::*;
use gpui_component::Root;

use banter::app::{ChatAppShell, Quit};

/// Application entry point.
///
/// Bootstraps the GPUI application: assets, gpui-component initialization,
/// the tokio bridge for the API client, and a single centered chat window.
fn main() {
    tracing_subscriber::fmt::init();

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx| {
        gpui_tokio_bridge::init(cx);

        // Required before any Root usage: sets up themes and the component registry.
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx| {
            cx.quit();
        });

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(900.), px(700.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("AI Chat Interface".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let shell = cx.new(|cx| ChatAppShell::new(window, cx));

            // Root is required by gpui-component for overlay layers.
            cx.new(|cx| Root::new(shell, window, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
