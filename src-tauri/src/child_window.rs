use tauri::{
    webview::NewWindowFeatures, AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use url::Url;

use crate::{client_assets, new_window_routing, MailShellState, APP_TITLE};

/// Creates the window a deep link opens in. It shares the opener's webview context, and a
/// frameless one stays hidden until its first page has loaded.
pub fn create_child_window(
    app_handle: &AppHandle,
    state: &MailShellState,
    features: NewWindowFeatures,
) -> Result<WebviewWindow, String> {
    let settings = state.settings();
    let label = state.next_child_window_label();
    let blank = Url::parse("about:blank")
        .map_err(|error| format!("Failed to build child window URL: {error}"))?;
    let routing_handle = app_handle.clone();

    WebviewWindowBuilder::new(app_handle, &label, WebviewUrl::External(blank))
        .window_features(features)
        .title(APP_TITLE)
        .decorations(settings.show_window_frame)
        .visible(settings.show_window_frame)
        .initialization_script(client_assets::CONTEXT_MENU_JS)
        .on_new_window(move |url, features| {
            new_window_routing::handle_new_window_request(&routing_handle, url, features)
        })
        .build()
        .map_err(|error| format!("Failed to create child window {label}: {error}"))
}

pub fn show_child_window<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    if let Ok(true) = window.is_visible() {
        return;
    }
    if let Err(error) = window.show() {
        log(&format!(
            "failed to show child window {}: {error}",
            window.label()
        ));
    }
}
