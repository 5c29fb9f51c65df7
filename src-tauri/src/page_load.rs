use tauri::{
    webview::{PageLoadEvent, PageLoadPayload},
    Manager, Webview,
};

use crate::{
    append_desktop_log, child_window, client_assets, main_window, MailShellState,
    CHILD_WINDOW_LABEL_PREFIX, MAIN_WINDOW_LABEL,
};

fn eval_logged(webview: &Webview, script: &str, what: &str) {
    if let Err(error) = webview.eval(script) {
        append_desktop_log(&format!(
            "failed to inject {what} into {}: {error}",
            webview.label()
        ));
    }
}

fn decorate_main_window(webview: &Webview, state: &MailShellState) {
    let frameless = !state.settings().show_window_frame;
    eval_logged(
        webview,
        &client_assets::main_window_decoration_script(frameless),
        "main window styles",
    );
    eval_logged(
        webview,
        client_assets::UNREAD_OBSERVER_JS,
        "unread count observer",
    );

    if state.is_start_minimized() {
        append_desktop_log("started minimized; main window stays hidden");
        return;
    }
    main_window::show_main_window(webview.app_handle(), append_desktop_log);
}

/// Shows the window once the decoration script is issued, whether or not it went in.
fn decorate_child_window(webview: &Webview, state: &MailShellState) {
    let frameless = !state.settings().show_window_frame;
    eval_logged(
        webview,
        &client_assets::child_window_decoration_script(frameless),
        "child window decoration",
    );
    match webview.app_handle().get_webview_window(webview.label()) {
        Some(window) => child_window::show_child_window(&window, append_desktop_log),
        None => append_desktop_log(&format!(
            "child window {} is gone before it could be shown",
            webview.label()
        )),
    }
}

pub fn handle_page_load(webview: &Webview, payload: &PageLoadPayload<'_>) {
    match payload.event() {
        PageLoadEvent::Started => {
            append_desktop_log(&format!(
                "page-load started in {}: {}",
                webview.label(),
                payload.url()
            ));
        }
        PageLoadEvent::Finished => {
            append_desktop_log(&format!(
                "page-load finished in {}: {}",
                webview.label(),
                payload.url()
            ));
            if payload.url().scheme() == "about" {
                return;
            }

            let Some(state) = webview.app_handle().try_state::<MailShellState>() else {
                return;
            };
            let label = webview.label();
            if label == MAIN_WINDOW_LABEL {
                decorate_main_window(webview, &state);
            } else if label.starts_with(CHILD_WINDOW_LABEL_PREFIX) {
                decorate_child_window(webview, &state);
            }
        }
    }
}
