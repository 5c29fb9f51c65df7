use tauri::{AppHandle, Manager};

use crate::{MailShellState, APP_TITLE, MAIN_WINDOW_LABEL};

pub fn window_title_for_unread(count: u32) -> String {
    if count == 0 {
        APP_TITLE.to_string()
    } else {
        format!("{APP_TITLE} ({count})")
    }
}

pub fn apply_unread_count<F>(app_handle: &AppHandle, count: u32, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<MailShellState>();
    if !state.update_unread_count(count) {
        return;
    }

    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };
    if let Err(error) = window.set_title(&window_title_for_unread(count)) {
        log(&format!("failed to update main window title: {error}"));
    }
}
