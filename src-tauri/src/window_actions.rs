use tauri::{AppHandle, Manager};

use crate::{main_window, settings, MailShellState, MAIN_WINDOW_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    HideInstead,
    Proceed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimizeDecision {
    HideInstead,
    StayMinimized,
}

/// A hidden window always closes; a visible one hides when hide-on-close is on.
pub fn decide_close(window_visible: bool, hide_on_close: bool) -> CloseDecision {
    if window_visible && hide_on_close {
        CloseDecision::HideInstead
    } else {
        CloseDecision::Proceed
    }
}

pub fn decide_minimize(hide_on_minimize: bool) -> MinimizeDecision {
    if hide_on_minimize {
        MinimizeDecision::HideInstead
    } else {
        MinimizeDecision::StayMinimized
    }
}

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::show_main_window(app_handle, &log);
}

pub fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::hide_main_window(app_handle, &log);
}

pub fn toggle_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("toggle_main_window skipped: main window not found");
        return;
    };

    match window.is_visible() {
        Ok(true) => hide_main_window(app_handle, log),
        Ok(false) => show_main_window(app_handle, log),
        Err(error) => log(&format!(
            "failed to read main window visibility in toggle_main_window: {error}"
        )),
    }
}

/// Re-reads settings so routing edits apply, then reloads the page.
pub fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if let Some(state) = app_handle.try_state::<MailShellState>() {
        state.clear_start_minimized();
        let reloaded = settings::load_settings(&log);
        log(&reloaded.describe());
        state.replace_settings(reloaded, &log);
    }
    main_window::reload_main_window(app_handle, log);
}
