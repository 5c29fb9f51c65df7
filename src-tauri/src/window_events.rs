use tauri::{Manager, Window, WindowEvent};

use crate::{
    append_desktop_log, settings,
    window_actions::{self, CloseDecision, MinimizeDecision},
    MAIN_WINDOW_LABEL,
};

pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    match event {
        WindowEvent::CloseRequested { api, .. } => {
            let visible = window.is_visible().unwrap_or(false);
            let hide_on_close = settings::load_settings(append_desktop_log).hide_on_close;
            match window_actions::decide_close(visible, hide_on_close) {
                CloseDecision::HideInstead => {
                    api.prevent_close();
                    window_actions::hide_main_window(window.app_handle(), append_desktop_log);
                }
                CloseDecision::Proceed => {
                    append_desktop_log("main window close proceeding");
                }
            }
        }
        WindowEvent::Focused(false) => {
            if let Ok(true) = window.is_minimized() {
                let hide_on_minimize = settings::load_settings(append_desktop_log).hide_on_minimize;
                if window_actions::decide_minimize(hide_on_minimize) == MinimizeDecision::HideInstead
                {
                    window_actions::hide_main_window(window.app_handle(), append_desktop_log);
                }
            }
        }
        WindowEvent::Destroyed => {
            append_desktop_log("main window destroyed, exiting desktop process");
            window.app_handle().exit(0);
        }
        _ => {}
    }
}
