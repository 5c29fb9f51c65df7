use tauri::{AppHandle, WebviewWindow};

use crate::{
    append_desktop_log, child_window, context_menu::ContextMenuParams, context_menu_popup,
    os_handler, unread_count, window_actions, DecorationOutcome, ShellBridgeResult,
};

#[tauri::command]
pub(crate) fn mail_shell_show(app_handle: AppHandle) {
    window_actions::show_main_window(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn mail_shell_toggle(app_handle: AppHandle) {
    window_actions::toggle_main_window(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn mail_shell_reload(app_handle: AppHandle) {
    window_actions::reload_main_window(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn mail_shell_context_menu(
    app_handle: AppHandle,
    webview_window: WebviewWindow,
    params: ContextMenuParams,
) -> ShellBridgeResult {
    let result = context_menu_popup::show_context_menu(&app_handle, &webview_window, params);
    if let Err(error) = &result {
        append_desktop_log(error);
    }
    result.into()
}

#[tauri::command]
pub(crate) fn mail_shell_set_unread_count(app_handle: AppHandle, count: u32) {
    unread_count::apply_unread_count(&app_handle, count, append_desktop_log);
}

#[tauri::command]
pub(crate) fn mail_shell_open_external_url(url: String) -> ShellBridgeResult {
    os_handler::open_with_os_handler(&url, append_desktop_log).into()
}

#[tauri::command]
pub(crate) fn mail_shell_report_decoration(
    webview_window: WebviewWindow,
    outcome: DecorationOutcome,
) {
    if !outcome.ok {
        append_desktop_log(&format!(
            "error injecting {} into {}: {}",
            outcome.stage.as_deref().unwrap_or("decoration"),
            webview_window.label(),
            outcome.message.as_deref().unwrap_or("unknown error")
        ));
    }
    child_window::show_child_window(&webview_window, append_desktop_log);
}

#[tauri::command]
pub(crate) fn mail_shell_close_window(webview_window: WebviewWindow) {
    if let Err(error) = webview_window.close() {
        append_desktop_log(&format!(
            "failed to close window {}: {error}",
            webview_window.label()
        ));
    }
}
