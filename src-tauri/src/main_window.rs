use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    client_assets, new_window_routing, settings::ShellSettings, MailShellState, APP_TITLE,
    MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_WIDTH, MAIN_WINDOW_X, MAIN_WINDOW_Y,
};

pub fn create_main_window(
    app_handle: &AppHandle,
    settings: &ShellSettings,
) -> Result<WebviewWindow, String> {
    let url = Url::parse(&settings.main_window_url).map_err(|error| {
        format!(
            "Invalid main window URL {}: {error}",
            settings.main_window_url
        )
    })?;
    let routing_handle = app_handle.clone();

    WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, WebviewUrl::External(url))
        .title(APP_TITLE)
        .position(MAIN_WINDOW_X, MAIN_WINDOW_Y)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .decorations(settings.show_window_frame)
        .visible(false)
        .initialization_script(client_assets::CONTEXT_MENU_JS)
        .on_new_window(move |url, features| {
            new_window_routing::handle_new_window_request(&routing_handle, url, features)
        })
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))
}

pub fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if let Some(state) = app_handle.try_state::<MailShellState>() {
        state.clear_start_minimized();
    }

    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Ok(true) = window.is_minimized() {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to unminimize main window: {error}"));
        }
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("hide_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        log(&format!("failed to hide main window: {error}"));
    }
}

pub fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("reload_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.eval("window.location.reload()") {
        log(&format!("failed to reload main window: {error}"));
    }
}

pub fn navigate_main_window<F>(app_handle: &AppHandle, url: Url, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("navigate_main_window skipped: main window not found");
        return;
    };

    log(&format!("loading in main window: {url}"));
    if let Err(error) = window.navigate(url) {
        log(&format!("failed to navigate main window: {error}"));
    }
}
