use tauri::{
    webview::{NewWindowFeatures, NewWindowResponse},
    AppHandle, Manager, Wry,
};
use url::Url;

use crate::{
    append_desktop_log, append_routing_log, child_window, link_routing::LinkAction, main_window,
    os_handler, ui_dispatch, MailShellState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NewWindowEffect {
    /// Answer the webview with a child window built from the opener's features.
    BuildChildWindow,
    NavigatePrimaryWindow,
    ShowPrimaryWindow,
    OpenWithOsHandler,
}

/// Effects of a routed request, in the order they run. Anything but a child window
/// denies the webview's own window.
pub(crate) fn new_window_effects(action: LinkAction) -> &'static [NewWindowEffect] {
    match action {
        LinkAction::OpenDeepLinkWindow => &[NewWindowEffect::BuildChildWindow],
        LinkAction::LoadInPrimaryWindow => &[
            NewWindowEffect::NavigatePrimaryWindow,
            NewWindowEffect::ShowPrimaryWindow,
        ],
        LinkAction::OpenWithDefaultHandler => &[NewWindowEffect::OpenWithOsHandler],
    }
}

fn dispatch_to_main_window<F>(app_handle: &AppHandle, action: &str, task: F)
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    if let Err(error) = ui_dispatch::run_on_main_thread_dispatch(app_handle, action, task) {
        append_desktop_log(&error);
    }
}

pub fn handle_new_window_request(
    app_handle: &AppHandle,
    url: Url,
    features: NewWindowFeatures,
) -> NewWindowResponse<Wry> {
    let Some(state) = app_handle.try_state::<MailShellState>() else {
        append_desktop_log("new window request ignored: shell state is not ready");
        return NewWindowResponse::Deny;
    };

    let action = state.route(url.as_str());
    append_routing_log(&format!("new window requested: {url} -> {action:?}"));

    let mut features = Some(features);
    let mut response = NewWindowResponse::Deny;
    for effect in new_window_effects(action) {
        match effect {
            NewWindowEffect::BuildChildWindow => {
                let Some(features) = features.take() else {
                    continue;
                };
                response = match child_window::create_child_window(app_handle, &state, features)
                {
                    Ok(window) => NewWindowResponse::Create { window },
                    Err(error) => {
                        append_desktop_log(&format!(
                            "{error}; letting the webview open the deep link itself"
                        ));
                        NewWindowResponse::Allow
                    }
                };
            }
            NewWindowEffect::NavigatePrimaryWindow => {
                let url = url.clone();
                dispatch_to_main_window(app_handle, "load link in main window", move |main_app| {
                    main_window::navigate_main_window(main_app, url, append_desktop_log);
                });
            }
            NewWindowEffect::ShowPrimaryWindow => {
                dispatch_to_main_window(app_handle, "show main window for link", |main_app| {
                    main_window::show_main_window(main_app, append_desktop_log);
                });
            }
            NewWindowEffect::OpenWithOsHandler => {
                if let Err(error) =
                    os_handler::open_with_os_handler(url.as_str(), append_desktop_log)
                {
                    append_desktop_log(&format!("failed to hand off {url}: {error}"));
                }
            }
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_window_links_are_loaded_then_shown() {
        assert_eq!(
            new_window_effects(LinkAction::LoadInPrimaryWindow),
            &[
                NewWindowEffect::NavigatePrimaryWindow,
                NewWindowEffect::ShowPrimaryWindow
            ]
        );
    }

    #[test]
    fn deep_links_only_build_a_child_window() {
        assert_eq!(
            new_window_effects(LinkAction::OpenDeepLinkWindow),
            &[NewWindowEffect::BuildChildWindow]
        );
    }

    #[test]
    fn other_links_leave_the_primary_window_alone() {
        let effects = new_window_effects(LinkAction::OpenWithDefaultHandler);
        assert_eq!(effects, &[NewWindowEffect::OpenWithOsHandler]);
        assert!(!effects.contains(&NewWindowEffect::ShowPrimaryWindow));
    }
}
