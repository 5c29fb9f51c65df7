#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod child_window;
mod client_assets;
mod context_menu;
mod context_menu_actions;
mod context_menu_popup;
mod desktop_bridge_commands;
mod link_routing;
mod logging;
mod main_window;
mod new_window_routing;
mod os_handler;
mod page_load;
mod remote_access;
mod runtime_paths;
mod settings;
mod spellcheck;
mod ui_dispatch;
mod unread_count;
mod window_actions;
mod window_events;

pub(crate) use app_constants::*;
pub(crate) use app_types::{DecorationOutcome, MailShellState, PendingContextMenu, ShellBridgeResult};
pub(crate) use logging::{append_desktop_log, append_routing_log, append_startup_log};

fn main() {
    app_runtime::run();
}
