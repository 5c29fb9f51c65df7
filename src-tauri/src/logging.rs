use log::LevelFilter;
use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{Target, TargetKind};

use crate::DESKTOP_LOG_FILE;

const DESKTOP_TARGET: &str = "mail_shell::desktop";
const STARTUP_TARGET: &str = "mail_shell::startup";
const ROUTING_TARGET: &str = "mail_shell::routing";

pub(crate) fn build_log_plugin<R: Runtime>() -> TauriPlugin<R> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .clear_targets()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir {
                file_name: Some(DESKTOP_LOG_FILE.to_string()),
            }),
        ])
        .level(level)
        .build()
}

pub fn append_desktop_log(message: &str) {
    log::info!(target: DESKTOP_TARGET, "{message}");
}

pub fn append_startup_log(message: &str) {
    log::info!(target: STARTUP_TARGET, "{message}");
}

pub fn append_routing_log(message: &str) {
    log::debug!(target: ROUTING_TARGET, "{message}");
}
