use std::env;
use tauri::Manager;

use crate::{
    append_desktop_log, append_startup_log, context_menu_popup, logging, main_window, page_load,
    remote_access, runtime_paths, settings,
    spellcheck::{DictionaryFiles, SpellChecker},
    window_actions, window_events, MailShellState, START_MINIMIZED_ARG,
};

fn build_spell_checker(settings: &settings::ShellSettings) -> SpellChecker {
    let candidates = match &settings.spellcheck_dictionary {
        Some(path) => vec![DictionaryFiles::from_either(path)],
        None => runtime_paths::dictionary_candidates(&settings.spellcheck_language),
    };
    SpellChecker::load(
        &candidates,
        runtime_paths::personal_dictionary_path(),
        append_startup_log,
    )
}

pub(crate) fn run() {
    let start_minimized = env::args().any(|arg| arg == START_MINIMIZED_ARG);

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, showing main window");
            window_actions::show_main_window(app_handle, append_desktop_log);
        }))
        .plugin(logging::build_log_plugin())
        .plugin(tauri_plugin_clipboard_manager::init())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::mail_shell_show,
            crate::desktop_bridge_commands::mail_shell_toggle,
            crate::desktop_bridge_commands::mail_shell_reload,
            crate::desktop_bridge_commands::mail_shell_context_menu,
            crate::desktop_bridge_commands::mail_shell_set_unread_count,
            crate::desktop_bridge_commands::mail_shell_open_external_url,
            crate::desktop_bridge_commands::mail_shell_report_decoration,
            crate::desktop_bridge_commands::mail_shell_close_window,
        ])
        .on_window_event(window_events::handle_window_event)
        .on_page_load(page_load::handle_page_load)
        .on_menu_event(|app_handle, event| {
            context_menu_popup::handle_context_menu_event(app_handle, event.id().as_ref());
        })
        .setup(move |app| {
            append_startup_log("desktop process starting");
            if start_minimized {
                append_startup_log("start minimized requested");
            }

            let settings = settings::load_settings(append_startup_log);
            append_startup_log(&settings.describe());
            let spell_checker = build_spell_checker(&settings);
            app.manage(MailShellState::new(
                settings.clone(),
                start_minimized,
                spell_checker,
                append_startup_log,
            ));

            if let Err(error) =
                remote_access::grant_configured_hosts(app.handle(), &settings, append_startup_log)
            {
                append_startup_log(&error);
            }
            main_window::create_main_window(app.handle(), &settings)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, _event| {});
}
