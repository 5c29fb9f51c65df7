use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem},
    AppHandle, Manager, WebviewWindow, Wry,
};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::{
    append_desktop_log, client_assets,
    context_menu::{self, ContextMenuEntry, ContextMenuParams, EditRole},
    context_menu_actions::{self, ContextMenuAction},
    MailShellState, PendingContextMenu,
};

fn label_item(
    app_handle: &AppHandle,
    position: usize,
    text: &str,
) -> tauri::Result<MenuItem<Wry>> {
    MenuItem::with_id(
        app_handle,
        format!("ctx_label_{position}"),
        text,
        false,
        None::<&str>,
    )
}

fn action_item(app_handle: &AppHandle, id: String, text: &str) -> tauri::Result<MenuItem<Wry>> {
    MenuItem::with_id(app_handle, id, text, true, None::<&str>)
}

fn append_entry(
    menu: &Menu<Wry>,
    app_handle: &AppHandle,
    position: usize,
    entry: &ContextMenuEntry,
) -> tauri::Result<()> {
    let item: Box<dyn IsMenuItem<Wry>> = match entry {
        ContextMenuEntry::Separator => Box::new(PredefinedMenuItem::separator(app_handle)?),
        ContextMenuEntry::Header(text) => Box::new(label_item(app_handle, position, text)?),
        ContextMenuEntry::NoSuggestions => {
            Box::new(label_item(app_handle, position, "No Suggestions")?)
        }
        ContextMenuEntry::LinkPreview(text) => Box::new(label_item(app_handle, position, text)?),
        ContextMenuEntry::Edit(EditRole::Cut) => {
            Box::new(PredefinedMenuItem::cut(app_handle, Some(EditRole::Cut.label()))?)
        }
        ContextMenuEntry::Edit(EditRole::Copy) => {
            Box::new(PredefinedMenuItem::copy(app_handle, Some(EditRole::Copy.label()))?)
        }
        ContextMenuEntry::Edit(EditRole::Paste) => {
            Box::new(PredefinedMenuItem::paste(app_handle, Some(EditRole::Paste.label()))?)
        }
        ContextMenuEntry::Edit(EditRole::SelectAll) => Box::new(PredefinedMenuItem::select_all(
            app_handle,
            Some(EditRole::SelectAll.label()),
        )?),
        other => {
            let Some(id) = context_menu_actions::menu_id_for_entry(other) else {
                return Ok(());
            };
            let text = match other {
                ContextMenuEntry::AddToDictionary(_) => "Add to dictionary",
                ContextMenuEntry::Suggestion { word, .. } => word.as_str(),
                ContextMenuEntry::CopyLinkUrl => "Copy link url",
                ContextMenuEntry::CopyLinkText => "Copy link text",
                ContextMenuEntry::Edit(role) => role.label(),
                _ => return Ok(()),
            };
            Box::new(action_item(app_handle, id, text)?)
        }
    };

    menu.append(item.as_ref())
}

/// Builds and pops up the menu for a right-click reported by `window`'s page.
pub fn show_context_menu(
    app_handle: &AppHandle,
    window: &WebviewWindow,
    params: ContextMenuParams,
) -> Result<(), String> {
    let state = app_handle.state::<MailShellState>();

    let spelling = if params.is_editable {
        params
            .word_under_cursor
            .as_deref()
            .and_then(|word| state.with_spell_checker(|checker| checker.check(word)))
            .flatten()
    } else {
        None
    };

    let entries = context_menu::build_context_menu(&params, spelling.as_ref());
    if entries.is_empty() {
        return Ok(());
    }

    let menu = Menu::new(app_handle)
        .map_err(|error| format!("Failed to create context menu: {error}"))?;
    for (position, entry) in entries.iter().enumerate() {
        append_entry(&menu, app_handle, position, entry)
            .map_err(|error| format!("Failed to add context menu item: {error}"))?;
    }

    state.set_pending_context_menu(PendingContextMenu {
        window_label: window.label().to_string(),
        params,
        entries,
    });
    window
        .popup_menu(&menu)
        .map_err(|error| format!("Failed to show context menu: {error}"))
}

fn run_in_page(window: &WebviewWindow, script: &str, what: &str) {
    if let Err(error) = window.eval(script) {
        append_desktop_log(&format!("failed to {what} in {}: {error}", window.label()));
    }
}

fn copy_to_clipboard(app_handle: &AppHandle, text: Option<String>, what: &str) {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        append_desktop_log(&format!("nothing to copy for {what}"));
        return;
    };
    if let Err(error) = app_handle.clipboard().write_text(text) {
        append_desktop_log(&format!("failed to copy {what} to clipboard: {error}"));
    }
}

pub fn handle_context_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = context_menu_actions::action_from_menu_id(menu_id) else {
        return;
    };
    let state = app_handle.state::<MailShellState>();
    let Some(pending) = state.take_pending_context_menu() else {
        append_desktop_log(&format!("context menu action {menu_id} has no pending menu"));
        return;
    };
    let Some(window) = app_handle.get_webview_window(&pending.window_label) else {
        append_desktop_log(&format!(
            "context menu action {menu_id} skipped: window {} is gone",
            pending.window_label
        ));
        return;
    };

    match action {
        ContextMenuAction::AddToDictionary => {
            let word = pending.entries.iter().find_map(|entry| match entry {
                ContextMenuEntry::AddToDictionary(word) => Some(word.clone()),
                _ => None,
            });
            if let Some(word) = word {
                match state.with_spell_checker(|checker| checker.add_word(&word)) {
                    Some(Ok(())) => append_desktop_log(&format!("added '{word}' to dictionary")),
                    Some(Err(error)) => append_desktop_log(&format!(
                        "failed to add '{word}' to dictionary: {error}"
                    )),
                    None => append_desktop_log("spell checker is unavailable"),
                }
            }
        }
        ContextMenuAction::ReplaceMisspelling(index) => {
            let suggestion = pending.entries.iter().find_map(|entry| match entry {
                ContextMenuEntry::Suggestion { index: i, word } if *i == index => Some(word),
                _ => None,
            });
            if let Some(suggestion) = suggestion {
                run_in_page(
                    &window,
                    &client_assets::replace_misspelling_script(suggestion),
                    "replace misspelling",
                );
            }
        }
        ContextMenuAction::CopyLinkUrl => {
            copy_to_clipboard(app_handle, pending.params.link_url, "link url");
        }
        ContextMenuAction::CopyLinkText => {
            copy_to_clipboard(app_handle, pending.params.link_text, "link text");
        }
        ContextMenuAction::EditCommand(command) => {
            run_in_page(
                &window,
                &client_assets::edit_command_script(command),
                &format!("run '{command}'"),
            );
        }
    }
}
