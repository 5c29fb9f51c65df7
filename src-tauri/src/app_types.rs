use serde::Deserialize;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Mutex,
};

use crate::{
    context_menu::{ContextMenuEntry, ContextMenuParams},
    link_routing::{LinkAction, LinkRouter},
    settings::ShellSettings,
    spellcheck::SpellChecker,
    CHILD_WINDOW_LABEL_PREFIX,
};

/// The right-click menu currently on screen, kept until one of its items fires.
#[derive(Debug, Clone)]
pub(crate) struct PendingContextMenu {
    pub(crate) window_label: String,
    pub(crate) params: ContextMenuParams,
    pub(crate) entries: Vec<ContextMenuEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DecorationOutcome {
    pub(crate) ok: bool,
    pub(crate) stage: Option<String>,
    pub(crate) message: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl ShellBridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<Result<(), String>> for ShellBridgeResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(reason) => Self::failed(reason),
        }
    }
}

#[derive(Debug)]
struct LoadedSettings {
    settings: ShellSettings,
    router: LinkRouter,
}

impl LoadedSettings {
    fn new<F>(settings: ShellSettings, log: F) -> Self
    where
        F: Fn(&str),
    {
        let router = LinkRouter::new(&settings.internal_urls, &settings.external_urls, log);
        Self { settings, router }
    }
}

#[derive(Debug)]
pub(crate) struct MailShellState {
    loaded: Mutex<LoadedSettings>,
    start_minimized: AtomicBool,
    next_child_id: AtomicU64,
    pending_context_menu: Mutex<Option<PendingContextMenu>>,
    spell_checker: Mutex<SpellChecker>,
    unread_count: Mutex<Option<u32>>,
}

impl MailShellState {
    pub(crate) fn new<F>(
        settings: ShellSettings,
        start_minimized: bool,
        spell_checker: SpellChecker,
        log: F,
    ) -> Self
    where
        F: Fn(&str),
    {
        Self {
            loaded: Mutex::new(LoadedSettings::new(settings, log)),
            start_minimized: AtomicBool::new(start_minimized),
            next_child_id: AtomicU64::new(1),
            pending_context_menu: Mutex::new(None),
            spell_checker: Mutex::new(spell_checker),
            unread_count: Mutex::new(None),
        }
    }

    pub(crate) fn settings(&self) -> ShellSettings {
        match self.loaded.lock() {
            Ok(guard) => guard.settings.clone(),
            Err(_) => ShellSettings::default(),
        }
    }

    pub(crate) fn replace_settings<F>(&self, settings: ShellSettings, log: F)
    where
        F: Fn(&str),
    {
        let loaded = LoadedSettings::new(settings, log);
        if let Ok(mut guard) = self.loaded.lock() {
            *guard = loaded;
        }
    }

    pub(crate) fn route(&self, url: &str) -> LinkAction {
        self.loaded
            .lock()
            .map(|guard| guard.router.route(url))
            .unwrap_or(LinkAction::OpenWithDefaultHandler)
    }

    pub(crate) fn is_start_minimized(&self) -> bool {
        self.start_minimized.load(Ordering::Relaxed)
    }

    pub(crate) fn clear_start_minimized(&self) {
        self.start_minimized.store(false, Ordering::Relaxed);
    }

    pub(crate) fn next_child_window_label(&self) -> String {
        format!(
            "{CHILD_WINDOW_LABEL_PREFIX}{}",
            self.next_child_id.fetch_add(1, Ordering::Relaxed)
        )
    }

    pub(crate) fn set_pending_context_menu(&self, pending: PendingContextMenu) {
        if let Ok(mut guard) = self.pending_context_menu.lock() {
            *guard = Some(pending);
        }
    }

    pub(crate) fn take_pending_context_menu(&self) -> Option<PendingContextMenu> {
        self.pending_context_menu
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }

    pub(crate) fn with_spell_checker<T>(&self, f: impl FnOnce(&mut SpellChecker) -> T) -> Option<T> {
        self.spell_checker.lock().ok().map(|mut guard| f(&mut guard))
    }

    /// Records the unread count; returns `true` when it differs from the last one.
    pub(crate) fn update_unread_count(&self, count: u32) -> bool {
        match self.unread_count.lock() {
            Ok(mut guard) => {
                if *guard == Some(count) {
                    return false;
                }
                *guard = Some(count);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MailShellState {
        MailShellState::new(ShellSettings::default(), true, SpellChecker::default(), |_| {})
    }

    #[test]
    fn child_window_labels_are_unique_and_prefixed() {
        let state = state();
        let first = state.next_child_window_label();
        let second = state.next_child_window_label();
        assert_eq!(first, "mail-child-1");
        assert_eq!(second, "mail-child-2");
    }

    #[test]
    fn start_minimized_flag_clears_once() {
        let state = state();
        assert!(state.is_start_minimized());
        state.clear_start_minimized();
        assert!(!state.is_start_minimized());
    }

    #[test]
    fn replacing_settings_rebuilds_the_router() {
        let state = state();
        let url = "https://mail.example.com/inbox";
        assert_eq!(state.route(url), LinkAction::OpenWithDefaultHandler);

        state.replace_settings(
            ShellSettings {
                external_urls: vec!["mail.example.com".to_string()],
                ..ShellSettings::default()
            },
            |_| {},
        );
        assert_eq!(state.route(url), LinkAction::LoadInPrimaryWindow);
        assert_eq!(state.settings().external_urls, vec!["mail.example.com"]);
    }

    #[test]
    fn pending_context_menu_is_taken_once() {
        let state = state();
        state.set_pending_context_menu(PendingContextMenu {
            window_label: "main".to_string(),
            params: ContextMenuParams::default(),
            entries: vec![ContextMenuEntry::CopyLinkUrl],
        });

        let pending = state.take_pending_context_menu().expect("pending menu");
        assert_eq!(pending.window_label, "main");
        assert!(state.take_pending_context_menu().is_none());
    }

    #[test]
    fn unread_count_reports_changes_only() {
        let state = state();
        assert!(state.update_unread_count(0));
        assert!(!state.update_unread_count(0));
        assert!(state.update_unread_count(4));
    }
}
