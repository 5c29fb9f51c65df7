use crate::context_menu::{ContextMenuEntry, EditRole};

pub const CONTEXT_MENU_ADD_TO_DICTIONARY: &str = "ctx_add_to_dictionary";
pub const CONTEXT_MENU_SUGGESTION_PREFIX: &str = "ctx_suggestion_";
pub const CONTEXT_MENU_COPY_LINK_URL: &str = "ctx_copy_link_url";
pub const CONTEXT_MENU_COPY_LINK_TEXT: &str = "ctx_copy_link_text";
pub const CONTEXT_MENU_EDIT_UNDO: &str = "ctx_edit_undo";
pub const CONTEXT_MENU_EDIT_REDO: &str = "ctx_edit_redo";
pub const CONTEXT_MENU_EDIT_DELETE: &str = "ctx_edit_delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuAction {
    AddToDictionary,
    ReplaceMisspelling(usize),
    CopyLinkUrl,
    CopyLinkText,
    /// Runs `document.execCommand` with the given command in the page.
    EditCommand(&'static str),
}

pub fn action_from_menu_id(menu_id: &str) -> Option<ContextMenuAction> {
    match menu_id {
        CONTEXT_MENU_ADD_TO_DICTIONARY => Some(ContextMenuAction::AddToDictionary),
        CONTEXT_MENU_COPY_LINK_URL => Some(ContextMenuAction::CopyLinkUrl),
        CONTEXT_MENU_COPY_LINK_TEXT => Some(ContextMenuAction::CopyLinkText),
        CONTEXT_MENU_EDIT_UNDO => Some(ContextMenuAction::EditCommand("undo")),
        CONTEXT_MENU_EDIT_REDO => Some(ContextMenuAction::EditCommand("redo")),
        CONTEXT_MENU_EDIT_DELETE => Some(ContextMenuAction::EditCommand("delete")),
        other => other
            .strip_prefix(CONTEXT_MENU_SUGGESTION_PREFIX)
            .and_then(|index| index.parse().ok())
            .map(ContextMenuAction::ReplaceMisspelling),
    }
}

/// Menu id for entries the shell handles itself. Labels, separators and natively handled
/// edit roles have none.
pub fn menu_id_for_entry(entry: &ContextMenuEntry) -> Option<String> {
    let id = match entry {
        ContextMenuEntry::AddToDictionary(_) => CONTEXT_MENU_ADD_TO_DICTIONARY.to_string(),
        ContextMenuEntry::Suggestion { index, .. } => {
            format!("{CONTEXT_MENU_SUGGESTION_PREFIX}{index}")
        }
        ContextMenuEntry::CopyLinkUrl => CONTEXT_MENU_COPY_LINK_URL.to_string(),
        ContextMenuEntry::CopyLinkText => CONTEXT_MENU_COPY_LINK_TEXT.to_string(),
        ContextMenuEntry::Edit(EditRole::Undo) => CONTEXT_MENU_EDIT_UNDO.to_string(),
        ContextMenuEntry::Edit(EditRole::Redo) => CONTEXT_MENU_EDIT_REDO.to_string(),
        ContextMenuEntry::Edit(EditRole::Delete) => CONTEXT_MENU_EDIT_DELETE.to_string(),
        _ => return None,
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(CONTEXT_MENU_ADD_TO_DICTIONARY),
            Some(ContextMenuAction::AddToDictionary)
        );
        assert_eq!(
            action_from_menu_id("ctx_suggestion_3"),
            Some(ContextMenuAction::ReplaceMisspelling(3))
        );
        assert_eq!(
            action_from_menu_id(CONTEXT_MENU_COPY_LINK_URL),
            Some(ContextMenuAction::CopyLinkUrl)
        );
        assert_eq!(
            action_from_menu_id(CONTEXT_MENU_COPY_LINK_TEXT),
            Some(ContextMenuAction::CopyLinkText)
        );
        assert_eq!(
            action_from_menu_id(CONTEXT_MENU_EDIT_DELETE),
            Some(ContextMenuAction::EditCommand("delete"))
        );
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id("ctx_suggestion_x"), None);
    }

    #[test]
    fn menu_ids_round_trip_through_actions() {
        let entry = ContextMenuEntry::Suggestion {
            index: 2,
            word: "hello".to_string(),
        };
        let id = menu_id_for_entry(&entry).expect("suggestions have ids");
        assert_eq!(
            action_from_menu_id(&id),
            Some(ContextMenuAction::ReplaceMisspelling(2))
        );
        assert_eq!(menu_id_for_entry(&ContextMenuEntry::Separator), None);
        assert_eq!(menu_id_for_entry(&ContextMenuEntry::Edit(EditRole::Paste)), None);
    }
}
