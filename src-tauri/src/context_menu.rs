use serde::Deserialize;

use crate::spellcheck::SpellingResult;

const LINK_LABEL_MAX_CHARS: usize = 50;
const LINK_LABEL_ELLIPSIS: &str = "...";

/// Edit capabilities reported by the page for the element under the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditFlags {
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_cut: bool,
    pub can_copy: bool,
    pub can_paste: bool,
    pub can_delete: bool,
    pub can_select_all: bool,
}

/// What the page script sends when the user right-clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextMenuParams {
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub is_editable: bool,
    pub word_under_cursor: Option<String>,
    pub edit_flags: EditFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Delete,
    SelectAll,
}

impl EditRole {
    pub fn label(self) -> &'static str {
        match self {
            EditRole::Undo => "Undo",
            EditRole::Redo => "Redo",
            EditRole::Cut => "Cut",
            EditRole::Copy => "Copy",
            EditRole::Paste => "Paste",
            EditRole::Delete => "Delete",
            EditRole::SelectAll => "Select all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMenuEntry {
    Header(&'static str),
    Separator,
    AddToDictionary(String),
    Suggestion { index: usize, word: String },
    NoSuggestions,
    LinkPreview(String),
    CopyLinkUrl,
    CopyLinkText,
    Edit(EditRole),
}

pub(crate) fn link_preview_label(link_url: &str) -> String {
    if link_url.chars().count() <= LINK_LABEL_MAX_CHARS {
        return link_url.to_string();
    }

    let keep = LINK_LABEL_MAX_CHARS - LINK_LABEL_ELLIPSIS.len();
    let mut label: String = link_url.chars().take(keep).collect();
    label.push_str(LINK_LABEL_ELLIPSIS);
    label
}

fn spelling_entries(spelling: &SpellingResult) -> Vec<ContextMenuEntry> {
    let mut entries = vec![
        ContextMenuEntry::Header("- Spelling -"),
        ContextMenuEntry::Separator,
    ];
    let mut offers_something = false;

    if let Some(word) = &spelling.misspelled_word {
        offers_something = true;
        entries.push(ContextMenuEntry::AddToDictionary(word.clone()));
    }
    entries.push(ContextMenuEntry::Separator);

    if spelling.suggestions.is_empty() {
        entries.push(ContextMenuEntry::NoSuggestions);
    } else {
        offers_something = true;
        entries.extend(
            spelling
                .suggestions
                .iter()
                .enumerate()
                .map(|(index, word)| ContextMenuEntry::Suggestion {
                    index,
                    word: word.clone(),
                }),
        );
    }

    if offers_something {
        entries
    } else {
        Vec::new()
    }
}

fn edit_entries(params: &ContextMenuParams) -> impl Iterator<Item = ContextMenuEntry> + '_ {
    let flags = params.edit_flags;
    [
        (flags.can_undo, EditRole::Undo, true),
        (flags.can_redo, EditRole::Redo, true),
        (flags.can_cut, EditRole::Cut, false),
        (flags.can_copy, EditRole::Copy, false),
        (flags.can_paste, EditRole::Paste, false),
        (flags.can_delete, EditRole::Delete, false),
        (flags.can_select_all, EditRole::SelectAll, true),
    ]
    .into_iter()
    .filter(move |(enabled, _, editable_only)| {
        *enabled && (!*editable_only || params.is_editable)
    })
    .map(|(_, role, _)| ContextMenuEntry::Edit(role))
}

/// Builds the menu for a right-click. An empty result means no menu is shown.
pub fn build_context_menu(
    params: &ContextMenuParams,
    spelling: Option<&SpellingResult>,
) -> Vec<ContextMenuEntry> {
    let mut entries = spelling.map(spelling_entries).unwrap_or_default();

    if !entries.is_empty() {
        entries.push(ContextMenuEntry::Separator);
        entries.push(ContextMenuEntry::Header("- Edit -"));
    }

    if let Some(link_url) = params.link_url.as_deref().filter(|url| !url.is_empty()) {
        entries.push(ContextMenuEntry::LinkPreview(link_preview_label(link_url)));
        entries.push(ContextMenuEntry::CopyLinkUrl);
        entries.push(ContextMenuEntry::CopyLinkText);
        entries.push(ContextMenuEntry::Separator);
    }

    entries.extend(edit_entries(params));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editable_params() -> ContextMenuParams {
        ContextMenuParams {
            is_editable: true,
            word_under_cursor: Some("helo".to_string()),
            edit_flags: EditFlags {
                can_undo: true,
                can_redo: true,
                can_cut: false,
                can_copy: false,
                can_paste: true,
                can_delete: false,
                can_select_all: true,
            },
            ..ContextMenuParams::default()
        }
    }

    #[test]
    fn params_deserialize_from_page_payload() {
        let params: ContextMenuParams = serde_json::from_str(
            r#"{
                "linkUrl": "https://example.com",
                "linkText": "Example",
                "isEditable": false,
                "editFlags": { "canCopy": true }
            }"#,
        )
        .expect("valid payload");
        assert_eq!(params.link_url.as_deref(), Some("https://example.com"));
        assert!(params.edit_flags.can_copy);
        assert!(!params.edit_flags.can_paste);
        assert_eq!(params.word_under_cursor, None);
    }

    #[test]
    fn misspelled_word_gets_spelling_section_then_edit_header() {
        let spelling = SpellingResult {
            misspelled_word: Some("helo".to_string()),
            suggestions: vec!["hello".to_string(), "help".to_string()],
        };

        let entries = build_context_menu(&editable_params(), Some(&spelling));
        assert_eq!(
            entries,
            vec![
                ContextMenuEntry::Header("- Spelling -"),
                ContextMenuEntry::Separator,
                ContextMenuEntry::AddToDictionary("helo".to_string()),
                ContextMenuEntry::Separator,
                ContextMenuEntry::Suggestion {
                    index: 0,
                    word: "hello".to_string()
                },
                ContextMenuEntry::Suggestion {
                    index: 1,
                    word: "help".to_string()
                },
                ContextMenuEntry::Separator,
                ContextMenuEntry::Header("- Edit -"),
                ContextMenuEntry::Edit(EditRole::Undo),
                ContextMenuEntry::Edit(EditRole::Redo),
                ContextMenuEntry::Edit(EditRole::Paste),
                ContextMenuEntry::Edit(EditRole::SelectAll),
            ]
        );
    }

    #[test]
    fn misspelling_without_suggestions_shows_placeholder() {
        let spelling = SpellingResult {
            misspelled_word: Some("qwzx".to_string()),
            suggestions: Vec::new(),
        };

        let entries = build_context_menu(&editable_params(), Some(&spelling));
        assert!(entries.contains(&ContextMenuEntry::AddToDictionary("qwzx".to_string())));
        assert!(entries.contains(&ContextMenuEntry::NoSuggestions));
    }

    #[test]
    fn correctly_spelled_word_drops_spelling_section() {
        let spelling = SpellingResult {
            misspelled_word: None,
            suggestions: Vec::new(),
        };

        let entries = build_context_menu(&editable_params(), Some(&spelling));
        assert_eq!(
            entries,
            vec![
                ContextMenuEntry::Edit(EditRole::Undo),
                ContextMenuEntry::Edit(EditRole::Redo),
                ContextMenuEntry::Edit(EditRole::Paste),
                ContextMenuEntry::Edit(EditRole::SelectAll),
            ]
        );
    }

    #[test]
    fn read_only_content_hides_undo_redo_and_select_all() {
        let params = ContextMenuParams {
            is_editable: false,
            edit_flags: EditFlags {
                can_undo: true,
                can_redo: true,
                can_copy: true,
                can_select_all: true,
                ..EditFlags::default()
            },
            ..ContextMenuParams::default()
        };

        assert_eq!(
            build_context_menu(&params, None),
            vec![ContextMenuEntry::Edit(EditRole::Copy)]
        );
    }

    #[test]
    fn links_get_preview_and_copy_entries() {
        let long_url = format!("https://example.com/{}", "a".repeat(60));
        let params = ContextMenuParams {
            link_url: Some(long_url.clone()),
            link_text: Some("Example".to_string()),
            ..ContextMenuParams::default()
        };

        let entries = build_context_menu(&params, None);
        let expected_label = format!("{}...", &long_url[..47]);
        assert_eq!(
            entries,
            vec![
                ContextMenuEntry::LinkPreview(expected_label),
                ContextMenuEntry::CopyLinkUrl,
                ContextMenuEntry::CopyLinkText,
                ContextMenuEntry::Separator,
            ]
        );
    }

    #[test]
    fn short_link_label_is_kept_whole() {
        assert_eq!(link_preview_label("https://example.com"), "https://example.com");
        let exactly_fifty = "x".repeat(50);
        assert_eq!(link_preview_label(&exactly_fifty), exactly_fifty);
    }

    #[test]
    fn nothing_to_offer_yields_empty_menu() {
        assert!(build_context_menu(&ContextMenuParams::default(), None).is_empty());
    }
}
