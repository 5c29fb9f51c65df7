//! Styles and scripts injected into the hosted mail pages.

use serde_json::Value;

pub(crate) const MAIN_CSS: &str = include_str!("../client/main.css");
pub(crate) const NO_FRAME_CSS: &str = include_str!("../client/no-frame.css");
pub(crate) const NO_FRAME_JS: &str = include_str!("../client/no-frame.js");
pub(crate) const CHILD_WINDOW_JS: &str = include_str!("../client/child-window.js");
pub(crate) const CONTEXT_MENU_JS: &str = include_str!("../client/context-menu.js");
pub(crate) const UNREAD_OBSERVER_JS: &str = include_str!("../client/unread-observer.js");

const MAIN_STYLE_ID: &str = "mail-shell-main-css";
const NO_FRAME_STYLE_ID: &str = "mail-shell-no-frame-css";

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Inserts `css` once per document, keyed by `style_id`.
pub(crate) fn style_injection_script(style_id: &str, css: &str) -> String {
    format!(
        "(function(){{if(document.getElementById({id}))return;\
var style=document.createElement('style');style.id={id};style.textContent={css};\
(document.head||document.documentElement).appendChild(style);}})();",
        id = js_string(style_id),
        css = js_string(css),
    )
}

pub(crate) fn main_window_decoration_script(frameless: bool) -> String {
    let mut script = style_injection_script(MAIN_STYLE_ID, MAIN_CSS);
    if frameless {
        script.push('\n');
        script.push_str(&style_injection_script(NO_FRAME_STYLE_ID, NO_FRAME_CSS));
        script.push('\n');
        script.push_str(NO_FRAME_JS);
    }
    script
}

/// Decorates a deep-link window step by step and reports the outcome back to the shell,
/// which shows the window either way.
pub(crate) fn child_window_decoration_script(frameless: bool) -> String {
    let mut steps = vec![(
        "main.css",
        style_injection_script(MAIN_STYLE_ID, MAIN_CSS),
    )];
    if frameless {
        steps.push((
            "no-frame.css",
            style_injection_script(NO_FRAME_STYLE_ID, NO_FRAME_CSS),
        ));
        steps.push(("child-window.js", CHILD_WINDOW_JS.to_string()));
    }

    let mut body = String::new();
    for (stage, step) in steps {
        body.push_str(&format!("stage={};\n{}\n", js_string(stage), step));
    }

    format!(
        "(function(){{var stage=null;\
var report=function(outcome){{window.__TAURI_INTERNALS__.invoke('mail_shell_report_decoration',{{outcome:outcome}})\
.catch(function(error){{console.error('mail shell: failed to report decoration',error);}});}};\
try{{\n{body}report({{ok:true}});}}\
catch(error){{report({{ok:false,stage:stage,message:String(error)}});}}}})();"
    )
}

pub(crate) fn replace_misspelling_script(suggestion: &str) -> String {
    format!(
        "window.__mailShellContextMenu&&window.__mailShellContextMenu.replaceMisspelling({});",
        js_string(suggestion)
    )
}

pub(crate) fn edit_command_script(command: &str) -> String {
    format!(
        "window.__mailShellContextMenu&&window.__mailShellContextMenu.runEditCommand({});",
        js_string(command)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_injection_escapes_css_payload() {
        let script = style_injection_script("id", "a::before { content: \"</style>\\n\" }");
        assert!(script.contains(r#"style.textContent="a::before { content: \"</style>\\n\" }""#));
        assert!(script.contains(r#"document.getElementById("id")"#));
    }

    #[test]
    fn framed_main_window_only_gets_main_styles() {
        let script = main_window_decoration_script(false);
        assert!(script.contains(MAIN_STYLE_ID));
        assert!(!script.contains(NO_FRAME_STYLE_ID));
    }

    #[test]
    fn frameless_main_window_gets_drag_region_script() {
        let script = main_window_decoration_script(true);
        assert!(script.contains(NO_FRAME_STYLE_ID));
        assert!(script.contains("data-tauri-drag-region"));
    }

    #[test]
    fn frameless_child_window_runs_steps_in_order() {
        let script = child_window_decoration_script(true);
        let main = script.find(r#"stage="main.css""#).expect("main.css stage");
        let no_frame = script
            .find(r#"stage="no-frame.css""#)
            .expect("no-frame.css stage");
        let child = script
            .find(r#"stage="child-window.js""#)
            .expect("child-window.js stage");
        assert!(main < no_frame && no_frame < child);
        assert!(script.contains("mail_shell_report_decoration"));
    }

    #[test]
    fn framed_child_window_skips_frameless_steps() {
        let script = child_window_decoration_script(false);
        assert!(script.contains(r#"stage="main.css""#));
        assert!(!script.contains("child-window.js"));
    }

    #[test]
    fn page_action_scripts_quote_arguments() {
        assert_eq!(
            replace_misspelling_script("it's \"fine\""),
            r#"window.__mailShellContextMenu&&window.__mailShellContextMenu.replaceMisspelling("it's \"fine\"");"#
        );
        assert!(edit_command_script("undo").ends_with(r#"runEditCommand("undo");"#));
    }
}
