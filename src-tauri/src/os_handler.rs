use std::process::{Command, Stdio};

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum HandoffError {
    #[error("no URL to hand off")]
    Empty,
    #[error("'{0}' is not a URL")]
    Malformed(String),
    #[error("links with scheme '{0}' are not handed to the OS")]
    Refused(String),
    #[error("OS handler '{program}' could not be started: {message}")]
    Launch { program: &'static str, message: String },
    #[error("this platform has no OS link handler")]
    Unsupported,
}

/// Kinds of link the OS default handler may receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandoffKind {
    Web,
    Mail,
}

fn handoff_kind(url: &Url) -> Option<HandoffKind> {
    match url.scheme() {
        "http" | "https" => Some(HandoffKind::Web),
        "mailto" => Some(HandoffKind::Mail),
        _ => None,
    }
}

/// Validates a link before it leaves the shell.
pub(crate) fn handoff_target(raw_url: &str) -> Result<(HandoffKind, Url), HandoffError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(HandoffError::Empty);
    }
    let url = Url::parse(trimmed).map_err(|_| HandoffError::Malformed(trimmed.to_string()))?;
    match handoff_kind(&url) {
        Some(kind) => Ok((kind, url)),
        None => Err(HandoffError::Refused(url.scheme().to_string())),
    }
}

/// Program and leading arguments that open a URL with the user's default handler.
fn os_opener() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("open", &[]))
    } else if cfg!(target_os = "windows") {
        Some(("rundll32", &["url.dll,FileProtocolHandler"]))
    } else if cfg!(unix) {
        Some(("xdg-open", &[]))
    } else {
        None
    }
}

fn launch(url: &Url) -> Result<(), HandoffError> {
    let (program, leading_args) = os_opener().ok_or(HandoffError::Unsupported)?;
    Command::new(program)
        .args(leading_args)
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| HandoffError::Launch {
            program,
            message: error.to_string(),
        })
}

pub(crate) fn open_with_os_handler<F>(raw_url: &str, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let (kind, url) = handoff_target(raw_url).map_err(|error| error.to_string())?;
    log(&format!("handing {kind:?} link to the OS: {url}"));
    launch(&url).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_and_mail_links_are_handed_off() {
        let (kind, url) = handoff_target(" https://example.com/path ").expect("web link");
        assert_eq!(kind, HandoffKind::Web);
        assert_eq!(url.as_str(), "https://example.com/path");
        assert_eq!(
            handoff_target("http://example.com").map(|(kind, _)| kind),
            Ok(HandoffKind::Web)
        );
        assert_eq!(
            handoff_target("mailto:someone@example.com").map(|(kind, _)| kind),
            Ok(HandoffKind::Mail)
        );
    }

    #[test]
    fn local_and_script_links_stay_in_the_shell() {
        assert_eq!(
            handoff_target("file:///etc/hosts"),
            Err(HandoffError::Refused("file".to_string()))
        );
        assert_eq!(
            handoff_target("javascript:alert(1)"),
            Err(HandoffError::Refused("javascript".to_string()))
        );
    }

    #[test]
    fn blank_or_malformed_input_is_rejected() {
        assert_eq!(handoff_target("   "), Err(HandoffError::Empty));
        assert_eq!(
            handoff_target("not a url"),
            Err(HandoffError::Malformed("not a url".to_string()))
        );
    }

    #[test]
    fn refused_links_never_reach_the_launcher() {
        let messages = std::cell::RefCell::new(Vec::new());
        let error = open_with_os_handler("ftp://example.com/file", |message| {
            messages.borrow_mut().push(message.to_string())
        })
        .unwrap_err();
        assert!(error.contains("'ftp'"));
        assert!(messages.borrow().is_empty());
    }
}
