use tauri::{ipc::CapabilityBuilder, AppHandle, Manager};
use url::Url;

use crate::{settings::ShellSettings, CHILD_WINDOW_LABEL_PREFIX, MAIN_WINDOW_LABEL};

const CONFIGURED_HOSTS_CAPABILITY: &str = "mail-shell-configured-hosts";

/// Host named by a routing fragment such as `outlook.office.com/mail/deeplink` or
/// `mail\.example\.com`. Fragments that are real regexes past the host name yield `None`.
fn fragment_host(fragment: &str) -> Option<String> {
    let host = fragment
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split('/')
        .next()?
        .replace(r"\.", ".");
    let plain = host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    (plain && host.contains('.') && !host.starts_with('.')).then(|| host.to_ascii_lowercase())
}

fn origin_pattern(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}://{host}:{port}/*", url.scheme())),
        None => Some(format!("{}://{host}/*", url.scheme())),
    }
}

/// Remote URL patterns allowed to call the shell commands: the main window's origin plus
/// every host named by the deep-link and app-host patterns.
pub(crate) fn remote_url_patterns(settings: &ShellSettings) -> Vec<String> {
    let mut patterns = Vec::new();
    if let Some(pattern) = Url::parse(&settings.main_window_url)
        .ok()
        .as_ref()
        .and_then(origin_pattern)
    {
        patterns.push(pattern);
    }

    for fragment in settings.internal_urls.iter().chain(&settings.external_urls) {
        if let Some(host) = fragment_host(fragment) {
            patterns.push(format!("https://{host}/*"));
        }
    }

    let mut seen = std::collections::HashSet::new();
    patterns.retain(|pattern| seen.insert(pattern.clone()));
    patterns
}

/// Lets pages on the configured hosts reach the shell commands, on top of the bundled
/// capability for the stock Outlook origins.
pub(crate) fn grant_configured_hosts<F>(
    app_handle: &AppHandle,
    settings: &ShellSettings,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str),
{
    let patterns = remote_url_patterns(settings);
    if patterns.is_empty() {
        log("no configured hosts to grant shell access to");
        return Ok(());
    }

    let mut capability = CapabilityBuilder::new(CONFIGURED_HOSTS_CAPABILITY)
        .windows([
            MAIN_WINDOW_LABEL.to_string(),
            format!("{CHILD_WINDOW_LABEL_PREFIX}*"),
        ])
        .permission("core:default")
        .permission("core:window:allow-start-dragging");
    for pattern in &patterns {
        capability = capability.remote(pattern.clone());
    }

    app_handle
        .add_capability(capability)
        .map_err(|error| format!("Failed to grant shell access to configured hosts: {error}"))?;
    log(&format!("shell access granted to {}", patterns.join(", ")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn default_settings_cover_stock_outlook_hosts() {
        let patterns = remote_url_patterns(&ShellSettings::default());
        assert_eq!(
            patterns,
            vec![
                "https://outlook.office.com/*",
                "https://outlook.live.com/*",
                "https://outlook.office365.com/*",
            ]
        );
    }

    #[test]
    fn custom_hosts_from_every_setting_are_included() {
        let settings = ShellSettings {
            main_window_url: "http://localhost:8080/owa".to_string(),
            internal_urls: strings(&["mail.example.com/open"]),
            external_urls: strings(&[r"webmail\.example\.org", "mail.example.com"]),
            ..ShellSettings::default()
        };

        assert_eq!(
            remote_url_patterns(&settings),
            vec![
                "http://localhost:8080/*",
                "https://mail.example.com/*",
                "https://webmail.example.org/*",
            ]
        );
    }

    #[test]
    fn regex_fragments_without_a_plain_host_are_skipped() {
        assert_eq!(fragment_host(r"mail\.example\.(com|org)"), None);
        assert_eq!(fragment_host(r".*\.example\.com"), None);
        assert_eq!(fragment_host("deeplink"), None);
        assert_eq!(fragment_host(""), None);
        assert_eq!(
            fragment_host("https://Mail.Example.com/x"),
            Some("mail.example.com".to_string())
        );
    }
}
