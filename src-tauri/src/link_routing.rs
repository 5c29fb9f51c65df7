use regex::Regex;

/// What to do with a link that asked for a new window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Open in a new in-app window that shares the opener's context.
    OpenDeepLinkWindow,
    /// Cancel the new window and load the URL in the primary window.
    LoadInPrimaryWindow,
    /// Cancel the new window and hand the URL to the OS default handler.
    OpenWithDefaultHandler,
}

/// A list of regex fragments joined into one unanchored alternation. A fragment that is
/// not a valid regex on its own is matched literally.
#[derive(Debug, Clone)]
struct PatternSet {
    matcher: Option<Regex>,
}

impl PatternSet {
    fn compile<F>(name: &str, patterns: &[String], log: F) -> Self
    where
        F: Fn(&str),
    {
        let fragments: Vec<&str> = patterns
            .iter()
            .map(String::as_str)
            .filter(|pattern| !pattern.is_empty())
            .collect();
        if fragments.is_empty() {
            return Self { matcher: None };
        }

        let fragments: Vec<String> = fragments
            .into_iter()
            .map(|fragment| match Regex::new(fragment) {
                Ok(_) => fragment.to_string(),
                Err(error) => {
                    log(&format!(
                        "{name} pattern '{fragment}' is not a valid regex ({error}); matching it literally"
                    ));
                    regex::escape(fragment)
                }
            })
            .collect();

        match Regex::new(&fragments.join("|")) {
            Ok(regex) => Self {
                matcher: Some(regex),
            },
            Err(error) => {
                log(&format!(
                    "{name} patterns could not be combined ({error}); they match nothing"
                ));
                Self { matcher: None }
            }
        }
    }

    fn is_match(&self, url: &str) -> bool {
        self.matcher
            .as_ref()
            .map(|regex| regex.is_match(url))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct LinkRouter {
    deep_links: PatternSet,
    app_hosts: PatternSet,
}

impl LinkRouter {
    pub fn new<F>(internal_urls: &[String], external_urls: &[String], log: F) -> Self
    where
        F: Fn(&str),
    {
        Self {
            deep_links: PatternSet::compile("internal deep-link", internal_urls, &log),
            app_hosts: PatternSet::compile("external app", external_urls, &log),
        }
    }

    pub fn route(&self, url: &str) -> LinkAction {
        if self.deep_links.is_match(url) {
            LinkAction::OpenDeepLinkWindow
        } else if self.app_hosts.is_match(url) {
            LinkAction::LoadInPrimaryWindow
        } else {
            LinkAction::OpenWithDefaultHandler
        }
    }
}
