use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use url::Url;

use crate::{
    DEFAULT_EXTERNAL_URLS, DEFAULT_INTERNAL_URLS, DEFAULT_MAIN_WINDOW_URL,
    DEFAULT_SPELLCHECK_LANGUAGE, MAIN_WINDOW_URL_ENV,
};

const SHOW_WINDOW_FRAME_FIELD: &str = "showWindowFrame";
const URL_MAIN_WINDOW_FIELD: &str = "urlMainWindow";
const URLS_INTERNAL_FIELD: &str = "urlsInternal";
const URLS_EXTERNAL_FIELD: &str = "urlsExternal";
const HIDE_ON_CLOSE_FIELD: &str = "hideOnClose";
const HIDE_ON_MINIMIZE_FIELD: &str = "hideOnMinimize";
const SPELLCHECK_LANGUAGE_FIELD: &str = "spellcheckLanguage";
const SPELLCHECK_DICTIONARY_FIELD: &str = "spellcheckDictionary";

#[derive(Debug, thiserror::Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings {path} has non-object root")]
    NotObject { path: PathBuf },
}

/// Shell configuration. Every value falls back to its default when the key is
/// missing or carries the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellSettings {
    pub(crate) show_window_frame: bool,
    pub(crate) main_window_url: String,
    pub(crate) internal_urls: Vec<String>,
    pub(crate) external_urls: Vec<String>,
    pub(crate) hide_on_close: bool,
    pub(crate) hide_on_minimize: bool,
    pub(crate) spellcheck_language: String,
    pub(crate) spellcheck_dictionary: Option<PathBuf>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            show_window_frame: true,
            main_window_url: DEFAULT_MAIN_WINDOW_URL.to_string(),
            internal_urls: DEFAULT_INTERNAL_URLS.iter().map(|s| s.to_string()).collect(),
            external_urls: DEFAULT_EXTERNAL_URLS.iter().map(|s| s.to_string()).collect(),
            hide_on_close: true,
            hide_on_minimize: true,
            spellcheck_language: DEFAULT_SPELLCHECK_LANGUAGE.to_string(),
            spellcheck_dictionary: None,
        }
    }
}

impl ShellSettings {
    pub(crate) fn from_object<F>(object: &Map<String, Value>, log: F) -> Self
    where
        F: Fn(&str),
    {
        let defaults = Self::default();

        let main_window_url = match object.get(URL_MAIN_WINDOW_FIELD).and_then(Value::as_str) {
            Some(raw) => match normalize_main_window_url(raw) {
                Ok(url) => url,
                Err(error) => {
                    log(&format!("ignoring {URL_MAIN_WINDOW_FIELD}: {error}"));
                    defaults.main_window_url.clone()
                }
            },
            None => defaults.main_window_url.clone(),
        };

        Self {
            show_window_frame: read_bool(object, SHOW_WINDOW_FRAME_FIELD)
                .unwrap_or(defaults.show_window_frame),
            main_window_url,
            internal_urls: read_string_list(object, URLS_INTERNAL_FIELD)
                .unwrap_or(defaults.internal_urls),
            external_urls: read_string_list(object, URLS_EXTERNAL_FIELD)
                .unwrap_or(defaults.external_urls),
            hide_on_close: read_bool(object, HIDE_ON_CLOSE_FIELD).unwrap_or(defaults.hide_on_close),
            hide_on_minimize: read_bool(object, HIDE_ON_MINIMIZE_FIELD)
                .unwrap_or(defaults.hide_on_minimize),
            spellcheck_language: object
                .get(SPELLCHECK_LANGUAGE_FIELD)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.spellcheck_language),
            spellcheck_dictionary: object
                .get(SPELLCHECK_DICTIONARY_FIELD)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "settings: main_window_url={} internal_urls={:?} external_urls={:?} show_window_frame={} hide_on_close={} hide_on_minimize={}",
            self.main_window_url,
            self.internal_urls,
            self.external_urls,
            self.show_window_frame,
            self.hide_on_close,
            self.hide_on_minimize
        )
    }

    fn apply_env_overrides<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        if let Ok(raw) = env::var(MAIN_WINDOW_URL_ENV) {
            match normalize_main_window_url(&raw) {
                Ok(url) => self.main_window_url = url,
                Err(error) => log(&format!("ignoring {MAIN_WINDOW_URL_ENV}: {error}")),
            }
        }
    }
}

fn read_bool(object: &Map<String, Value>, field: &str) -> Option<bool> {
    object.get(field).and_then(Value::as_bool)
}

fn read_string_list(object: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    let items = object.get(field)?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

pub(crate) fn normalize_main_window_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|error| format!("invalid URL '{trimmed}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        scheme => Err(format!(
            "unsupported URL scheme '{scheme}', only http/https are allowed"
        )),
    }
}

fn read_settings_object(path: &Path) -> Result<Option<Map<String, Value>>, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err(SettingsError::NotObject {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads settings from `path` without env overrides; any file problem yields defaults.
pub(crate) fn load_settings_from_path<F>(path: &Path, log: F) -> ShellSettings
where
    F: Fn(&str),
{
    match read_settings_object(path) {
        Ok(Some(object)) => ShellSettings::from_object(&object, &log),
        Ok(None) => ShellSettings::default(),
        Err(error) => {
            log(&format!("{error}; using default settings"));
            ShellSettings::default()
        }
    }
}

pub(crate) fn load_settings<F>(log: F) -> ShellSettings
where
    F: Fn(&str),
{
    let mut settings = match crate::runtime_paths::settings_path() {
        Some(path) => load_settings_from_path(&path, &log),
        None => {
            log("settings path is unavailable; using default settings");
            ShellSettings::default()
        }
    };
    settings.apply_env_overrides(&log);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, io::Write};

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp settings file");
        file.write_all(contents.as_bytes())
            .expect("write temp settings file");
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let settings = load_settings_from_path(&dir.path().join("settings.json"), |_| {});
        assert_eq!(settings, ShellSettings::default());
        assert!(settings.show_window_frame);
        assert!(settings.hide_on_close);
        assert!(settings.hide_on_minimize);
        assert_eq!(settings.main_window_url, DEFAULT_MAIN_WINDOW_URL);
    }

    #[test]
    fn values_from_file_override_defaults() {
        let file = write_settings(
            r#"{
                "showWindowFrame": false,
                "urlMainWindow": "https://outlook.live.com/mail",
                "urlsInternal": ["example.com/deeplink"],
                "urlsExternal": [],
                "hideOnClose": false,
                "hideOnMinimize": false,
                "spellcheckLanguage": "de_DE"
            }"#,
        );

        let settings = load_settings_from_path(file.path(), |_| {});
        assert!(!settings.show_window_frame);
        assert_eq!(settings.main_window_url, "https://outlook.live.com/mail");
        assert_eq!(settings.internal_urls, vec!["example.com/deeplink"]);
        assert!(settings.external_urls.is_empty());
        assert!(!settings.hide_on_close);
        assert!(!settings.hide_on_minimize);
        assert_eq!(settings.spellcheck_language, "de_DE");
    }

    #[test]
    fn wrongly_typed_keys_fall_back_individually() {
        let file = write_settings(
            r#"{ "hideOnClose": "no", "hideOnMinimize": false, "urlsInternal": ["a", 1] }"#,
        );

        let settings = load_settings_from_path(file.path(), |_| {});
        assert!(settings.hide_on_close);
        assert!(!settings.hide_on_minimize);
        assert_eq!(settings.internal_urls, ShellSettings::default().internal_urls);
    }

    #[test]
    fn invalid_main_window_url_falls_back_and_logs() {
        let file = write_settings(r#"{ "urlMainWindow": "file:///etc/passwd" }"#);
        let messages = RefCell::new(Vec::new());

        let settings =
            load_settings_from_path(file.path(), |message| messages.borrow_mut().push(message.to_string()));
        assert_eq!(settings.main_window_url, DEFAULT_MAIN_WINDOW_URL);
        assert!(messages
            .borrow()
            .iter()
            .any(|message| message.contains("unsupported URL scheme 'file'")));
    }

    #[test]
    fn unparsable_or_non_object_file_yields_defaults() {
        let broken = write_settings("{ not json");
        assert_eq!(
            load_settings_from_path(broken.path(), |_| {}),
            ShellSettings::default()
        );

        let array = write_settings("[1, 2, 3]");
        let messages = RefCell::new(Vec::new());
        let settings =
            load_settings_from_path(array.path(), |message| messages.borrow_mut().push(message.to_string()));
        assert_eq!(settings, ShellSettings::default());
        assert!(messages.borrow()[0].contains("non-object root"));
    }
}
