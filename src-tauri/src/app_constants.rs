pub(crate) const APP_TITLE: &str = "Prospect Mail";
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const CHILD_WINDOW_LABEL_PREFIX: &str = "mail-child-";

pub(crate) const DEFAULT_MAIN_WINDOW_URL: &str = "https://outlook.office.com/mail";
pub(crate) const DEFAULT_INTERNAL_URLS: [&str; 4] = [
    "outlook.live.com/mail/deeplink",
    "outlook.office365.com/mail/deeplink",
    "outlook.office.com/mail/deeplink",
    "outlook.office.com/calendar/deeplink",
];
pub(crate) const DEFAULT_EXTERNAL_URLS: [&str; 3] = [
    "outlook.live.com",
    "outlook.office365.com",
    "outlook.office.com",
];
pub(crate) const DEFAULT_SPELLCHECK_LANGUAGE: &str = "en_US";

pub(crate) const MAIN_WINDOW_X: f64 = 100.0;
pub(crate) const MAIN_WINDOW_Y: f64 = 100.0;
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1400.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 900.0;

pub(crate) const START_MINIMIZED_ARG: &str = "--minimized";

pub(crate) const SETTINGS_PATH_ENV: &str = "MAIL_SHELL_SETTINGS";
pub(crate) const MAIN_WINDOW_URL_ENV: &str = "MAIL_SHELL_URL";
pub(crate) const SETTINGS_DIR_NAME: &str = ".prospect-mail";
pub(crate) const SETTINGS_FILE: &str = "settings.json";
pub(crate) const PERSONAL_DICTIONARY_FILE: &str = "personal-dictionary.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop";
