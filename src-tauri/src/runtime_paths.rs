use std::{env, path::PathBuf};

use crate::{
    spellcheck::DictionaryFiles, PERSONAL_DICTIONARY_FILE, SETTINGS_DIR_NAME, SETTINGS_FILE,
    SETTINGS_PATH_ENV,
};

pub(crate) fn default_settings_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(SETTINGS_DIR_NAME))
}

pub(crate) fn settings_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(raw.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    default_settings_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// The personal dictionary lives next to whichever settings file is in use.
pub(crate) fn personal_dictionary_path() -> Option<PathBuf> {
    let settings = settings_path()?;
    let dir = settings.parent()?.to_path_buf();
    Some(dir.join(PERSONAL_DICTIONARY_FILE))
}

/// Directories searched for `<language>.aff`/`<language>.dic` pairs, in order.
fn dictionary_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(dir) = default_settings_dir() {
        dirs.push(dir.join("dictionaries"));
    }
    if cfg!(target_os = "macos") {
        if let Some(home) = home::home_dir() {
            dirs.push(home.join("Library").join("Spelling"));
        }
        dirs.push(PathBuf::from("/Library/Spelling"));
        dirs.push(PathBuf::from("/opt/homebrew/share/hunspell"));
    }
    for dir in [
        "/usr/share/hunspell",
        "/usr/share/myspell",
        "/usr/share/myspell/dicts",
        "/usr/local/share/hunspell",
    ] {
        dirs.push(PathBuf::from(dir));
    }

    dirs
}

pub(crate) fn dictionary_candidates(language: &str) -> Vec<DictionaryFiles> {
    dictionary_dirs()
        .into_iter()
        .map(|dir| DictionaryFiles {
            aff: dir.join(format!("{language}.aff")),
            dic: dir.join(format!("{language}.dic")),
        })
        .collect()
}
