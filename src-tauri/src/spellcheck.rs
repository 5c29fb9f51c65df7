use std::{
    collections::BTreeSet,
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use spellbook::Dictionary;

const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {path} is not valid {encoding}")]
    Encoding { path: PathBuf, encoding: String },
    #[error("failed to load dictionary {path}: {message}")]
    Dictionary { path: PathBuf, message: String },
    #[error("failed to parse personal dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write personal dictionary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersonalDictionaryFile {
    #[serde(default)]
    words: BTreeSet<String>,
}

/// Outcome of checking the word under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingResult {
    pub misspelled_word: Option<String>,
    pub suggestions: Vec<String>,
}

/// A hunspell `.aff`/`.dic` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DictionaryFiles {
    pub(crate) aff: PathBuf,
    pub(crate) dic: PathBuf,
}

impl DictionaryFiles {
    /// Pairs `path` with its sibling of the other kind, so either file may be configured.
    pub(crate) fn from_either(path: &Path) -> Self {
        Self {
            aff: path.with_extension("aff"),
            dic: path.with_extension("dic"),
        }
    }

    fn exist(&self) -> bool {
        self.aff.is_file() && self.dic.is_file()
    }
}

fn read_dictionary_bytes(path: &Path) -> Result<Vec<u8>, DictionaryError> {
    fs::read(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Encoding named by the `SET` line of an `.aff` file. Defaults to UTF-8.
fn declared_encoding(aff: &[u8]) -> String {
    aff.split(|byte| *byte == b'\n')
        .filter_map(|line| std::str::from_utf8(line).ok())
        .find_map(|line| {
            let mut parts = line.split_whitespace();
            if parts.next() != Some("SET") {
                return None;
            }
            parts.next().map(str::to_string)
        })
        .unwrap_or_else(|| "UTF-8".to_string())
}

fn decode_dictionary_text(
    bytes: Vec<u8>,
    encoding: &str,
    path: &Path,
) -> Result<String, DictionaryError> {
    match encoding.to_ascii_uppercase().as_str() {
        "ISO8859-1" | "ISO-8859-1" | "LATIN1" => Ok(bytes.into_iter().map(char::from).collect()),
        _ => String::from_utf8(bytes).map_err(|_| DictionaryError::Encoding {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        }),
    }
}

/// Reads and parses a dictionary pair, decoding both files with the `.aff` `SET` encoding.
pub(crate) fn load_dictionary(files: &DictionaryFiles) -> Result<Dictionary, DictionaryError> {
    let aff_bytes = read_dictionary_bytes(&files.aff)?;
    let dic_bytes = read_dictionary_bytes(&files.dic)?;
    let encoding = declared_encoding(&aff_bytes);

    let aff = decode_dictionary_text(aff_bytes, &encoding, &files.aff)?;
    let dic = decode_dictionary_text(dic_bytes, &encoding, &files.dic)?;
    // Both texts are UTF-8 once decoded.
    let aff = aff
        .lines()
        .map(|line| {
            if line.split_whitespace().next() == Some("SET") {
                "SET UTF-8"
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    Dictionary::new(&aff, &dic).map_err(|error| DictionaryError::Dictionary {
        path: files.dic.clone(),
        message: error.to_string(),
    })
}

fn load_personal_words(path: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(source) => {
            return Err(DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let parsed: PersonalDictionaryFile =
        serde_json::from_str(&raw).map_err(|source| DictionaryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parsed.words)
}

fn write_personal_words(path: &Path, words: &BTreeSet<String>) -> Result<(), DictionaryError> {
    let write_error = |source| DictionaryError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let serialized = serde_json::to_string_pretty(&PersonalDictionaryFile {
        words: words.clone(),
    })
    .map_err(|source| DictionaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, serialized).map_err(write_error)
}

/// Hunspell dictionary plus the user's personal words.
#[derive(Default)]
pub struct SpellChecker {
    dictionary: Option<Dictionary>,
    personal_words: BTreeSet<String>,
    personal_path: Option<PathBuf>,
}

impl fmt::Debug for SpellChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellChecker")
            .field("enabled", &self.is_enabled())
            .field("personal_words", &self.personal_words.len())
            .field("personal_path", &self.personal_path)
            .finish()
    }
}

impl SpellChecker {
    pub(crate) fn new(dictionary: Option<Dictionary>, personal_path: Option<PathBuf>) -> Self {
        Self {
            dictionary,
            personal_words: BTreeSet::new(),
            personal_path,
        }
    }

    /// Loads the first dictionary pair that exists among `candidates`, plus the personal words.
    pub(crate) fn load<F>(
        candidates: &[DictionaryFiles],
        personal_path: Option<PathBuf>,
        log: F,
    ) -> Self
    where
        F: Fn(&str),
    {
        let dictionary = match candidates.iter().find(|files| files.exist()) {
            Some(files) => match load_dictionary(files) {
                Ok(dictionary) => {
                    log(&format!(
                        "loaded spell-check dictionary {}",
                        files.dic.display()
                    ));
                    Some(dictionary)
                }
                Err(error) => {
                    log(&format!("{error}; spell checking disabled"));
                    None
                }
            },
            None => {
                log("no spell-check dictionary found; spell checking disabled");
                None
            }
        };

        let mut checker = Self::new(dictionary, personal_path);
        if let Some(path) = checker.personal_path.clone() {
            match load_personal_words(&path) {
                Ok(personal_words) => checker.personal_words = personal_words,
                Err(error) => log(&format!("{error}; starting with an empty personal dictionary")),
            }
        }
        checker
    }

    pub fn is_enabled(&self) -> bool {
        self.dictionary.is_some()
    }

    fn is_personal(&self, word: &str) -> bool {
        self.personal_words.contains(word) || self.personal_words.contains(&word.to_lowercase())
    }

    fn is_checkable(word: &str) -> bool {
        word.chars().count() >= 2 && !word.chars().any(|c| c.is_ascii_digit())
    }

    pub fn is_misspelled(&self, word: &str) -> bool {
        let Some(dictionary) = &self.dictionary else {
            return false;
        };
        Self::is_checkable(word) && !self.is_personal(word) && !dictionary.check(word)
    }

    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let Some(dictionary) = &self.dictionary else {
            return Vec::new();
        };
        let mut suggestions = Vec::new();
        dictionary.suggest(word, &mut suggestions);
        suggestions.dedup();
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// `None` when the word is not worth checking (empty, disabled checker).
    pub fn check(&self, word: &str) -> Option<SpellingResult> {
        let word = word.trim();
        if word.is_empty() || !self.is_enabled() {
            return None;
        }

        if self.is_misspelled(word) {
            Some(SpellingResult {
                misspelled_word: Some(word.to_string()),
                suggestions: self.suggestions(word),
            })
        } else {
            Some(SpellingResult {
                misspelled_word: None,
                suggestions: Vec::new(),
            })
        }
    }

    pub fn add_word(&mut self, word: &str) -> Result<(), String> {
        let word = word.trim();
        if word.is_empty() {
            return Err("Cannot add an empty word to the dictionary.".to_string());
        }
        if !self.personal_words.insert(word.to_string()) {
            return Ok(());
        }

        match &self.personal_path {
            Some(path) => {
                write_personal_words(path, &self.personal_words).map_err(|error| error.to_string())
            }
            None => Ok(()),
        }
    }
}
