use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{initials_defaults, NAME_SEPARATORS};


/// Options controlling how a name is abbreviated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialOptions {
    /// Maximum number of characters kept; `None` keeps every initial.
    pub max_length: Option<usize>,
    pub uppercase: bool,
    /// Returned verbatim when no name was supplied.
    pub fallback: String,
}

impl Default for InitialOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            uppercase: initials_defaults::UPPERCASE,
            fallback: initials_defaults::FALLBACK.to_string(),
        }
    }
}

impl InitialOptions {
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

/// A name as received at the API boundary, which may not be text at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInput<'a> {
    Text(&'a str),
    NotText,
}

impl<'a> From<&'a str> for NameInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for NameInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for NameInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::NotText, Self::Text)
    }
}

impl<'a> From<&'a serde_json::Value> for NameInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            _ => Self::NotText,
        }
    }
}

/// Abbreviates `name` to the first Latin letter of each of its words.
///
/// Hyphens, periods and apostrophes split words; any other character that
/// is not an ASCII letter is dropped before splitting. Missing or blank
/// names yield `options.fallback`. A name with no Latin letters at all
/// yields an empty string.
pub fn extract_initials<'a>(name: impl Into<NameInput<'a>>, options: &InitialOptions) -> String {
    let NameInput::Text(name) = name.into() else {
        return options.fallback.clone();
    };
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return options.fallback.clone();
    }

    let normalized: String = trimmed
        .chars()
        .map(|ch| if NAME_SEPARATORS.contains(&ch) { ' ' } else { ch })
        .filter(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
        .collect();

    let limit = options.max_length.unwrap_or(usize::MAX);
    let mut initials = String::new();
    for word in normalized.split_whitespace() {
        // Words hold ASCII letters only, so byte length is char count.
        if initials.len() >= limit {
            break;
        }
        if let Some(ch) = word.chars().next() {
            initials.push(ch);
        }
    }
    if options.uppercase {
        initials.make_ascii_uppercase();
    }
    initials
}
