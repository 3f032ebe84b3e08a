//! Rules that keep windows out of tiling or decoration toggling.
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Window;
use crate::errors::Result;

/// A regular expression matched against the start of a string.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// # Errors
    ///
    /// Returns an error if `source` is not a valid regular expression.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{source})"))?;
        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(&source).map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IgnoreRule {
    pub name: Pattern,
    #[serde(default)]
    pub title: Option<Pattern>,
    /// Ignore unless the title matches.
    #[serde(default)]
    pub negate_title: bool,
}

impl IgnoreRule {
    /// # Errors
    ///
    /// Returns an error if either pattern fails to compile.
    pub fn new(name: &str, title: Option<&str>, negate_title: bool) -> Result<Self> {
        Ok(Self {
            name: Pattern::new(name)?,
            title: title.map(Pattern::new).transpose()?,
            negate_title,
        })
    }

    pub fn is_match(&self, name: &str, title: &str) -> bool {
        if !self.name.is_match(name) {
            return false;
        }
        self.title
            .as_ref()
            .map_or(true, |pattern| pattern.is_match(title) ^ self.negate_title)
    }
}

/// Returns true if any rule matches the window's name and title.
pub fn matches(rules: &[IgnoreRule], name: &str, title: &str) -> bool {
    match rules.iter().find(|rule| rule.is_match(name, title)) {
        Some(rule) => {
            tracing::trace!(name, title, rule = ?rule.name, "window matched ignore rule");
            true
        }
        None => {
            tracing::trace!(name, title, "window matched no ignore rule");
            false
        }
    }
}

/// Like [`matches`], but windows drawing their own decorations always match.
pub fn matches_decoration(rules: &[IgnoreRule], window: &Window) -> bool {
    if window.csd {
        tracing::trace!(name = %window.name, "window uses client side decorations");
        return true;
    }
    matches(rules, &window.name, &window.title)
}
