// src/casing.rs

//! Case conversion of imported member names
//!
//! A member name is split into words at separators, lower-to-upper
//! transitions, letter/digit transitions and the end of an acronym
//! (`XMLHttp` splits as `XML` + `Http`), then re-joined in the
//! requested style:
//!
//! - `camel`: `CamelMe` -> `camelMe`
//! - `kebab`: `KebabMe` -> `kebab-me`
//! - `snake`: `SnakeMe` -> `snake_me`

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Casing applied to a member name before path resolution
///
/// Config files and [`FromStr`] accept the same spellings: `none`, `camel`,
/// `kebab`, `snake`, their `*case` forms, in any letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Casing {
    /// Name is used as written
    #[default]
    None,
    Camel,
    Kebab,
    Snake,
}

impl Casing {
    /// Collapse the legacy boolean flags into one casing
    ///
    /// When several flags are set the first in camel, kebab, snake order wins.
    pub fn from_flags(camel: bool, kebab: bool, snake: bool) -> Self {
        if camel {
            Self::Camel
        } else if kebab {
            Self::Kebab
        } else if snake {
            Self::Snake
        } else {
            Self::None
        }
    }

    /// Apply this casing to a name
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::None => name.to_string(),
            Self::Camel => camel_case(name),
            Self::Kebab => join_lower(name, "-"),
            Self::Snake => join_lower(name, "_"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "camel" | "camelcase" => Ok(Self::Camel),
            "kebab" | "kebabcase" => Ok(Self::Kebab),
            "snake" | "snakecase" => Ok(Self::Snake),
            _ => Err(format!("unknown casing '{}'", s)),
        }
    }
}

impl TryFrom<String> for Casing {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Apply `casing` to a member name
pub fn apply_case(name: &str, casing: Casing) -> String {
    casing.apply(name)
}

/// Split a name into words
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().next_back() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_numeric() != c.is_numeric()
                || (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_lower(name: &str, sep: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in split_words(name).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
