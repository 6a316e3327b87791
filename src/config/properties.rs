//! Minimal reader for `.properties` configuration files.
//!
//! Supported syntax: `key=value`, `key: value` or `key value` (the key ends
//! at the first `=`, `:` or whitespace), comment lines starting with `#` or
//! `!`, and blank lines. Keys and values are trimmed. Escapes and line continuations
//! are not interpreted.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, WordscopeError};

/// Parsed key/value pairs from a properties file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse properties text. Later duplicates override earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = match line.find(|c: char| c == '=' || c == ':' || c.is_whitespace())
            {
                Some(split) => {
                    let rest = line[split..].trim_start();
                    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                    (&line[..split], rest.trim())
                }
                None => (line, ""),
            };
            entries.insert(key.to_string(), value.to_string());
        }

        Properties { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse an optional value, failing if present but malformed.
    pub fn parse_value<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw.parse::<T>().map(Some).map_err(|e| {
                WordscopeError::config_load(format!("{key}: invalid value {raw:?}: {e}"))
            }),
        }
    }

    /// Parse a required value.
    pub fn require<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse_value(key)?
            .ok_or_else(|| WordscopeError::config_load(format!("missing required key {key}")))
    }
}
