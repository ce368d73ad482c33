//! Page URL query state.
//!
//! The query string is the shareable record of the active filters. It is
//! held as an ordered list of pairs and only changed through [`QueryParams::patch`].

use url::{form_urlencoded, Url};

use crate::error::{DirectoryError, Result};

pub const SEARCH: &str = "search";
pub const MODE: &str = "mode";
pub const SPECIALTIES: &str = "specialties";
pub const SORT: &str = "sort";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

/// A set of parameter updates merged into [`QueryParams`]. Keys it does not
/// mention are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPatch {
    entries: Vec<(String, ParamValue)>,
}

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((key.into(), ParamValue::Scalar(value.into())));
        self
    }

    pub fn list(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.entries.push((key.into(), ParamValue::List(values)));
        self
    }

    pub fn remove(self, key: impl Into<String>) -> Self {
        self.list(key, Vec::new())
    }

    /// Appends `other`'s entries; later entries win when keys repeat.
    pub fn merge(mut self, other: QueryPatch) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, ParamValue)] {
        &self.entries
    }
}

impl QueryParams {
    /// Parses a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            pairs: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    pub fn from_url_str(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|err| DirectoryError::invalid_url(input, err))?;
        Ok(Self::from_url(&url))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Splits a comma-joined value, dropping empty segments.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|raw| {
                raw.split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets `key`, replacing the first occurrence in place and dropping any
    /// duplicates; appends when absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Merges `patch`: lists are comma-joined, or remove the key when empty;
    /// scalars overwrite.
    pub fn patch(&mut self, patch: &QueryPatch) {
        for (key, value) in patch.entries() {
            match value {
                ParamValue::List(values) if values.is_empty() => self.remove(key),
                ParamValue::List(values) => self.set(key, values.join(",")),
                ParamValue::Scalar(value) => self.set(key, value.clone()),
            }
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Returns `base` with its query replaced by these parameters.
    pub fn apply_to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if self.pairs.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.to_query_string()));
        }
        url
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
