//! Query string construction.
//!
//! Filters that the caller did not supply never reach the wire: no empty
//! strings, no `null` placeholders, no empty lists. List filters are sent
//! as repeated keys (`well_ids=a&well_ids=b`).

use chrono::NaiveDate;
use std::fmt::Display;

/// Ordered list of query pairs for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Always send `key`.
    pub(crate) fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Send `key` only when `value` is present and non-empty.
    pub(crate) fn opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.with(key, v),
            _ => self,
        }
    }

    /// Send `key` only when a number was supplied. Zero counts as absent.
    pub(crate) fn opt_num<N>(self, key: &'static str, value: Option<N>) -> Self
    where
        N: Display + Default + PartialEq,
    {
        match value {
            Some(v) if v != N::default() => self.with(key, v),
            _ => self,
        }
    }

    /// Send `key` as `YYYY-MM-DD` when a date was supplied.
    pub(crate) fn date(self, key: &'static str, value: Option<NaiveDate>) -> Self {
        match value {
            Some(d) => self.with(key, d.format("%Y-%m-%d")),
            None => self,
        }
    }

    /// Send one `key=value` pair per element; nothing when the list is empty.
    pub(crate) fn list<S: AsRef<str>>(mut self, key: &'static str, values: &[S]) -> Self {
        for value in values {
            self.pairs.push((key, value.as_ref().to_string()));
        }
        self
    }

    /// Send `key=True` when set, nothing otherwise.
    pub(crate) fn flag(self, key: &'static str, set: bool) -> Self {
        if set {
            self.with(key, flag_value(true))
        } else {
            self
        }
    }

    /// Always send `key` as `True` or `False`.
    pub(crate) fn bool(self, key: &'static str, value: bool) -> Self {
        self.with(key, flag_value(value))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

// Capitalised spelling is the one the API parses.
fn flag_value(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
