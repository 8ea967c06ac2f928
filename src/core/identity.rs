//! Project identity using monotonic ULIDs

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::{Generator, Ulid};

/// Opaque, unique identifier of a project record
///
/// Ids read back from storage are accepted verbatim, so records created by
/// older builds (millisecond timestamps) stay addressable. New ids are
/// always ULIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this id starts with the given (case-insensitive) prefix
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty()
            && self
                .0
                .to_ascii_uppercase()
                .starts_with(&prefix.to_ascii_uppercase())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Issues ids that are strictly increasing within a process
///
/// Two saves inside the same millisecond still receive distinct ids, since
/// the generator bumps the random part instead of reusing the timestamp.
pub struct IdGenerator {
    inner: Generator,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Produce an id for which `taken` returns false
    pub fn next_id(&mut self, taken: impl Fn(&ProjectId) -> bool) -> ProjectId {
        loop {
            // The monotonic generator only fails when the random part overflows
            // within one millisecond; a fresh ULID is fine in that case.
            let ulid = self.inner.generate().unwrap_or_else(|_| Ulid::new());
            let id = ProjectId(ulid.to_string());
            if !taken(&id) {
                return id;
            }
        }
    }
}
