//! Search filter over the project collection

use crate::entities::project::ProjectRecord;

/// Result of applying a query to the collection
///
/// `Inactive` and an empty `Matches` are different answers: the first means
/// there is nothing to filter by, the second means nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Inactive,
    Matches(Vec<&'a ProjectRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}

/// Filter `projects` by `query`
///
/// A query that is blank after trimming disables the filter. Otherwise the
/// untrimmed query is matched as a case-insensitive substring of the student
/// name or the project title.
pub fn apply<'a>(projects: &'a [ProjectRecord], query: &str) -> SearchOutcome<'a> {
    if query.trim().is_empty() {
        return SearchOutcome::Inactive;
    }

    let needle = query.to_lowercase();
    SearchOutcome::Matches(projects.iter().filter(|p| p.matches(&needle)).collect())
}

/// The current search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored query with the raw text
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn apply<'a>(&self, projects: &'a [ProjectRecord]) -> SearchOutcome<'a> {
        apply(projects, &self.query)
    }
}
