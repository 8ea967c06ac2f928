//! Project record entity type

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::identity::ProjectId;

/// A student project as stored in the collection
///
/// Every field is plain text. Optional fields that were never filled in are
/// stored as empty strings rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,

    pub student_name: String,

    pub project_title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Calendar date as `YYYY-MM-DD`, or empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl ProjectRecord {
    /// Case-insensitive substring match against the student name or the title
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.student_name.to_lowercase().contains(needle_lower)
            || self.project_title.to_lowercase().contains(needle_lower)
    }
}

/// The editable form behind "add" and "edit"
///
/// A draft without an id is inserted as a new record when saved; a draft
/// carrying an id replaces the record with that id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub id: Option<ProjectId>,
    pub student_name: String,
    pub project_title: String,
    pub description: String,
    pub date: String,
    pub link: String,
}

impl ProjectDraft {
    /// Blank draft for a new record
    pub fn new(student_name: impl Into<String>, project_title: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            project_title: project_title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.student_name.trim().is_empty() {
            return Err(ValidationError::MissingStudentName);
        }
        if self.project_title.trim().is_empty() {
            return Err(ValidationError::MissingProjectTitle);
        }
        Ok(())
    }

    /// Turn the draft into a record under the given id
    pub fn into_record(self, id: ProjectId) -> ProjectRecord {
        ProjectRecord {
            id,
            student_name: self.student_name,
            project_title: self.project_title,
            description: self.description,
            date: self.date,
            link: self.link,
        }
    }
}

impl From<&ProjectRecord> for ProjectDraft {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            student_name: record.student_name.clone(),
            project_title: record.project_title.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            link: record.link.clone(),
        }
    }
}

/// Reasons a draft cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("student name is required")]
    MissingStudentName,

    #[error("project title is required")]
    MissingProjectTitle,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
