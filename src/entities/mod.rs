//! Entity type definitions
//!
//! - [`ProjectRecord`] - A stored student project
//! - [`ProjectDraft`] - The editable form of a project, with or without an id

pub mod project;

pub use project::{ProjectDraft, ProjectRecord, ValidationError};
