//! Loading and saving the project collection
//!
//! The whole collection lives under one storage key as a JSON array. Loads
//! fail soft; saves overwrite the previous array wholesale.

use serde_json::Value;

use crate::core::storage::{Storage, StorageError};
use crate::entities::project::ProjectRecord;

/// Storage key holding the serialized collection
pub const PROJECTS_KEY: &str = "projects";

/// Read the collection from storage
///
/// A missing key or a value that is not a JSON array yields an empty
/// collection. Array entries that are not project records are skipped.
pub fn load_projects(storage: &impl Storage) -> Vec<ProjectRecord> {
    let Some(raw) = storage.get(PROJECTS_KEY) else {
        return Vec::new();
    };

    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => entries,
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<ProjectRecord>(entry).ok())
        .collect()
}

/// Write the full collection to storage, replacing what was there
pub fn save_projects(
    storage: &mut impl Storage,
    projects: &[ProjectRecord],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(projects)?;
    storage.set(PROJECTS_KEY, json)
}
