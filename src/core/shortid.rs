//! Short ID system for easier record selection
//!
//! `list` and `search` number the records they print as `@1`, `@2`, ... and
//! remember that numbering so later commands can refer to a record by it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::identity::ProjectId;

/// Index file name, kept next to the storage file
pub const INDEX_FILE: &str = "shortids.json";

/// A mapping of short IDs (@N) to full project IDs
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShortIdIndex {
    /// Maps short number to full project ID string
    entries: HashMap<u32, String>,
    /// Maps full project ID to short number (reverse lookup)
    #[serde(skip)]
    reverse: HashMap<String, u32>,
    /// Next available short ID
    next_id: u32,
}

impl ShortIdIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            reverse: HashMap::new(),
            next_id: 1,
        }
    }

    /// Where the index for a given storage file lives
    pub fn path_for_store(store: &Path) -> PathBuf {
        store.with_file_name(INDEX_FILE)
    }

    /// Load the index, or create empty if not found
    pub fn load(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(mut index) = serde_json::from_str::<ShortIdIndex>(&content) {
                index.reverse = index.entries.iter().map(|(k, v)| (v.clone(), *k)).collect();
                return index;
            }
        }
        Self::new()
    }

    /// Save the index
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }

    /// Clear and rebuild the index in display order
    pub fn rebuild<'a>(&mut self, ids: impl IntoIterator<Item = &'a ProjectId>) {
        self.entries.clear();
        self.reverse.clear();
        self.next_id = 1;

        for id in ids {
            self.add(id.as_str().to_string());
        }
    }

    /// Add a project ID and return its short ID
    pub fn add(&mut self, project_id: String) -> u32 {
        if let Some(&short_id) = self.reverse.get(&project_id) {
            return short_id;
        }

        let short_id = self.next_id;
        self.next_id += 1;
        self.entries.insert(short_id, project_id.clone());
        self.reverse.insert(project_id, short_id);
        short_id
    }

    /// Resolve a short ID reference to a full project ID
    ///
    /// Accepts `@N` only; anything else is passed through unchanged so it
    /// can be matched as a full or partial ID. Bare numbers are passed
    /// through too, since legacy IDs are all digits.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let Some(num_str) = reference.strip_prefix('@') else {
            return Some(reference.to_string());
        };

        num_str
            .parse::<u32>()
            .ok()
            .and_then(|n| self.entries.get(&n).cloned())
    }

    /// Get the short ID for a full project ID
    pub fn get_short_id(&self, project_id: &ProjectId) -> Option<u32> {
        self.reverse.get(project_id.as_str()).copied()
    }

    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
