//! Light/dark theme preference

use std::fmt;

use crate::core::storage::{Storage, StorageError};

/// Storage key holding the preference as `"true"` or `"false"`
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the stored preference; anything but `"true"` is light
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get(DARK_MODE_KEY).as_deref() {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(self, storage: &mut impl Storage) -> Result<(), StorageError> {
        storage.set(DARK_MODE_KEY, self.is_dark().to_string())
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
