//! Core module - collection state, persistence, and supporting types

pub mod config;
pub mod export;
pub mod identity;
pub mod persistence;
pub mod repository;
pub mod search;
pub mod session;
pub mod shortid;
pub mod storage;
pub mod theme;

pub use config::{Config, ConfigError};
pub use export::ExportError;
pub use identity::{IdGenerator, ProjectId};
pub use persistence::{load_projects, save_projects, PROJECTS_KEY};
pub use repository::{FilteredView, ProjectRepository, SaveOutcome};
pub use search::{SearchFilter, SearchOutcome};
pub use session::EditSession;
pub use shortid::ShortIdIndex;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use theme::Theme;
