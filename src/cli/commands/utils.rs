//! Shared utilities for CLI commands
//!
//! Every command opens the storage file through [`Workspace`], which applies
//! the configuration layers and the global options in one place.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::format_short_id;
use crate::cli::output::Reporter;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::ProjectId;
use crate::core::repository::ProjectRepository;
use crate::core::shortid::ShortIdIndex;
use crate::core::storage::{FileStorage, Storage};
use crate::core::Config;

/// Resolved settings for one command invocation
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: Config,
    pub store_path: PathBuf,
    pub format: OutputFormat,
    pub reporter: Reporter,
}

impl Workspace {
    /// Apply config file, environment and command-line options
    pub fn open(global: &GlobalOpts) -> Self {
        let mut config = Config::load();
        if let Some(ref store) = global.store {
            config.store = Some(store.clone());
        }

        let reporter = Reporter::new(global);
        let format = match global.format {
            Some(f) => f,
            None => match config.default_format.as_deref() {
                Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
                    reporter.warn(format!(
                        "Unknown default_format '{}' in config, using auto",
                        name
                    ));
                    OutputFormat::Auto
                }),
                None => OutputFormat::Auto,
            },
        };

        let store_path = config.store_path();
        reporter.detail(format!("Storage file: {}", store_path.display()));

        Self {
            config,
            store_path,
            format,
            reporter,
        }
    }

    /// Load the collection from the storage file
    pub fn repository(&self) -> ProjectRepository<FileStorage> {
        let repo = ProjectRepository::initialize(FileStorage::open(&self.store_path));
        self.reporter
            .detail(format!("Loaded {} project(s)", repo.len()));
        repo
    }

    pub fn short_ids_path(&self) -> PathBuf {
        ShortIdIndex::path_for_store(&self.store_path)
    }

    pub fn short_ids(&self) -> ShortIdIndex {
        ShortIdIndex::load(&self.short_ids_path())
    }

    /// Warn if the last mutation could not be written
    pub fn report_write_error<S: Storage>(&self, repo: &mut ProjectRepository<S>) {
        if let Some(e) = repo.take_write_error() {
            self.reporter
                .warn(format!("Changes were not saved to storage: {}", e));
        }
    }

    /// Resolve a user-supplied reference to a project in the collection
    ///
    /// Accepts `@N` short IDs, full IDs, and unique ID prefixes.
    pub fn resolve<S: Storage>(
        &self,
        repo: &ProjectRepository<S>,
        reference: &str,
    ) -> Result<ProjectId> {
        self.lookup(repo, reference)?.ok_or_else(|| {
            miette::miette!("No project found matching '{}'", reference.trim())
        })
    }

    /// Like [`Workspace::resolve`], but a reference that matches nothing is
    /// `Ok(None)` rather than an error
    pub fn lookup<S: Storage>(
        &self,
        repo: &ProjectRepository<S>,
        reference: &str,
    ) -> Result<Option<ProjectId>> {
        let reference = reference.trim();
        let resolved = self.short_ids().resolve(reference).ok_or_else(|| {
            miette::miette!(
                "Unknown short ID '{}'. Run {} to refresh the numbering.",
                reference,
                style("portfolio list").yellow()
            )
        })?;

        let exact = ProjectId::new(resolved.as_str());
        if repo.find(&exact).is_some() {
            return Ok(Some(exact));
        }

        let matches: Vec<&ProjectId> = repo
            .projects()
            .iter()
            .map(|p| &p.id)
            .filter(|id| id.matches_prefix(&resolved))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some((*only).clone())),
            many => {
                self.reporter.warn("Multiple matches found:");
                for id in many {
                    if let Some(p) = repo.find(id) {
                        eprintln!(
                            "  {} - {} ({})",
                            format_short_id(id),
                            p.project_title,
                            p.student_name
                        );
                    }
                }
                Err(miette::miette!(
                    "Ambiguous reference '{}'. Please be more specific.",
                    reference
                ))
            }
        }
    }
}
