//! Project repository: the owned collection and everything derived from it
//!
//! The repository is the only owner of the collection. The filtered view and
//! the edit draft are derived from it on demand, and every successful
//! mutation is followed by an explicit write of the full collection.

use std::collections::HashSet;

use crate::core::identity::{IdGenerator, ProjectId};
use crate::core::persistence::{load_projects, save_projects};
use crate::core::search::{SearchFilter, SearchOutcome};
use crate::core::session::EditSession;
use crate::core::storage::{Storage, StorageError};
use crate::entities::project::{ProjectDraft, ProjectRecord, ValidationError};

/// What a successful `save` did to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was appended under this id
    Created(ProjectId),
    /// The record with this id was replaced in place
    Updated(ProjectId),
    /// The draft named an id that is not in the collection; nothing changed
    Unmatched(ProjectId),
}

impl SaveOutcome {
    pub fn id(&self) -> &ProjectId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) | SaveOutcome::Unmatched(id) => id,
        }
    }
}

/// The records currently on display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredView<'a> {
    /// No search is active: the whole collection
    All(&'a [ProjectRecord]),
    /// A search is active: the matching records, possibly none
    Matches(Vec<&'a ProjectRecord>),
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> Vec<&'a ProjectRecord> {
        match self {
            FilteredView::All(all) => all.iter().collect(),
            FilteredView::Matches(found) => found.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FilteredView::All(all) => all.len(),
            FilteredView::Matches(found) => found.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, FilteredView::Matches(_))
    }
}

/// Owner of the project collection
pub struct ProjectRepository<S: Storage> {
    storage: S,
    projects: Vec<ProjectRecord>,
    search: SearchFilter,
    session: EditSession,
    ids: IdGenerator,
    write_error: Option<StorageError>,
}

impl<S: Storage> ProjectRepository<S> {
    /// Load the collection from `storage`
    ///
    /// If stored data repeats an id, every later record with that id is
    /// given a fresh one. The new ids reach storage with the next write.
    pub fn initialize(storage: S) -> Self {
        let loaded = load_projects(&storage);
        let mut taken: HashSet<ProjectId> = loaded.iter().map(|p| p.id.clone()).collect();
        let mut seen = HashSet::new();
        let mut ids = IdGenerator::new();

        let projects = loaded
            .into_iter()
            .map(|mut project| {
                if !seen.insert(project.id.clone()) {
                    project.id = ids.next_id(|candidate| taken.contains(candidate));
                    taken.insert(project.id.clone());
                    seen.insert(project.id.clone());
                }
                project
            })
            .collect();

        Self {
            storage,
            projects,
            search: SearchFilter::new(),
            session: EditSession::Idle,
            ids,
            write_error: None,
        }
    }

    /// The canonical collection in insertion order
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Insert or update a record from `draft`
    ///
    /// Drafts missing a student name or title are rejected before anything
    /// changes. A draft naming an unknown id is dropped without a write.
    /// Either way a successful call ends the edit session.
    pub fn save(&mut self, draft: ProjectDraft) -> Result<SaveOutcome, ValidationError> {
        draft.validate()?;
        self.session.cancel();

        let outcome = match draft.id.clone() {
            None => {
                let projects = &self.projects;
                let id = self.ids.next_id(|candidate| projects.iter().any(|p| &p.id == candidate));
                self.projects.push(draft.into_record(id.clone()));
                SaveOutcome::Created(id)
            }
            Some(id) => match self.projects.iter_mut().find(|p| p.id == id) {
                Some(slot) => {
                    *slot = draft.into_record(id.clone());
                    SaveOutcome::Updated(id)
                }
                None => return Ok(SaveOutcome::Unmatched(id)),
            },
        };

        self.persist();
        Ok(outcome)
    }

    /// Remove the record with `id`, returning it if it existed
    pub fn delete(&mut self, id: &ProjectId) -> Option<ProjectRecord> {
        let index = self.projects.iter().position(|p| &p.id == id)?;
        let removed = self.projects.remove(index);
        self.persist();
        Some(removed)
    }

    /// Activate a search for `query` and return its outcome
    pub fn submit_search(&mut self, query: impl Into<String>) -> SearchOutcome<'_> {
        self.search.set_query(query);
        self.search.apply(&self.projects)
    }

    /// React to the search text changing
    ///
    /// Blank text drops the active filter straight away; anything else only
    /// takes effect once submitted.
    pub fn change_search(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.search.clear();
        }
    }

    /// The collection as currently filtered
    pub fn view(&self) -> FilteredView<'_> {
        match self.search.apply(&self.projects) {
            SearchOutcome::Inactive => FilteredView::All(&self.projects),
            SearchOutcome::Matches(found) => FilteredView::Matches(found),
        }
    }

    /// Start editing the record with `id`
    ///
    /// Returns `None` (leaving any current draft alone) if there is no such
    /// record.
    pub fn begin_edit(&mut self, id: &ProjectId) -> Option<&mut ProjectDraft> {
        let record = self.projects.iter().find(|p| &p.id == id)?;
        self.session.begin(record);
        self.session.draft_mut()
    }

    pub fn draft(&self) -> Option<&ProjectDraft> {
        self.session.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Save the active draft
    ///
    /// Returns `None` when no edit is in progress. A draft that fails
    /// validation stays in the session so it can be corrected.
    pub fn commit_edit(&mut self) -> Option<Result<SaveOutcome, ValidationError>> {
        let draft = self.session.draft()?.clone();
        Some(self.save(draft))
    }

    /// The last failed write, if any, clearing it
    pub fn take_write_error(&mut self) -> Option<StorageError> {
        self.write_error.take()
    }

    fn persist(&mut self) {
        if let Err(e) = save_projects(&mut self.storage, &self.projects) {
            self.write_error = Some(e);
        }
    }
}
