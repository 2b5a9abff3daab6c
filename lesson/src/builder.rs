//! Authoring session: the store plus selection state.
//!
//! Every intent applies one document operation, saves the snapshot, and
//! updates the slide and component selection. Slide-level and file-level
//! intents answer with a [`Notice`] for the user.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use crate::doc::{DocError, Lesson, MetadataPatch, Props, Slide};
use crate::editor::{self, Edit, EditError};
use crate::kind::ComponentType;
use crate::store::{LessonStore, SnapshotBackend, StoreError};

/// Errors from component-level builder intents.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error(transparent)]
    Doc(#[from] DocError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A short user-facing message about the outcome of an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Default }
    }

    fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), severity: Severity::Destructive }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Result of an export: the suggested file name and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub json: String,
    pub notice: Notice,
}

/// Authoring state over a [`LessonStore`].
#[derive(Debug)]
pub struct LessonBuilder<B: SnapshotBackend> {
    store: LessonStore<B>,
    current_slide: usize,
    editing: Option<String>,
}

impl<B: SnapshotBackend> LessonBuilder<B> {
    #[must_use]
    pub fn new(store: LessonStore<B>) -> Self {
        Self { store, current_slide: 0, editing: None }
    }

    /// Write `lesson` through the store. The in-memory document wins even
    /// when the snapshot write fails.
    fn commit(&mut self, lesson: Lesson) {
        if let Err(err) = self.store.replace(lesson.touch()) {
            tracing::debug!(error = %err, "change kept in memory only");
        }
        self.current_slide = self.store.lesson().clamp_index(self.current_slide);
    }

    // --- Slides ---

    /// Append a slide and select it.
    pub fn add_slide(&mut self) -> Notice {
        let next = self.lesson().add_slide();
        let index = next.slides.len() - 1;
        let title = next.slides.get(index).map(|s| s.title.clone()).unwrap_or_default();
        self.commit(next);
        self.current_slide = index;
        tracing::debug!(slide = index, "slide added");
        Notice::info("Slide added", format!("Added new slide: {title}"))
    }

    /// Delete slide `index`. The last remaining slide is never deleted.
    pub fn delete_slide(&mut self, index: usize) -> Notice {
        let title = self.lesson().slide(index).map(|s| s.title.clone()).unwrap_or_default();
        match self.lesson().delete_slide(index) {
            Ok(next) => {
                self.commit(next);
                if self.current_slide >= index && self.current_slide > 0 {
                    self.current_slide -= 1;
                }
                if self.editing.as_deref().is_some_and(|id| self.lesson().component(id).is_none()) {
                    self.editing = None;
                }
                tracing::debug!(slide = index, "slide deleted");
                Notice::info("Slide deleted", format!("Deleted slide: {title}"))
            }
            Err(DocError::LastSlide) => {
                tracing::info!(slide = index, "refused to delete the last slide");
                Notice::destructive("Cannot delete slide", "A lesson must have at least one slide")
            }
            Err(err) => {
                tracing::info!(slide = index, error = %err, "slide delete rejected");
                Notice::destructive("Cannot delete slide", err.to_string())
            }
        }
    }

    /// Move slide `from` to `to` and select it at its new position.
    pub fn reorder_slides(&mut self, from: usize, to: usize) {
        let next = self.lesson().reorder_slides(from, to);
        let destination = next.clamp_index(to);
        self.commit(next);
        self.current_slide = destination;
    }

    /// Rename slide `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a missing slide.
    pub fn rename_slide(&mut self, index: usize, title: &str) -> Result<(), BuilderError> {
        let slide = self.slide_at(index)?.with_title(title);
        let next = self.lesson().update_slide(index, slide);
        self.commit(next);
        Ok(())
    }

    /// Make slide `index` current. Returns `false` when out of range.
    pub fn select_slide(&mut self, index: usize) -> bool {
        if self.lesson().slide(index).is_none() {
            return false;
        }
        self.current_slide = index;
        true
    }

    pub fn update_metadata(&mut self, patch: &MetadataPatch) {
        if patch.is_empty() {
            return;
        }
        let next = self.lesson().update_metadata(patch);
        self.commit(next);
    }

    // --- Components ---

    /// Add a component of `kind` to slide `slide` (the current slide when
    /// `None`) and select it for editing. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownComponentType` or `IndexOutOfRange`.
    pub fn add_component(&mut self, kind: &ComponentType, overrides: Props, slide: Option<usize>) -> Result<String, BuilderError> {
        let index = slide.unwrap_or(self.current_slide);
        let (updated, id) = self.slide_at(index)?.add_component(kind, overrides)?;
        let next = self.lesson().update_slide(index, updated);
        self.commit(next);
        self.current_slide = index;
        self.editing = Some(id.clone());
        tracing::debug!(slide = index, component = %id, kind = %kind, "component added");
        Ok(id)
    }

    /// Apply one property edit to component `id`, wherever it lives.
    ///
    /// # Errors
    ///
    /// Returns the editor rejection; the document is unchanged.
    pub fn edit_component(&mut self, id: &str, name: &str, edit: &Edit) -> Result<(), BuilderError> {
        let (index, _) = self.locate(id)?;
        let updated = editor::edit_component(self.slide_at(index)?, id, name, edit)?;
        let next = self.lesson().update_slide(index, updated);
        self.commit(next);
        Ok(())
    }

    /// Remove component `id`, clearing the edit selection if it was selected.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound`.
    pub fn delete_component(&mut self, id: &str) -> Result<(), BuilderError> {
        let (index, _) = self.locate(id)?;
        let updated = self.slide_at(index)?.delete_component(id);
        let next = self.lesson().update_slide(index, updated);
        self.commit(next);
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        tracing::debug!(component = id, "component deleted");
        Ok(())
    }

    /// Reorder components within slide `slide` (the current slide when `None`).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a missing slide.
    pub fn reorder_components(&mut self, slide: Option<usize>, from: usize, to: usize) -> Result<(), BuilderError> {
        let index = slide.unwrap_or(self.current_slide);
        let updated = self.slide_at(index)?.reorder_components(from, to);
        let next = self.lesson().update_slide(index, updated);
        self.commit(next);
        Ok(())
    }

    /// Select component `id` for editing, or clear the selection.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` for an unknown id.
    pub fn select_component(&mut self, id: Option<&str>) -> Result<(), BuilderError> {
        match id {
            Some(id) => {
                let (index, _) = self.locate(id)?;
                self.current_slide = index;
                self.editing = Some(id.to_owned());
            }
            None => self.editing = None,
        }
        Ok(())
    }

    // --- Files ---

    /// Serialize the lesson for download.
    ///
    /// # Errors
    ///
    /// Returns the serialization failure.
    pub fn export(&self) -> Result<Export, BuilderError> {
        let json = self.store.export_json()?;
        let file_name = self.store.export_file_name();
        tracing::info!(file = %file_name, "lesson exported");
        let notice = Notice::info("Lesson exported", format!("Saved as {file_name}"));
        Ok(Export { file_name, json, notice })
    }

    /// Replace the lesson with an imported one and return to the first slide.
    pub fn import(&mut self, text: &str) -> Notice {
        match self.store.import_json(text) {
            Ok(lesson) => {
                let notice = Notice::info("Lesson imported", format!("Loaded lesson: {}", lesson.title));
                self.current_slide = 0;
                self.editing = None;
                notice
            }
            Err(err) => {
                tracing::info!(error = %err, "import rejected");
                Notice::destructive("Import failed", "The selected file is not a valid lesson file")
            }
        }
    }

    /// Start over from the starter lesson.
    pub fn reset(&mut self) -> Notice {
        if let Err(err) = self.store.reset() {
            tracing::debug!(error = %err, "reset kept in memory only");
        }
        self.current_slide = 0;
        self.editing = None;
        Notice::info("Lesson reset", "Started a new lesson")
    }

    // --- Queries ---

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        self.store.lesson()
    }

    #[must_use]
    pub fn store(&self) -> &LessonStore<B> {
        &self.store
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.lesson().slide(self.current_slide)
    }

    /// Id of the component selected for editing.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    fn slide_at(&self, index: usize) -> Result<&Slide, DocError> {
        let len = self.lesson().slides.len();
        self.lesson().slide(index).ok_or(DocError::IndexOutOfRange { index, len })
    }

    fn locate(&self, id: &str) -> Result<(usize, usize), DocError> {
        self.lesson()
            .locate_component(id)
            .ok_or_else(|| DocError::ComponentNotFound(id.to_owned()))
    }
}
