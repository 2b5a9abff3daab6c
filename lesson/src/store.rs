//! Lesson persistence: the local snapshot plus JSON import/export.
//!
//! The store keeps the in-memory lesson authoritative. The snapshot is a
//! best-effort mirror written after every change; a failed write is logged
//! and reported but never rolls the document back.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::SNAPSHOT_KEY;
use crate::doc::Lesson;

/// Errors from loading, saving, importing, or exporting a lesson.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("lesson serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("import failed: {0}")]
    Import(#[source] serde_json::Error),
    #[error("imported lesson has no slides")]
    EmptyLesson,
}

// =============================================================================
// BACKENDS
// =============================================================================

/// Key/value storage for serialized snapshots.
pub trait SnapshotBackend {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the underlying i/o failure.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns the underlying i/o failure.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &target)
    }
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose writes always fail, for exercising save errors.
    #[must_use]
    pub fn failing() -> Self {
        Self { entries: HashMap::new(), fail_writes: true }
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("writes disabled"));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// STORE
// =============================================================================

/// The current lesson and its snapshot.
#[derive(Debug)]
pub struct LessonStore<B: SnapshotBackend> {
    backend: B,
    lesson: Lesson,
}

impl<B: SnapshotBackend> LessonStore<B> {
    /// Open the store, restoring the snapshot when one is readable.
    ///
    /// A missing snapshot yields the starter lesson. An unreadable or corrupt
    /// one, or one without slides, is logged and also yields the starter
    /// lesson.
    pub fn load(backend: B) -> Self {
        let lesson = match backend.read(SNAPSHOT_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<Lesson>(&text) {
                Ok(lesson) if lesson.slides.is_empty() => {
                    tracing::warn!(lesson = %lesson.id, "snapshot has no slides; starting from the default lesson");
                    Lesson::starter()
                }
                Ok(lesson) => {
                    tracing::debug!(lesson = %lesson.id, slides = lesson.slides.len(), "snapshot restored");
                    lesson
                }
                Err(err) => {
                    tracing::warn!(error = %err, "snapshot corrupt; starting from the default lesson");
                    Lesson::starter()
                }
            },
            Ok(None) => {
                tracing::debug!("no snapshot; starting from the default lesson");
                Lesson::starter()
            }
            Err(err) => {
                tracing::warn!(error = %err, "snapshot unreadable; starting from the default lesson");
                Lesson::starter()
            }
        };
        Self { backend, lesson }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Swap in a new document and save it.
    ///
    /// # Errors
    ///
    /// Returns the save failure; the new document is kept regardless.
    pub fn replace(&mut self, lesson: Lesson) -> Result<(), StoreError> {
        self.lesson = lesson;
        self.save()
    }

    /// Write the current lesson to the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` or `Io` failures after logging them.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let result = serde_json::to_string(&self.lesson)
            .map_err(StoreError::Serialize)
            .and_then(|text| self.backend.write(SNAPSHOT_KEY, &text).map_err(StoreError::from));
        match &result {
            Ok(()) => tracing::debug!(lesson = %self.lesson.id, "snapshot saved"),
            Err(err) => tracing::warn!(error = %err, "snapshot save failed"),
        }
        result
    }

    /// Replace the document with a fresh starter lesson.
    ///
    /// # Errors
    ///
    /// Returns the save failure.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        tracing::info!(lesson = %self.lesson.id, "lesson reset");
        self.replace(Lesson::starter())
    }

    /// Pretty-printed JSON of the current lesson.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` when the document cannot be encoded.
    pub fn export_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.lesson).map_err(StoreError::Serialize)
    }

    /// Suggested export file name: `<slug>.json`.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!("{}.json", slugify(&self.lesson.title))
    }

    /// Replace the document with the lesson encoded in `text`.
    ///
    /// # Errors
    ///
    /// Returns `Import` when `text` is not a lesson and `EmptyLesson` when it
    /// has no slides; the current document is untouched in both cases. A
    /// failed save after a successful import is logged only.
    pub fn import_json(&mut self, text: &str) -> Result<&Lesson, StoreError> {
        let lesson: Lesson = serde_json::from_str(text).map_err(StoreError::Import)?;
        if lesson.slides.is_empty() {
            tracing::info!(lesson = %lesson.id, "import rejected: no slides");
            return Err(StoreError::EmptyLesson);
        }
        tracing::info!(lesson = %lesson.id, slides = lesson.slides.len(), "lesson imported");
        self.lesson = lesson;
        if let Err(err) = self.save() {
            tracing::debug!(error = %err, "imported lesson kept in memory only");
        }
        Ok(&self.lesson)
    }
}

/// Lowercase `title` and collapse whitespace runs into `-`. An empty title
/// becomes `lesson`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let slug = title.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>().join("-");
    if slug.is_empty() { "lesson".into() } else { slug }
}
