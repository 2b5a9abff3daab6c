//! Document model: lessons, slides, components, and their mutations.
//!
//! Every mutation takes the current value by reference and returns a new
//! value, leaving the input untouched. Callers own selection state (the
//! "current slide" index); the model only guarantees the structural
//! invariants:
//!
//! - a lesson always has at least one slide,
//! - reorders never drop or duplicate an entry,
//! - generated ids never collide within a process.
//!
//! The serialized shape (camelCase keys, `type` tag on components) is the
//! import/export and snapshot format.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::consts::DEFAULT_DURATION_MINUTES;
use crate::kind::ComponentType;
use crate::registry;

/// Property bag of a component.
pub type Props = Map<String, Value>;

/// Errors raised by document mutations that refuse to break an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocError {
    #[error("a lesson must have at least one slide")]
    LastSlide,
    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),
    #[error("component not found: {0}")]
    ComponentNotFound(String),
}

/// Generate a fresh identifier of the form `<prefix>-<uuid>`.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Current time as an RFC 3339 string.
#[must_use]
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// Remove the entry at `from` and reinsert it at `to`.
///
/// Both indices are clamped into `[0, len - 1]`; an empty slice yields an
/// empty vector.
#[must_use]
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    let Some(last) = out.len().checked_sub(1) else {
        return out;
    };
    let item = out.remove(from.min(last));
    out.insert(to.min(last), item);
    out
}

/// A single typed unit of content or interactivity placed on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier within the lesson.
    pub id: String,
    /// Type tag selecting definition, renderer, and player.
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Property map. Keys outside the type's schema are preserved.
    #[serde(default)]
    pub props: Props,
}

/// An ordered container of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Unique identifier within the lesson.
    pub id: String,
    /// Display title; may be empty.
    #[serde(default)]
    pub title: String,
    /// Components in display order.
    #[serde(default)]
    pub components: Vec<Component>,
}

/// The root document: metadata plus ordered slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Free-form difficulty label.
    #[serde(default)]
    pub level: String,
    /// Expected duration in minutes.
    #[serde(default = "default_duration")]
    pub duration: u32,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

/// Sparse metadata update. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl MetadataPatch {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.author.is_none()
            && self.level.is_none()
            && self.duration.is_none()
    }
}

// =============================================================================
// LESSON
// =============================================================================

impl Lesson {
    /// The starter lesson shown on first launch and after a reset.
    #[must_use]
    pub fn starter() -> Self {
        let now = now_timestamp();
        let heading = Component {
            id: new_id("component"),
            kind: ComponentType::Heading,
            props: object(json!({
                "content": "Welcome to your new lesson",
                "level": 1,
                "align": "center",
            })),
        };
        let paragraph = Component {
            id: new_id("component"),
            kind: ComponentType::Paragraph,
            props: object(json!({
                "content": "Start adding components to build your interactive lesson. \
                            Drag components from the left panel and drop them here.",
                "align": "center",
            })),
        };
        Self {
            id: new_id("lesson"),
            title: "Untitled Lesson".into(),
            description: "A new interactive lesson".into(),
            author: "Anonymous".into(),
            level: "Beginner".into(),
            duration: DEFAULT_DURATION_MINUTES,
            slides: vec![Slide {
                id: new_id("slide"),
                title: "Introduction".into(),
                components: vec![heading, paragraph],
            }],
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Slide at `index`, if any.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Clamp an externally tracked slide index into `[0, len - 1]`.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.slides.len().saturating_sub(1))
    }

    /// Locate a component anywhere in the lesson as `(slide, position)`.
    #[must_use]
    pub fn locate_component(&self, id: &str) -> Option<(usize, usize)> {
        self.slides.iter().enumerate().find_map(|(si, slide)| {
            slide.position_of(id).map(|ci| (si, ci))
        })
    }

    /// Find a component anywhere in the lesson.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        let (si, ci) = self.locate_component(id)?;
        self.slides.get(si).and_then(|s| s.components.get(ci))
    }

    /// Iterate every component of every slide in order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.slides.iter().flat_map(|s| s.components.iter())
    }

    /// Append a new empty slide titled after its 1-based position.
    #[must_use]
    pub fn add_slide(&self) -> Self {
        let mut next = self.clone();
        next.slides.push(Slide {
            id: new_id("slide"),
            title: format!("Slide {}", self.slides.len() + 1),
            components: Vec::new(),
        });
        next
    }

    /// Remove the slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LastSlide` when only one slide remains and `IndexOutOfRange`
    /// when `index` does not name a slide.
    pub fn delete_slide(&self, index: usize) -> Result<Self, DocError> {
        if self.slides.len() <= 1 {
            return Err(DocError::LastSlide);
        }
        if index >= self.slides.len() {
            return Err(DocError::IndexOutOfRange { index, len: self.slides.len() });
        }
        let mut next = self.clone();
        next.slides.remove(index);
        Ok(next)
    }

    /// Move the slide at `from` to position `to`. Indices are clamped.
    #[must_use]
    pub fn reorder_slides(&self, from: usize, to: usize) -> Self {
        Self { slides: move_item(&self.slides, from, to), ..self.clone() }
    }

    /// Replace the slide at `index` wholesale. Out-of-range is a no-op.
    #[must_use]
    pub fn update_slide(&self, index: usize, slide: Slide) -> Self {
        let mut next = self.clone();
        if let Some(existing) = next.slides.get_mut(index) {
            *existing = slide;
        }
        next
    }

    /// Shallow-merge metadata fields. Never touches slides.
    #[must_use]
    pub fn update_metadata(&self, patch: &MetadataPatch) -> Self {
        let mut next = self.clone();
        if let Some(ref title) = patch.title {
            next.title.clone_from(title);
        }
        if let Some(ref description) = patch.description {
            next.description.clone_from(description);
        }
        if let Some(ref author) = patch.author {
            next.author.clone_from(author);
        }
        if let Some(ref level) = patch.level {
            next.level.clone_from(level);
        }
        if let Some(duration) = patch.duration {
            next.duration = duration.max(1);
        }
        next
    }

    /// Copy with `updatedAt` set to now.
    #[must_use]
    pub fn touch(&self) -> Self {
        Self { updated_at: now_timestamp(), ..self.clone() }
    }
}

impl Default for Lesson {
    fn default() -> Self {
        Self::starter()
    }
}

// =============================================================================
// SLIDE
// =============================================================================

impl Slide {
    /// An empty slide with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: new_id("slide"), title: title.into(), components: Vec::new() }
    }

    /// Position of the component with `id`.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    /// Component with `id`, if present.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Copy with a new title.
    #[must_use]
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self { title: title.into(), ..self.clone() }
    }

    /// Instantiate a component of `kind` from registry defaults merged with
    /// `overrides`, and append it. Returns the new slide and component id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownComponentType` when the registry has no definition.
    pub fn add_component(&self, kind: &ComponentType, overrides: Props) -> Result<(Self, String), DocError> {
        let definition =
            registry::lookup(kind).ok_or_else(|| DocError::UnknownComponentType(kind.to_string()))?;
        let mut props = definition.default_props.clone();
        props.extend(overrides);

        let id = new_id("component");
        let mut next = self.clone();
        next.components.push(Component { id: id.clone(), kind: kind.clone(), props });
        Ok((next, id))
    }

    /// Replace the full property map of component `id`. No-op when absent.
    #[must_use]
    pub fn update_component_props(&self, id: &str, props: Props) -> Self {
        self.try_update_component_props(id, props)
            .unwrap_or_else(|_| self.clone())
    }

    /// Replace the full property map of component `id`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` when no component has `id`.
    pub fn try_update_component_props(&self, id: &str, props: Props) -> Result<Self, DocError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| DocError::ComponentNotFound(id.to_owned()))?;
        let mut next = self.clone();
        if let Some(component) = next.components.get_mut(index) {
            component.props = props;
        }
        Ok(next)
    }

    /// Remove component `id`. No-op when absent.
    #[must_use]
    pub fn delete_component(&self, id: &str) -> Self {
        Self {
            components: self.components.iter().filter(|c| c.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    /// Move the component at `from` to position `to`. Indices are clamped.
    #[must_use]
    pub fn reorder_components(&self, from: usize, to: usize) -> Self {
        Self { components: move_item(&self.components, from, to), ..self.clone() }
    }
}

/// Convert a JSON literal into a property map; non-objects become empty.
#[must_use]
pub fn object(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}
