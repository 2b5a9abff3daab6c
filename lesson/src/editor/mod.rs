//! Property editing surface.
//!
//! Turns a component definition's schema into editable fields and applies
//! single-property edits. An edit always produces the previous map with
//! exactly one key replaced; the document write happens through
//! [`Slide::update_component_props`].

pub mod collections;


use serde_json::Value;

use crate::doc::{Component, Props, Slide};
use crate::registry::{self, CollectionEditor, ComponentDefinition, PropKind, PropertyDefinition, SelectOption};

pub use collections::CollectionOp;

/// Errors from the editing surface. The document keeps its last-good state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("{collection} cannot go below {min}")]
    Minimum { collection: &'static str, min: usize },
    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("property {0} has no editor")]
    Unsupported(String),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("property {name} does not accept this edit (kind {kind:?})")]
    KindMismatch { name: String, kind: PropKind },
    #[error("{value:?} is not an option of {name}")]
    InvalidOption { name: String, value: String },
    #[error("{value:?} is not a valid value for {name}")]
    InvalidValue { name: String, value: String },
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("property {name} is edited with the {expected:?} editor")]
    WrongEditor { name: String, expected: CollectionEditor },
    #[error("component not found: {0}")]
    ComponentNotFound(String),
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),
}

// =============================================================================
// FIELDS
// =============================================================================

/// How a field is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Text { placeholder: Option<&'static str> },
    Number { min: Option<f64>, max: Option<f64>, step: Option<f64> },
    Switch,
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    RichText,
    /// Image, video, or audio reference.
    Media(PropKind),
    Color,
    Json,
    Collection(CollectionEditor),
    /// Shown as a placeholder; the property cannot be edited here.
    Unsupported,
}

impl Widget {
    fn for_property(prop: &PropertyDefinition) -> Self {
        match prop.kind {
            PropKind::String => Self::Text { placeholder: prop.placeholder },
            PropKind::Number => Self::Number { min: prop.min, max: prop.max, step: prop.step },
            PropKind::Boolean => Self::Switch,
            PropKind::Select => Self::Select { options: prop.options.clone() },
            PropKind::MultiSelect => Self::MultiSelect { options: prop.options.clone() },
            PropKind::Color => Self::Color,
            PropKind::RichText => Self::RichText,
            PropKind::Image | PropKind::Video | PropKind::Audio => Self::Media(prop.kind),
            PropKind::Json => Self::Json,
            PropKind::ComponentArray => prop.editor.map_or(Self::Unsupported, Self::Collection),
            PropKind::Component => Self::Unsupported,
        }
    }
}

/// One editable property with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub description: Option<&'static str>,
    pub widget: Widget,
    pub value: Value,
}

/// Fields for every property `definition` declares, in schema order.
#[must_use]
pub fn fields(component: &Component, definition: &ComponentDefinition) -> Vec<Field> {
    definition
        .prop_definitions
        .iter()
        .map(|prop| Field {
            name: prop.name,
            label: prop.label,
            required: prop.required,
            description: prop.description,
            widget: Widget::for_property(prop),
            value: current_value(&component.props, prop),
        })
        .collect()
}

fn current_value(props: &Props, prop: &PropertyDefinition) -> Value {
    props
        .get(prop.name)
        .or(prop.default_value.as_ref())
        .cloned()
        .unwrap_or(Value::Null)
}

// =============================================================================
// EDITS
// =============================================================================

/// A single-property edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// New text for string, rich text, color, and media properties.
    Text(String),
    /// Raw number input. Unparseable text becomes 0.
    Number(String),
    Toggle,
    Set(bool),
    /// Chosen option, compared by string value.
    Select(String),
    MultiSelect(Vec<String>),
    Json(Value),
    Collection(CollectionOp),
}

impl Edit {
    /// Interpret command-line text as an edit for `prop`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJson` or `InvalidValue` for text the property's kind
    /// cannot read, and `Unsupported` for properties without an editor.
    pub fn from_text(prop: &PropertyDefinition, text: &str) -> Result<Self, EditError> {
        Ok(match prop.kind {
            PropKind::String
            | PropKind::Color
            | PropKind::RichText
            | PropKind::Image
            | PropKind::Video
            | PropKind::Audio => Self::Text(text.to_owned()),
            PropKind::Number => Self::Number(text.to_owned()),
            PropKind::Boolean => match text.trim().to_lowercase().as_str() {
                "toggle" => Self::Toggle,
                "true" | "on" | "yes" => Self::Set(true),
                "false" | "off" | "no" => Self::Set(false),
                _ => {
                    return Err(EditError::InvalidValue { name: prop.name.to_owned(), value: text.to_owned() });
                }
            },
            PropKind::Select => Self::Select(text.trim().to_owned()),
            PropKind::MultiSelect => Self::MultiSelect(
                text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect(),
            ),
            PropKind::Json => Self::Json(serde_json::from_str(text).map_err(|e| EditError::InvalidJson(e.to_string()))?),
            PropKind::ComponentArray => match prop.editor {
                Some(editor) => Self::Collection(CollectionOp::parse(editor, text)?),
                None => return Err(EditError::Unsupported(prop.name.to_owned())),
            },
            PropKind::Component => return Err(EditError::Unsupported(prop.name.to_owned())),
        })
    }
}

/// Apply `edit` to property `name`, returning the new map.
///
/// # Errors
///
/// Returns `UnknownProperty` when the schema has no such property,
/// `KindMismatch` when the edit does not fit the property kind,
/// `InvalidOption` for select values outside the declared options, and
/// `Unsupported`/`WrongEditor` for array properties edited without their
/// declared sub-editor. Collection edits also surface the sub-editor's
/// structural rejections.
pub fn apply_edit(props: &Props, definition: &ComponentDefinition, name: &str, edit: &Edit) -> Result<Props, EditError> {
    let prop = definition
        .property(name)
        .ok_or_else(|| EditError::UnknownProperty(name.to_owned()))?;

    let value = match (prop.kind, edit) {
        (PropKind::ComponentArray, Edit::Collection(op)) => {
            let editor = prop.editor.ok_or_else(|| EditError::Unsupported(name.to_owned()))?;
            if op.editor() != editor {
                return Err(EditError::WrongEditor { name: name.to_owned(), expected: editor });
            }
            collections::apply(props, name, op)?
        }
        (PropKind::ComponentArray | PropKind::Component, _) => {
            return Err(EditError::Unsupported(name.to_owned()));
        }
        (
            PropKind::String
            | PropKind::Color
            | PropKind::RichText
            | PropKind::Image
            | PropKind::Video
            | PropKind::Audio,
            Edit::Text(text),
        ) => Value::String(text.clone()),
        (PropKind::Number, Edit::Number(text)) => number_value(prop, text),
        (PropKind::Boolean, Edit::Toggle) => {
            Value::Bool(!current_value(props, prop).as_bool().unwrap_or(false))
        }
        (PropKind::Boolean, Edit::Set(on)) => Value::Bool(*on),
        (PropKind::Select, Edit::Select(choice)) => option_value(prop, choice)?,
        (PropKind::MultiSelect, Edit::MultiSelect(choices)) => Value::Array(
            choices
                .iter()
                .map(|choice| option_value(prop, choice))
                .collect::<Result<_, _>>()?,
        ),
        (PropKind::Json, Edit::Json(value)) => value.clone(),
        _ => return Err(EditError::KindMismatch { name: name.to_owned(), kind: prop.kind }),
    };

    let mut next = props.clone();
    next.insert(name.to_owned(), value);
    Ok(next)
}

/// Resolve component `id` on `slide`, apply the edit, and write the new
/// props back.
///
/// # Errors
///
/// Returns `ComponentNotFound`, `UnknownComponentType`, or any error from
/// [`apply_edit`].
pub fn edit_component(slide: &Slide, id: &str, name: &str, edit: &Edit) -> Result<Slide, EditError> {
    let component = slide
        .component(id)
        .ok_or_else(|| EditError::ComponentNotFound(id.to_owned()))?;
    let definition = registry::lookup(&component.kind)
        .ok_or_else(|| EditError::UnknownComponentType(component.kind.to_string()))?;
    let props = apply_edit(&component.props, definition, name, edit)?;
    tracing::debug!(component = id, prop = name, "component prop edited");
    Ok(slide.update_component_props(id, props))
}

fn option_value(prop: &PropertyDefinition, choice: &str) -> Result<Value, EditError> {
    prop.options
        .iter()
        .find(|o| o.key() == choice)
        .map(|o| o.value.clone())
        .ok_or_else(|| EditError::InvalidOption { name: prop.name.to_owned(), value: choice.to_owned() })
}

/// Parse number input, clamp to the declared bounds, and write whole
/// numbers as integers.
fn number_value(prop: &PropertyDefinition, text: &str) -> Value {
    let mut n = text.trim().parse::<f64>().unwrap_or(0.0);
    if !n.is_finite() {
        n = 0.0;
    }
    if let Some(min) = prop.min {
        n = n.max(min);
    }
    if let Some(max) = prop.max {
        n = n.min(max);
    }
    whole_number(n).map_or_else(|| Value::from(n), Value::from)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0;
    (n.trunc() == n && n.abs() < LIMIT).then_some(n as i64)
}
