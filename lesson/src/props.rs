//! Typed views of component property bags.
//!
//! Components that have behavior (players, scoring, a dedicated renderer)
//! get a strongly-typed struct; everything else stays an opaque map. Parsing
//! is lenient where hand-edited data tends to drift: missing keys take their
//! defaults and collection ids may be numbers.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::doc::{Component, Props};
use crate::kind::ComponentType;

/// Failure to read a component's props as its typed view.
#[derive(Debug, thiserror::Error)]
#[error("invalid {kind} props: {source}")]
pub struct PropsError {
    pub kind: ComponentType,
    #[source]
    pub source: serde_json::Error,
}

/// Typed props of one component.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentProps {
    Heading(HeadingProps),
    Paragraph(ParagraphProps),
    BulletList(BulletListProps),
    Image(ImageProps),
    Quiz(QuizProps),
    MatchingPairs(MatchingProps),
    DragDrop(DragDropProps),
    Flashcards(FlashcardsProps),
    Hotspot(HotspotProps),
    ScoreBoard(ScoreBoardProps),
    /// Kinds without a typed view, including unknown tags.
    Opaque(Props),
}

impl ComponentProps {
    /// Read the typed view of `component`.
    ///
    /// # Errors
    ///
    /// Returns `PropsError` when a present key has the wrong shape.
    pub fn from_component(component: &Component) -> Result<Self, PropsError> {
        let props = &component.props;
        let kind = &component.kind;
        Ok(match kind {
            ComponentType::Heading | ComponentType::SlideTitle => Self::Heading(parse(kind, props)?),
            ComponentType::Paragraph => Self::Paragraph(parse(kind, props)?),
            ComponentType::BulletList => Self::BulletList(parse(kind, props)?),
            ComponentType::Image => Self::Image(parse(kind, props)?),
            ComponentType::Quiz => Self::Quiz(parse(kind, props)?),
            ComponentType::MatchingPairs => Self::MatchingPairs(parse(kind, props)?),
            ComponentType::DragDrop => Self::DragDrop(parse(kind, props)?),
            ComponentType::Flashcards => Self::Flashcards(parse(kind, props)?),
            ComponentType::Hotspot => Self::Hotspot(parse(kind, props)?),
            ComponentType::ScoreBoard => Self::ScoreBoard(parse(kind, props)?),
            _ => Self::Opaque(props.clone()),
        })
    }
}

fn parse<T: DeserializeOwned>(kind: &ComponentType, props: &Props) -> Result<T, PropsError> {
    serde_json::from_value(Value::Object(props.clone()))
        .map_err(|source| PropsError { kind: kind.clone(), source })
}

/// Read one collection entry list (e.g. quiz `questions`) from a raw map.
/// Missing keys yield an empty list.
///
/// # Errors
///
/// Returns the serde error when the entries have the wrong shape.
pub fn read_list<T: DeserializeOwned>(props: &Props, name: &str) -> Result<Vec<T>, serde_json::Error> {
    match props.get(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()),
    }
}

/// Serialize a collection entry list back into a JSON array.
///
/// # Errors
///
/// Returns the serde error if an entry cannot be serialized.
pub fn write_list<T: Serialize>(items: &[T]) -> Result<Value, serde_json::Error> {
    serde_json::to_value(items)
}

// =============================================================================
// LENIENT FIELDS
// =============================================================================

/// Accept a string or a number and normalize to a string.
fn flexible_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Accept any non-negative number (or numeric string); fractions truncate.
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    number_from(&value)
        .map(truncate_u32)
        .ok_or_else(|| de::Error::custom(format!("expected a number, got {value}")))
}

fn lenient_usize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    lenient_u32(deserializer).map(|n| usize::try_from(n).unwrap_or(usize::MAX))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    number_from(&value).ok_or_else(|| de::Error::custom(format!("expected a number, got {value}")))
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => None,
        },
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_u32(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        n as u32
    }
}

// =============================================================================
// CONTENT
// =============================================================================

/// Text alignment shared by headings and paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingProps {
    pub content: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub level: u32,
    pub align: Align,
}

impl Default for HeadingProps {
    fn default() -> Self {
        Self { content: "Heading".into(), level: 2, align: Align::Left }
    }
}

impl HeadingProps {
    /// Level clamped into 1..=6.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level.clamp(1, 6)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphProps {
    pub content: String,
    pub align: Align,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletListProps {
    pub items: Vec<String>,
    #[serde(rename = "type")]
    pub style: ListStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub width: String,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self { src: String::new(), alt: "Image".into(), caption: String::new(), width: "100%".into() }
    }
}

// =============================================================================
// QUIZ
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizOption {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizQuestion {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

impl QuizQuestion {
    /// The option marked correct, if any.
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizProps {
    pub questions: Vec<QuizQuestion>,
    /// Legacy single-question shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuizOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub show_explanation: bool,
    pub shuffle_options: bool,
    #[serde(deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl Default for QuizProps {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            question: None,
            options: None,
            explanation: None,
            show_explanation: true,
            shuffle_options: false,
            points: 10,
        }
    }
}

impl QuizProps {
    /// Questions in play order. A legacy single-question quiz becomes a
    /// one-element list with id `q1`.
    #[must_use]
    pub fn questions(&self) -> Vec<QuizQuestion> {
        if !self.questions.is_empty() {
            return self.questions.clone();
        }
        match (&self.question, &self.options) {
            (Some(question), Some(options)) => vec![QuizQuestion {
                id: "q1".into(),
                question: question.clone(),
                options: options.clone(),
                explanation: self.explanation.clone().unwrap_or_default(),
            }],
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// MATCHING / ORDERING
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingPair {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingProps {
    pub title: String,
    pub pairs: Vec<MatchingPair>,
    pub shuffled: bool,
    #[serde(deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl Default for MatchingProps {
    fn default() -> Self {
        Self { title: "Match the items".into(), pairs: Vec::new(), shuffled: true, points: 15 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragItem {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub text: String,
    #[serde(deserialize_with = "lenient_usize")]
    pub correct_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragDropProps {
    pub title: String,
    pub items: Vec<DragItem>,
    pub shuffled: bool,
    #[serde(deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl Default for DragDropProps {
    fn default() -> Self {
        Self { title: "Arrange in the correct order".into(), items: Vec::new(), shuffled: true, points: 15 }
    }
}

impl DragDropProps {
    /// Items sorted by their correct position.
    #[must_use]
    pub fn correct_order(&self) -> Vec<DragItem> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.correct_index);
        items
    }
}

// =============================================================================
// FLASHCARDS / HOTSPOT / SCORE BOARD
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flashcard {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardsProps {
    pub title: String,
    pub cards: Vec<Flashcard>,
}

impl Default for FlashcardsProps {
    fn default() -> Self {
        Self { title: "Flashcards".into(), cards: Vec::new() }
    }
}

/// A marker on a hotspot image. Coordinates are fractions of the image size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotMarker {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub x: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub y: f64,
    pub label: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotProps {
    pub title: String,
    pub image: String,
    pub hotspots: Vec<HotspotMarker>,
}

impl Default for HotspotProps {
    fn default() -> Self {
        Self { title: "Interactive Image".into(), image: String::new(), hotspots: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreBoardProps {
    pub title: String,
    pub show_total: bool,
    pub show_percentage: bool,
    pub animation: bool,
}

impl Default for ScoreBoardProps {
    fn default() -> Self {
        Self { title: "Your Score".into(), show_total: true, show_percentage: true, animation: true }
    }
}
