//! Collection sub-editors for array-valued properties.
//!
//! Each operation takes the current entry list and returns the new one.
//! Deleting below a collection's minimum is refused with
//! [`EditError::Minimum`] and leaves the list untouched.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use serde::Deserialize;
use serde_json::Value;

use super::EditError;
use crate::consts::{MIN_DRAG_ITEMS, MIN_FLASHCARDS, MIN_MATCHING_PAIRS, MIN_QUIZ_OPTIONS, MIN_QUIZ_QUESTIONS};
use crate::doc::{Props, move_item, new_id};
use crate::props::{
    DragItem, Flashcard, HotspotMarker, MatchingPair, QuizOption, QuizProps, QuizQuestion, read_list, write_list,
};
use crate::registry::CollectionEditor;

// =============================================================================
// OPERATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum QuizOp {
    AddQuestion,
    UpdateQuestion { question: usize, text: String },
    UpdateExplanation { question: usize, text: String },
    DeleteQuestion { question: usize },
    AddOption { question: usize },
    UpdateOption { question: usize, option: usize, text: String },
    DeleteOption { question: usize, option: usize },
    SetCorrect { question: usize, option: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PairOp {
    Add,
    UpdateLeft { index: usize, text: String },
    UpdateRight { index: usize, text: String },
    Delete { index: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ItemOp {
    Add,
    UpdateText { index: usize, text: String },
    Delete { index: usize },
    Move { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum CardOp {
    Add,
    UpdateFront { index: usize, text: String },
    UpdateBack { index: usize, text: String },
    Delete { index: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum HotspotOp {
    /// Place a marker at normalized image coordinates.
    Add { x: f64, y: f64 },
    UpdateLabel { index: usize, text: String },
    UpdateContent { index: usize, text: String },
    Move { index: usize, x: f64, y: f64 },
    Delete { index: usize },
}

/// An edit routed to one collection sub-editor.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionOp {
    Quiz(QuizOp),
    Pairs(PairOp),
    Items(ItemOp),
    Cards(CardOp),
    Hotspots(HotspotOp),
}

impl CollectionOp {
    /// The sub-editor this operation belongs to.
    #[must_use]
    pub fn editor(&self) -> CollectionEditor {
        match self {
            Self::Quiz(_) => CollectionEditor::QuizQuestions,
            Self::Pairs(_) => CollectionEditor::MatchingPairs,
            Self::Items(_) => CollectionEditor::DragItems,
            Self::Cards(_) => CollectionEditor::Flashcards,
            Self::Hotspots(_) => CollectionEditor::Hotspots,
        }
    }

    /// Parse a JSON operation (`{"op": "add", ...}`) for `editor`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJson` when the text is not a valid operation.
    pub fn parse(editor: CollectionEditor, text: &str) -> Result<Self, EditError> {
        let invalid = |e: serde_json::Error| EditError::InvalidJson(e.to_string());
        Ok(match editor {
            CollectionEditor::QuizQuestions => Self::Quiz(serde_json::from_str(text).map_err(invalid)?),
            CollectionEditor::MatchingPairs => Self::Pairs(serde_json::from_str(text).map_err(invalid)?),
            CollectionEditor::DragItems => Self::Items(serde_json::from_str(text).map_err(invalid)?),
            CollectionEditor::Flashcards => Self::Cards(serde_json::from_str(text).map_err(invalid)?),
            CollectionEditor::Hotspots => Self::Hotspots(serde_json::from_str(text).map_err(invalid)?),
        })
    }
}

/// Apply `op` to the array stored under `name` and return the new array.
///
/// # Errors
///
/// Propagates the sub-editor's structural rejections and `InvalidJson` when
/// the stored entries cannot be read.
pub fn apply(props: &Props, name: &str, op: &CollectionOp) -> Result<Value, EditError> {
    let unreadable = |e: serde_json::Error| EditError::InvalidJson(e.to_string());
    let written = match op {
        CollectionOp::Quiz(op) => {
            let quiz: QuizProps =
                serde_json::from_value(Value::Object(props.clone())).map_err(unreadable)?;
            write_list(&quiz_questions(&quiz.questions(), op)?)
        }
        CollectionOp::Pairs(op) => {
            let pairs = read_list::<MatchingPair>(props, name).map_err(unreadable)?;
            write_list(&matching_pairs(&pairs, op)?)
        }
        CollectionOp::Items(op) => {
            let items = read_list::<DragItem>(props, name).map_err(unreadable)?;
            write_list(&drag_items(&items, op)?)
        }
        CollectionOp::Cards(op) => {
            let cards = read_list::<Flashcard>(props, name).map_err(unreadable)?;
            write_list(&flashcards(&cards, op)?)
        }
        CollectionOp::Hotspots(op) => {
            let markers = read_list::<HotspotMarker>(props, name).map_err(unreadable)?;
            write_list(&hotspots(&markers, op)?)
        }
    };
    written.map_err(unreadable)
}

fn entry<T>(list: &mut [T], index: usize, len: usize) -> Result<&mut T, EditError> {
    list.get_mut(index).ok_or(EditError::IndexOutOfRange { index, len })
}

fn ensure_above(len: usize, min: usize, collection: &'static str) -> Result<(), EditError> {
    if len <= min {
        return Err(EditError::Minimum { collection, min });
    }
    Ok(())
}

fn ensure_index(index: usize, len: usize) -> Result<(), EditError> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { index, len });
    }
    Ok(())
}

// =============================================================================
// QUIZ QUESTIONS
// =============================================================================

/// Apply a quiz-question edit.
///
/// # Errors
///
/// `Minimum` below one question or two options; `IndexOutOfRange` for bad
/// question or option indices.
pub fn quiz_questions(questions: &[QuizQuestion], op: &QuizOp) -> Result<Vec<QuizQuestion>, EditError> {
    let mut next = questions.to_vec();
    let len = next.len();
    match op {
        QuizOp::AddQuestion => next.push(QuizQuestion {
            id: new_id("q"),
            question: "New Question".into(),
            options: vec![
                QuizOption { id: new_id("opt"), text: "Option 1".into(), is_correct: false },
                QuizOption { id: new_id("opt"), text: "Option 2".into(), is_correct: true },
            ],
            explanation: String::new(),
        }),
        QuizOp::UpdateQuestion { question, text } => {
            entry(&mut next, *question, len)?.question.clone_from(text);
        }
        QuizOp::UpdateExplanation { question, text } => {
            entry(&mut next, *question, len)?.explanation.clone_from(text);
        }
        QuizOp::DeleteQuestion { question } => {
            ensure_index(*question, len)?;
            ensure_above(len, MIN_QUIZ_QUESTIONS, "quiz questions")?;
            next.remove(*question);
        }
        QuizOp::AddOption { question } => {
            entry(&mut next, *question, len)?.options.push(QuizOption {
                id: new_id("opt"),
                text: "New Option".into(),
                is_correct: false,
            });
        }
        QuizOp::UpdateOption { question, option, text } => {
            let options = &mut entry(&mut next, *question, len)?.options;
            let count = options.len();
            entry(options, *option, count)?.text.clone_from(text);
        }
        QuizOp::DeleteOption { question, option } => {
            let options = &mut entry(&mut next, *question, len)?.options;
            ensure_index(*option, options.len())?;
            ensure_above(options.len(), MIN_QUIZ_OPTIONS, "quiz options")?;
            options.remove(*option);
        }
        QuizOp::SetCorrect { question, option } => {
            let options = &mut entry(&mut next, *question, len)?.options;
            ensure_index(*option, options.len())?;
            for (i, opt) in options.iter_mut().enumerate() {
                opt.is_correct = i == *option;
            }
        }
    }
    Ok(next)
}

// =============================================================================
// MATCHING PAIRS
// =============================================================================

/// Apply a matching-pair edit.
///
/// # Errors
///
/// `Minimum` below two pairs; `IndexOutOfRange` for a bad index.
pub fn matching_pairs(pairs: &[MatchingPair], op: &PairOp) -> Result<Vec<MatchingPair>, EditError> {
    let mut next = pairs.to_vec();
    let len = next.len();
    match op {
        PairOp::Add => next.push(MatchingPair {
            id: new_id("pair"),
            left: "New Item".into(),
            right: "New Match".into(),
        }),
        PairOp::UpdateLeft { index, text } => entry(&mut next, *index, len)?.left.clone_from(text),
        PairOp::UpdateRight { index, text } => entry(&mut next, *index, len)?.right.clone_from(text),
        PairOp::Delete { index } => {
            ensure_index(*index, len)?;
            ensure_above(len, MIN_MATCHING_PAIRS, "matching pairs")?;
            next.remove(*index);
        }
    }
    Ok(next)
}

// =============================================================================
// DRAG ITEMS
// =============================================================================

/// Apply a drag-item edit. Deletes and moves re-index `correctIndex` so it
/// always equals the item's position.
///
/// # Errors
///
/// `Minimum` below two items; `IndexOutOfRange` for a bad index.
pub fn drag_items(items: &[DragItem], op: &ItemOp) -> Result<Vec<DragItem>, EditError> {
    let mut next = items.to_vec();
    let len = next.len();
    match op {
        ItemOp::Add => next.push(DragItem { id: new_id("item"), text: "New Item".into(), correct_index: len }),
        ItemOp::UpdateText { index, text } => entry(&mut next, *index, len)?.text.clone_from(text),
        ItemOp::Delete { index } => {
            ensure_index(*index, len)?;
            ensure_above(len, MIN_DRAG_ITEMS, "drag items")?;
            next.remove(*index);
            reindex(&mut next);
        }
        ItemOp::Move { from, to } => {
            next = move_item(&next, *from, *to);
            reindex(&mut next);
        }
    }
    Ok(next)
}

fn reindex(items: &mut [DragItem]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.correct_index = i;
    }
}

// =============================================================================
// FLASHCARDS
// =============================================================================

/// Apply a flashcard edit.
///
/// # Errors
///
/// `Minimum` below one card; `IndexOutOfRange` for a bad index.
pub fn flashcards(cards: &[Flashcard], op: &CardOp) -> Result<Vec<Flashcard>, EditError> {
    let mut next = cards.to_vec();
    let len = next.len();
    match op {
        CardOp::Add => next.push(Flashcard {
            id: new_id("card"),
            front: "Front side".into(),
            back: "Back side".into(),
        }),
        CardOp::UpdateFront { index, text } => entry(&mut next, *index, len)?.front.clone_from(text),
        CardOp::UpdateBack { index, text } => entry(&mut next, *index, len)?.back.clone_from(text),
        CardOp::Delete { index } => {
            ensure_index(*index, len)?;
            ensure_above(len, MIN_FLASHCARDS, "flashcards")?;
            next.remove(*index);
        }
    }
    Ok(next)
}

// =============================================================================
// HOTSPOTS
// =============================================================================

/// Apply a hotspot edit. Coordinates are clamped into `0..=1`.
///
/// # Errors
///
/// `IndexOutOfRange` for a bad index.
pub fn hotspots(markers: &[HotspotMarker], op: &HotspotOp) -> Result<Vec<HotspotMarker>, EditError> {
    let mut next = markers.to_vec();
    let len = next.len();
    match op {
        HotspotOp::Add { x, y } => next.push(HotspotMarker {
            id: new_id("hotspot"),
            x: unit(*x),
            y: unit(*y),
            label: format!("Hotspot {}", len + 1),
            content: "Description goes here".into(),
        }),
        HotspotOp::UpdateLabel { index, text } => entry(&mut next, *index, len)?.label.clone_from(text),
        HotspotOp::UpdateContent { index, text } => entry(&mut next, *index, len)?.content.clone_from(text),
        HotspotOp::Move { index, x, y } => {
            let marker = entry(&mut next, *index, len)?;
            marker.x = unit(*x);
            marker.y = unit(*y);
        }
        HotspotOp::Delete { index } => {
            ensure_index(*index, len)?;
            next.remove(*index);
        }
    }
    Ok(next)
}

fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
