#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::doc::object;

fn question(id: &str, options: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.into(),
        question: format!("Question {id}"),
        options: (0..options)
            .map(|i| QuizOption { id: format!("{id}-o{i}"), text: format!("Option {i}"), is_correct: i == 0 })
            .collect(),
        explanation: String::new(),
    }
}

fn pair(id: &str) -> MatchingPair {
    MatchingPair { id: id.into(), left: format!("L{id}"), right: format!("R{id}") }
}

fn item(id: &str, correct_index: usize) -> DragItem {
    DragItem { id: id.into(), text: id.to_uppercase(), correct_index }
}

// =============================================================
// Quiz questions
// =============================================================

#[test]
fn add_question_has_two_options_second_correct() {
    let next = quiz_questions(&[], &QuizOp::AddQuestion).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].question, "New Question");
    assert_eq!(next[0].options.len(), 2);
    assert!(!next[0].options[0].is_correct);
    assert!(next[0].options[1].is_correct);
    assert!(next[0].id.starts_with("q-"));
}

#[test]
fn delete_last_question_is_refused() {
    let questions = vec![question("a", 2)];
    let err = quiz_questions(&questions, &QuizOp::DeleteQuestion { question: 0 }).unwrap_err();
    assert_eq!(err, EditError::Minimum { collection: "quiz questions", min: 1 });
}

#[test]
fn delete_question_out_of_range() {
    let questions = vec![question("a", 2), question("b", 2)];
    let err = quiz_questions(&questions, &QuizOp::DeleteQuestion { question: 3 }).unwrap_err();
    assert_eq!(err, EditError::IndexOutOfRange { index: 3, len: 2 });
    let next = quiz_questions(&questions, &QuizOp::DeleteQuestion { question: 0 }).unwrap();
    assert_eq!(next[0].id, "b");
}

#[test]
fn option_minimum_is_two() {
    let questions = vec![question("a", 2)];
    let err = quiz_questions(&questions, &QuizOp::DeleteOption { question: 0, option: 1 }).unwrap_err();
    assert_eq!(err, EditError::Minimum { collection: "quiz options", min: 2 });

    let grown = quiz_questions(&questions, &QuizOp::AddOption { question: 0 }).unwrap();
    assert_eq!(grown[0].options[2].text, "New Option");
    let shrunk = quiz_questions(&grown, &QuizOp::DeleteOption { question: 0, option: 0 }).unwrap();
    assert_eq!(shrunk[0].options.len(), 2);
}

#[test]
fn set_correct_is_exclusive() {
    let questions = vec![question("a", 3)];
    let next = quiz_questions(&questions, &QuizOp::SetCorrect { question: 0, option: 2 }).unwrap();
    let flags: Vec<_> = next[0].options.iter().map(|o| o.is_correct).collect();
    assert_eq!(flags, vec![false, false, true]);
}

#[test]
fn update_question_fields() {
    let questions = vec![question("a", 2)];
    let next = quiz_questions(&questions, &QuizOp::UpdateQuestion { question: 0, text: "Why?".into() }).unwrap();
    let next = quiz_questions(&next, &QuizOp::UpdateExplanation { question: 0, text: "Because.".into() }).unwrap();
    let next =
        quiz_questions(&next, &QuizOp::UpdateOption { question: 0, option: 1, text: "Maybe".into() }).unwrap();
    assert_eq!(next[0].question, "Why?");
    assert_eq!(next[0].explanation, "Because.");
    assert_eq!(next[0].options[1].text, "Maybe");
    assert_eq!(questions[0].question, "Question a");
}

#[test]
fn update_option_bad_index() {
    let questions = vec![question("a", 2)];
    let err = quiz_questions(&questions, &QuizOp::UpdateOption { question: 0, option: 5, text: String::new() })
        .unwrap_err();
    assert_eq!(err, EditError::IndexOutOfRange { index: 5, len: 2 });
}

#[test]
fn legacy_quiz_edits_become_question_list() {
    let props = object(json!({
        "question": "Old?",
        "options": [{ "id": 1, "text": "A", "isCorrect": true }, { "id": 2, "text": "B", "isCorrect": false }],
    }));
    let op = CollectionOp::Quiz(QuizOp::UpdateQuestion { question: 0, text: "New?".into() });
    let value = apply(&props, "questions", &op).unwrap();
    assert_eq!(value[0]["id"], json!("q1"));
    assert_eq!(value[0]["question"], json!("New?"));
    assert_eq!(value[0]["options"][0]["isCorrect"], json!(true));
}

// =============================================================
// Matching pairs
// =============================================================

#[test]
fn pair_minimum_is_two() {
    let pairs = vec![pair("1"), pair("2")];
    let err = matching_pairs(&pairs, &PairOp::Delete { index: 0 }).unwrap_err();
    assert_eq!(err, EditError::Minimum { collection: "matching pairs", min: 2 });
    let grown = matching_pairs(&pairs, &PairOp::Add).unwrap();
    assert_eq!(grown.len(), 3);
    assert_eq!(grown[2].right, "New Match");
    assert_eq!(matching_pairs(&grown, &PairOp::Delete { index: 2 }).unwrap(), pairs);
}

#[test]
fn update_pair_sides() {
    let pairs = vec![pair("1"), pair("2")];
    let next = matching_pairs(&pairs, &PairOp::UpdateLeft { index: 1, text: "Bird".into() }).unwrap();
    let next = matching_pairs(&next, &PairOp::UpdateRight { index: 1, text: "Tweet".into() }).unwrap();
    assert_eq!((next[1].left.as_str(), next[1].right.as_str()), ("Bird", "Tweet"));
}

// =============================================================
// Drag items
// =============================================================

#[test]
fn add_item_takes_next_index() {
    let items = vec![item("a", 0), item("b", 1)];
    let next = drag_items(&items, &ItemOp::Add).unwrap();
    assert_eq!(next[2].correct_index, 2);
    assert_eq!(next[2].text, "New Item");
}

#[test]
fn delete_item_reindexes() {
    let items = vec![item("a", 0), item("b", 1), item("c", 2)];
    let next = drag_items(&items, &ItemOp::Delete { index: 0 }).unwrap();
    let indices: Vec<_> = next.iter().map(|i| (i.id.as_str(), i.correct_index)).collect();
    assert_eq!(indices, vec![("b", 0), ("c", 1)]);
    let err = drag_items(&next, &ItemOp::Delete { index: 0 }).unwrap_err();
    assert_eq!(err, EditError::Minimum { collection: "drag items", min: 2 });
}

#[test]
fn move_item_reindexes_to_positions() {
    let items = vec![item("a", 0), item("b", 1), item("c", 2)];
    let next = drag_items(&items, &ItemOp::Move { from: 2, to: 0 }).unwrap();
    let indices: Vec<_> = next.iter().map(|i| (i.id.as_str(), i.correct_index)).collect();
    assert_eq!(indices, vec![("c", 0), ("a", 1), ("b", 2)]);
}

// =============================================================
// Flashcards
// =============================================================

#[test]
fn flashcard_minimum_is_one() {
    let cards = flashcards(&[], &CardOp::Add).unwrap();
    assert_eq!(cards[0].front, "Front side");
    assert_eq!(cards[0].back, "Back side");
    let err = flashcards(&cards, &CardOp::Delete { index: 0 }).unwrap_err();
    assert_eq!(err, EditError::Minimum { collection: "flashcards", min: 1 });
    let cards = flashcards(&cards, &CardOp::UpdateBack { index: 0, text: "Answer".into() }).unwrap();
    assert_eq!(cards[0].back, "Answer");
}

// =============================================================
// Hotspots
// =============================================================

#[test]
fn hotspots_are_numbered_and_clamped() {
    let first = hotspots(&[], &HotspotOp::Add { x: 0.2, y: 1.7 }).unwrap();
    let both = hotspots(&first, &HotspotOp::Add { x: -3.0, y: 0.5 }).unwrap();
    assert_eq!(both[0].label, "Hotspot 1");
    assert_eq!(both[1].label, "Hotspot 2");
    assert_eq!(both[0].y, 1.0);
    assert_eq!(both[1].x, 0.0);
}

#[test]
fn hotspot_move_and_delete() {
    let markers = hotspots(&[], &HotspotOp::Add { x: 0.1, y: 0.1 }).unwrap();
    let moved = hotspots(&markers, &HotspotOp::Move { index: 0, x: 0.9, y: 0.4 }).unwrap();
    assert_eq!((moved[0].x, moved[0].y), (0.9, 0.4));
    assert!(hotspots(&moved, &HotspotOp::Delete { index: 0 }).unwrap().is_empty());
    assert!(hotspots(&moved, &HotspotOp::Delete { index: 1 }).is_err());
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_routes_by_editor() {
    let op = CollectionOp::parse(CollectionEditor::DragItems, r#"{"op":"move","from":0,"to":2}"#).unwrap();
    assert_eq!(op, CollectionOp::Items(ItemOp::Move { from: 0, to: 2 }));
    assert_eq!(op.editor(), CollectionEditor::DragItems);

    let op = CollectionOp::parse(CollectionEditor::Hotspots, r#"{"op":"add","x":0.5,"y":0.5}"#).unwrap();
    assert_eq!(op, CollectionOp::Hotspots(HotspotOp::Add { x: 0.5, y: 0.5 }));
}

#[test]
fn parse_rejects_foreign_ops() {
    let err = CollectionOp::parse(CollectionEditor::Flashcards, r#"{"op":"setCorrect","question":0,"option":1}"#)
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidJson(_)));
}
