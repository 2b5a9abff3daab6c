use serde_json::json;

use super::*;
use crate::doc::object;

fn component(kind: ComponentType, props: serde_json::Value) -> Component {
    Component { id: "c1".into(), kind, props: object(props) }
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn slide_title_reads_as_heading() {
    let c = component(ComponentType::SlideTitle, json!({ "content": "Intro", "level": 1, "align": "center" }));
    let ComponentProps::Heading(h) = ComponentProps::from_component(&c).unwrap() else {
        panic!("expected heading");
    };
    assert_eq!(h.content, "Intro");
    assert_eq!(h.level(), 1);
    assert_eq!(h.align, Align::Center);
}

#[test]
fn untyped_kinds_stay_opaque() {
    let c = component(ComponentType::Timer, json!({ "duration": 60 }));
    assert_eq!(
        ComponentProps::from_component(&c).unwrap(),
        ComponentProps::Opaque(object(json!({ "duration": 60 })))
    );
    let c = component(ComponentType::parse("hologram"), json!({ "x": 1 }));
    assert!(matches!(ComponentProps::from_component(&c).unwrap(), ComponentProps::Opaque(_)));
}

#[test]
fn wrong_shape_is_an_error() {
    let c = component(ComponentType::Quiz, json!({ "questions": "not a list" }));
    let err = ComponentProps::from_component(&c).unwrap_err();
    assert_eq!(err.kind, ComponentType::Quiz);
    assert!(err.to_string().starts_with("invalid quiz props"));
}

// =============================================================
// Defaults and leniency
// =============================================================

#[test]
fn missing_keys_take_defaults() {
    let c = component(ComponentType::MatchingPairs, json!({}));
    let ComponentProps::MatchingPairs(m) = ComponentProps::from_component(&c).unwrap() else {
        panic!("expected matching");
    };
    assert_eq!(m.title, "Match the items");
    assert!(m.shuffled);
    assert_eq!(m.points, 15);

    let c = component(ComponentType::ScoreBoard, json!({ "animation": false }));
    let ComponentProps::ScoreBoard(s) = ComponentProps::from_component(&c).unwrap() else {
        panic!("expected score board");
    };
    assert!(s.show_total);
    assert!(!s.animation);
}

#[test]
fn numeric_ids_become_strings() {
    let c = component(
        ComponentType::MatchingPairs,
        json!({ "pairs": [{ "id": 1, "left": "Cat", "right": "Meow" }, { "id": "2", "left": "Dog", "right": "Woof" }] }),
    );
    let ComponentProps::MatchingPairs(m) = ComponentProps::from_component(&c).unwrap() else {
        panic!("expected matching");
    };
    assert_eq!(m.pairs[0].id, "1");
    assert_eq!(m.pairs[1].id, "2");
}

#[test]
fn numbers_accept_strings_and_fractions() {
    let c = component(ComponentType::DragDrop, json!({ "points": "20", "items": [{ "id": "a", "text": "A", "correctIndex": 1.0 }] }));
    let ComponentProps::DragDrop(d) = ComponentProps::from_component(&c).unwrap() else {
        panic!("expected drag drop");
    };
    assert_eq!(d.points, 20);
    assert_eq!(d.items[0].correct_index, 1);
}

#[test]
fn heading_level_is_clamped() {
    let h = HeadingProps { level: 9, ..HeadingProps::default() };
    assert_eq!(h.level(), 6);
    let h = HeadingProps { level: 0, ..HeadingProps::default() };
    assert_eq!(h.level(), 1);
}

// =============================================================
// Quiz
// =============================================================

#[test]
fn legacy_quiz_normalizes_to_one_question() {
    let props: QuizProps = serde_json::from_value(json!({
        "question": "2 + 2?",
        "options": [
            { "id": 1, "text": "3", "isCorrect": false },
            { "id": 2, "text": "4", "isCorrect": true },
        ],
        "explanation": "Arithmetic.",
    }))
    .unwrap();
    let questions = props.questions();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, "q1");
    assert_eq!(questions[0].explanation, "Arithmetic.");
    assert_eq!(questions[0].correct_option().map(|o| o.id.as_str()), Some("2"));
    assert_eq!(props.points, 10);
}

#[test]
fn question_list_wins_over_legacy_fields() {
    let props: QuizProps = serde_json::from_value(json!({
        "questions": [{ "id": "a", "question": "New", "options": [] }],
        "question": "Old",
        "options": [],
        "points": 5,
    }))
    .unwrap();
    assert_eq!(props.questions()[0].question, "New");
    assert_eq!(props.points, 5);
}

#[test]
fn empty_quiz_has_no_questions() {
    let props = QuizProps::default();
    assert!(props.questions().is_empty());
    assert!(props.show_explanation);
}

#[test]
fn legacy_fields_are_not_written_back_when_absent() {
    let value = serde_json::to_value(QuizProps::default()).unwrap();
    assert!(value.get("question").is_none());
    assert_eq!(value["showExplanation"], json!(true));
}

// =============================================================
// Collections
// =============================================================

#[test]
fn correct_order_sorts_by_index() {
    let props = DragDropProps {
        items: vec![
            DragItem { id: "b".into(), text: "B".into(), correct_index: 1 },
            DragItem { id: "a".into(), text: "A".into(), correct_index: 0 },
        ],
        ..DragDropProps::default()
    };
    let order: Vec<_> = props.correct_order().into_iter().map(|i| i.text).collect();
    assert_eq!(order, vec!["A", "B"]);
}

#[test]
fn read_list_missing_key_is_empty() {
    let props = object(json!({ "title": "x" }));
    let cards: Vec<Flashcard> = read_list(&props, "cards").unwrap();
    assert!(cards.is_empty());
}

#[test]
fn hotspot_coordinates_parse() {
    let props = object(json!({ "hotspots": [{ "id": 7, "x": 0.25, "y": "0.5", "label": "Hotspot 1" }] }));
    let markers: Vec<HotspotMarker> = read_list(&props, "hotspots").unwrap();
    assert_eq!(markers[0].id, "7");
    assert!((markers[0].x - 0.25).abs() < f64::EPSILON);
    assert!((markers[0].y - 0.5).abs() < f64::EPSILON);
    assert_eq!(markers[0].content, "");
}

#[test]
fn write_list_produces_array() {
    let cards = vec![Flashcard { id: "card-1".into(), front: "F".into(), back: "B".into() }];
    assert_eq!(write_list(&cards).unwrap(), json!([{ "id": "card-1", "front": "F", "back": "B" }]));
}
