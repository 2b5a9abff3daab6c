use serde_json::json;

use super::*;
use crate::doc::object;
use crate::editor::CollectionOp;
use crate::editor::collections::PairOp;
use crate::store::MemoryBackend;

fn builder() -> LessonBuilder<MemoryBackend> {
    LessonBuilder::new(LessonStore::load(MemoryBackend::new()))
}

fn with_slides(count: usize) -> LessonBuilder<MemoryBackend> {
    let mut builder = builder();
    for _ in 1..count {
        builder.add_slide();
    }
    builder
}

fn titles(builder: &LessonBuilder<MemoryBackend>) -> Vec<&str> {
    builder.lesson().slides.iter().map(|s| s.title.as_str()).collect()
}

// =============================================================
// Slides
// =============================================================

#[test]
fn add_slide_selects_it_and_saves() {
    let mut builder = builder();
    let notice = builder.add_slide();
    assert_eq!(notice.title, "Slide added");
    assert_eq!(notice.description, "Added new slide: Slide 2");
    assert_eq!(builder.current_index(), 1);
    let saved = builder.store().backend().get(crate::consts::SNAPSHOT_KEY).unwrap();
    assert!(saved.contains("Slide 2"));
}

#[test]
fn last_slide_cannot_be_deleted() {
    let mut builder = builder();
    let before = builder.lesson().clone();
    let notice = builder.delete_slide(0);
    assert_eq!(notice.title, "Cannot delete slide");
    assert!(notice.is_destructive());
    assert_eq!(builder.lesson(), &before);
}

#[test]
fn delete_slide_adjusts_selection() {
    let mut builder = with_slides(3);
    assert_eq!(builder.current_index(), 2);
    let notice = builder.delete_slide(1);
    assert_eq!(notice.description, "Deleted slide: Slide 2");
    assert_eq!(builder.current_index(), 1);
    assert_eq!(titles(&builder), vec!["Introduction", "Slide 3"]);

    builder.select_slide(0);
    builder.delete_slide(1);
    assert_eq!(builder.current_index(), 0);
}

#[test]
fn delete_missing_slide_is_rejected() {
    let mut builder = with_slides(2);
    let notice = builder.delete_slide(7);
    assert!(notice.is_destructive());
    assert_eq!(builder.lesson().slides.len(), 2);
}

#[test]
fn reorder_selects_destination() {
    let mut builder = with_slides(3);
    builder.reorder_slides(0, 2);
    assert_eq!(titles(&builder), vec!["Slide 2", "Slide 3", "Introduction"]);
    assert_eq!(builder.current_index(), 2);
}

#[test]
fn rename_and_select() {
    let mut builder = with_slides(2);
    builder.rename_slide(0, "Welcome").unwrap();
    assert_eq!(titles(&builder)[0], "Welcome");
    assert!(builder.rename_slide(5, "x").is_err());
    assert!(!builder.select_slide(9));
    assert!(builder.select_slide(0));
}

#[test]
fn metadata_updates_touch_the_lesson() {
    let mut builder = builder();
    builder.update_metadata(&MetadataPatch { author: Some("Ada".into()), ..MetadataPatch::default() });
    assert_eq!(builder.lesson().author, "Ada");
    assert_eq!(builder.lesson().slides.len(), 1);
}

// =============================================================
// Components
// =============================================================

#[test]
fn added_component_is_selected_for_editing() {
    let mut builder = with_slides(2);
    let id = builder.add_component(&ComponentType::Quiz, Props::new(), Some(0)).unwrap();
    assert_eq!(builder.editing(), Some(id.as_str()));
    assert_eq!(builder.current_index(), 0);
    assert_eq!(builder.lesson().locate_component(&id), Some((0, 2)));
}

#[test]
fn unknown_component_type_is_rejected() {
    let mut builder = builder();
    let err = builder.add_component(&ComponentType::parse("hologram"), Props::new(), None).unwrap_err();
    assert!(matches!(err, BuilderError::Doc(DocError::UnknownComponentType(_))));
}

#[test]
fn edits_route_through_the_editor() {
    let mut builder = builder();
    let id = builder
        .add_component(&ComponentType::Heading, object(json!({ "content": "Old" })), None)
        .unwrap();
    builder.edit_component(&id, "content", &Edit::Text("New".into())).unwrap();
    assert_eq!(builder.lesson().component(&id).unwrap().props["content"], json!("New"));

    let matching = builder.add_component(&ComponentType::MatchingPairs, Props::new(), None).unwrap();
    let pairs = |b: &LessonBuilder<MemoryBackend>| b.lesson().component(&matching).unwrap().props["pairs"].clone();
    builder
        .edit_component(&matching, "pairs", &Edit::Collection(CollectionOp::Pairs(PairOp::Delete { index: 0 })))
        .unwrap();
    assert_eq!(pairs(&builder).as_array().map(Vec::len), Some(2));
    let err = builder
        .edit_component(&matching, "pairs", &Edit::Collection(CollectionOp::Pairs(PairOp::Delete { index: 0 })))
        .unwrap_err();
    assert!(matches!(err, BuilderError::Edit(EditError::Minimum { .. })));
    assert_eq!(pairs(&builder).as_array().map(Vec::len), Some(2));
}

#[test]
fn deleting_edited_component_clears_selection() {
    let mut builder = builder();
    let id = builder.add_component(&ComponentType::Divider, Props::new(), None).unwrap();
    builder.delete_component(&id).unwrap();
    assert_eq!(builder.editing(), None);
    assert!(builder.lesson().component(&id).is_none());
    assert!(builder.delete_component(&id).is_err());
}

#[test]
fn components_reorder_on_current_slide() {
    let mut builder = builder();
    let id = builder.add_component(&ComponentType::Divider, Props::new(), None).unwrap();
    builder.reorder_components(None, 2, 0).unwrap();
    assert_eq!(builder.current_slide().unwrap().components[0].id, id);
}

// =============================================================
// Files
// =============================================================

#[test]
fn export_names_file_after_title() {
    let mut builder = builder();
    builder.update_metadata(&MetadataPatch { title: Some("Solar System".into()), ..MetadataPatch::default() });
    let export = builder.export().unwrap();
    assert_eq!(export.file_name, "solar-system.json");
    assert_eq!(export.notice.description, "Saved as solar-system.json");
    assert!(export.json.contains("Solar System"));
}

#[test]
fn import_resets_selection() {
    let mut source = with_slides(2);
    source.update_metadata(&MetadataPatch { title: Some("Shared".into()), ..MetadataPatch::default() });
    let json = source.export().unwrap().json;

    let mut builder = with_slides(3);
    let notice = builder.import(&json);
    assert_eq!(notice.title, "Lesson imported");
    assert_eq!(notice.description, "Loaded lesson: Shared");
    assert_eq!(builder.current_index(), 0);
    assert_eq!(builder.lesson(), source.lesson());
}

#[test]
fn bad_import_keeps_lesson() {
    let mut builder = with_slides(2);
    let before = builder.lesson().clone();
    let notice = builder.import("not json");
    assert_eq!(notice.title, "Import failed");
    assert!(notice.is_destructive());
    assert_eq!(builder.lesson(), &before);
    assert_eq!(builder.current_index(), 1);
}

#[test]
fn reset_restores_starter() {
    let mut builder = with_slides(3);
    builder.reset();
    assert_eq!(builder.lesson().slides.len(), 1);
    assert_eq!(builder.current_index(), 0);
}
