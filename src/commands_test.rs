use std::io::Cursor;
use std::path::PathBuf;

use lesson::consts::SNAPSHOT_KEY;
use lesson::store::{LessonStore, MemoryBackend};

use super::*;

fn builder() -> LessonBuilder<MemoryBackend> {
    LessonBuilder::new(LessonStore::load(MemoryBackend::new()))
}

fn config() -> Config {
    Config { home: PathBuf::from("unused"), log_level: tracing::Level::INFO, seed: Some(1) }
}

fn exec(builder: &mut LessonBuilder<MemoryBackend>, command: Command) -> Result<String, CliError> {
    exec_with_input(builder, command, "")
}

fn exec_with_input(
    builder: &mut LessonBuilder<MemoryBackend>,
    command: Command,
    input: &str,
) -> Result<String, CliError> {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    dispatch(builder, &config(), command, &mut input, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn slide(command: SlideSubcommand) -> Command {
    Command::Slide(crate::SlideCommand { command })
}

fn component(command: ComponentSubcommand) -> Command {
    Command::Component(crate::ComponentCommand { command })
}

// =============================================================================
// Lesson
// =============================================================================

#[test]
fn show_lists_metadata_and_slides() {
    let mut b = builder();
    let out = exec(&mut b, Command::Show).unwrap();
    assert!(out.starts_with("Untitled Lesson\n"));
    assert!(out.contains("points available: 0"));
    assert!(out.contains("  1. Introduction (2 components)"));
}

#[test]
fn meta_updates_and_saves() {
    let mut b = builder();
    let args = MetaArgs { title: Some("Fractions".into()), ..MetaArgs::default() };
    let out = exec(&mut b, Command::Meta(args)).unwrap();
    assert_eq!(out, "updated Fractions\n");
    assert!(b.store().backend().get(SNAPSHOT_KEY).is_some_and(|s| s.contains("Fractions")));
}

#[test]
fn empty_meta_is_a_no_op() {
    let mut b = builder();
    assert_eq!(exec(&mut b, Command::Meta(MetaArgs::default())).unwrap(), "nothing to update\n");
}

#[test]
fn reset_reports_notice() {
    let mut b = builder();
    assert_eq!(exec(&mut b, Command::Reset).unwrap(), "Lesson reset: Started a new lesson\n");
}

// =============================================================================
// Slides
// =============================================================================

#[test]
fn deleting_the_last_slide_is_rejected() {
    let mut b = builder();
    let err = exec(&mut b, slide(SlideSubcommand::Delete { index: 1 })).unwrap_err();
    assert!(matches!(err, CliError::Rejected { ref title, .. } if title == "Cannot delete slide"));
    assert_eq!(b.lesson().slides.len(), 1);
}

#[test]
fn add_then_delete_slide() {
    let mut b = builder();
    let out = exec(&mut b, slide(SlideSubcommand::Add)).unwrap();
    assert!(out.starts_with("Slide added: "));
    assert_eq!(b.lesson().slides.len(), 2);

    exec(&mut b, slide(SlideSubcommand::Delete { index: 2 })).unwrap();
    assert_eq!(b.lesson().slides.len(), 1);
}

#[test]
fn zero_position_is_an_error() {
    let mut b = builder();
    let err = exec(&mut b, slide(SlideSubcommand::Delete { index: 0 })).unwrap_err();
    assert!(matches!(err, CliError::ZeroPosition));
}

#[test]
fn select_renders_slide_in_author_mode() {
    let mut b = builder();
    let out = exec(&mut b, slide(SlideSubcommand::Select { index: 1 })).unwrap();
    assert!(out.starts_with("== Introduction =="));
    assert!(out.contains("# Welcome to your new lesson"));

    let err = exec(&mut b, slide(SlideSubcommand::Select { index: 5 })).unwrap_err();
    assert!(matches!(err, CliError::NoSlide(5)));
}

#[test]
fn rename_slide() {
    let mut b = builder();
    exec(&mut b, slide(SlideSubcommand::Rename { index: 1, title: "Intro".into() })).unwrap();
    assert_eq!(b.lesson().slides[0].title, "Intro");
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn add_set_and_list_component() {
    let mut b = builder();
    let id = exec(&mut b, component(ComponentSubcommand::Add { kind: "heading".into(), slide: 1, props: None }))
        .unwrap()
        .trim()
        .to_owned();
    assert_eq!(b.lesson().slides[0].components.len(), 3);

    exec(
        &mut b,
        component(ComponentSubcommand::Set { id: id.clone(), prop: "content".into(), value: "Chapter 1".into() }),
    )
    .unwrap();
    assert_eq!(b.lesson().component(&id).unwrap().props["content"], "Chapter 1");

    let out = exec(&mut b, component(ComponentSubcommand::List { slide: Some(1) })).unwrap();
    assert!(out.starts_with("slide 1: Introduction\n"));
    assert!(out.contains(&format!("  3. {id}")));
}

#[test]
fn add_component_merges_props() {
    let mut b = builder();
    let props = Some(r#"{"content":"Custom","level":3}"#.to_owned());
    let id = exec(&mut b, component(ComponentSubcommand::Add { kind: "heading".into(), slide: 1, props }))
        .unwrap()
        .trim()
        .to_owned();
    let props = &b.lesson().component(&id).unwrap().props;
    assert_eq!(props["content"], "Custom");
    assert_eq!(props["level"], 3);
}

#[test]
fn add_component_rejects_bad_json() {
    let mut b = builder();
    let props = Some("{not json".to_owned());
    let err = exec(&mut b, component(ComponentSubcommand::Add { kind: "heading".into(), slide: 1, props }))
        .unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn set_on_unknown_component_fails() {
    let mut b = builder();
    let err = exec(
        &mut b,
        component(ComponentSubcommand::Set { id: "nope".into(), prop: "content".into(), value: "x".into() }),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::UnknownComponent(ref id) if id == "nope"));
}

#[test]
fn fields_describe_editable_properties() {
    let mut b = builder();
    let id = b.lesson().slides[0].components[0].id.clone();
    let out = exec(&mut b, component(ComponentSubcommand::Fields { id })).unwrap();
    assert!(out.contains("content* (Text) [text] = Welcome to your new lesson"));
}

#[test]
fn delete_component() {
    let mut b = builder();
    let id = b.lesson().slides[0].components[0].id.clone();
    exec(&mut b, component(ComponentSubcommand::Delete { id: id.clone() })).unwrap();
    assert!(b.lesson().component(&id).is_none());
}

// =============================================================================
// Catalog / export / play
// =============================================================================

#[test]
fn catalog_groups_by_category() {
    let mut buf = Vec::new();
    catalog(Some("interactive"), None, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("[interactive]\n"));
    assert!(text.contains(" quiz "));
}

#[test]
fn catalog_rejects_unknown_category() {
    let err = catalog(Some("toys"), None, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Category(_)));
}

#[test]
fn catalog_reports_no_matches() {
    let mut buf = Vec::new();
    catalog(None, Some("zzzz-nothing"), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "no components match\n");
}

#[test]
fn export_to_stdout() {
    let mut b = builder();
    let out = exec(&mut b, Command::Export { out: Some(PathBuf::from("-")) }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["title"], "Untitled Lesson");
}

#[test]
fn export_then_import_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lesson.json");
    let mut b = builder();
    exec(&mut b, Command::Meta(MetaArgs { title: Some("Saved".into()), ..MetaArgs::default() })).unwrap();
    let out = exec(&mut b, Command::Export { out: Some(path.clone()) }).unwrap();
    assert!(out.starts_with("Lesson exported: Saved as "));

    let mut other = builder();
    let out = exec(&mut other, Command::Import { path }).unwrap();
    assert_eq!(out, "Lesson imported: Loaded lesson: Saved\n");
    assert_eq!(other.lesson().title, "Saved");
}

#[test]
fn import_of_garbage_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not a lesson").unwrap();
    let mut b = builder();
    let err = exec(&mut b, Command::Import { path }).unwrap_err();
    assert!(matches!(err, CliError::Rejected { ref title, .. } if title == "Import failed"));
    assert_eq!(b.lesson().title, "Untitled Lesson");
}

#[test]
fn play_runs_the_shell() {
    let mut b = builder();
    let out = exec_with_input(&mut b, Command::Play { from: 1 }, "score\nquit\n").unwrap();
    assert!(out.starts_with("--- Slide 1/1: Introduction ---"));
    assert!(out.contains("Score: 0 / 0 (0%)"));
}
