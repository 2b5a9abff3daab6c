//! Command dispatch for the `lesson` binary.
//!
//! Positions on the command line are 1-based; the library is 0-based.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lesson::builder::{LessonBuilder, Notice};
use lesson::doc::{MetadataPatch, Props, Slide};
use lesson::editor::{self, Edit, EditError, Widget};
use lesson::kind::{Category, ComponentType};
use lesson::play::score::total_possible;
use lesson::play::session::PlaybackSession;
use lesson::registry;
use lesson::render::{Mode, component_label, render_slide};
use lesson::store::SnapshotBackend;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::{CliError, Command, ComponentSubcommand, MetaArgs, SlideSubcommand, repl};

pub(crate) fn dispatch<B: SnapshotBackend>(
    builder: &mut LessonBuilder<B>,
    config: &Config,
    command: Command,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Show => show(builder, out),
        Command::Meta(args) => meta(builder, args, out),
        Command::Slide(slide) => run_slide(builder, slide.command, out),
        Command::Component(component) => run_component(builder, component.command, out),
        Command::Catalog { category, search } => catalog(category.as_deref(), search.as_deref(), out),
        Command::Export { out: path } => export(builder, path.as_deref(), out),
        Command::Import { path } => {
            let text = fs::read_to_string(&path)?;
            notify(out, &builder.import(&text))
        }
        Command::Reset => notify(out, &builder.reset()),
        Command::Play { from } => {
            let start = position(from)?;
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut session = PlaybackSession::start(builder.lesson().clone(), start, rng);
            repl::run(&mut session, input, out)?;
            Ok(())
        }
    }
}

/// Convert a 1-based position.
fn position(n: usize) -> Result<usize, CliError> {
    n.checked_sub(1).ok_or(CliError::ZeroPosition)
}

/// Print `notice`; destructive notices become errors.
fn notify(out: &mut impl Write, notice: &Notice) -> Result<(), CliError> {
    if notice.is_destructive() {
        return Err(notice.clone().into());
    }
    writeln!(out, "{}: {}", notice.title, notice.description)?;
    Ok(())
}

fn show<B: SnapshotBackend>(builder: &LessonBuilder<B>, out: &mut impl Write) -> Result<(), CliError> {
    let lesson = builder.lesson();
    writeln!(out, "{}", lesson.title)?;
    if !lesson.description.is_empty() {
        writeln!(out, "{}", lesson.description)?;
    }
    writeln!(out, "by {} | {} | {} min", lesson.author, lesson.level, lesson.duration)?;
    writeln!(out, "points available: {}", total_possible(lesson))?;
    writeln!(out)?;
    for (i, slide) in lesson.slides.iter().enumerate() {
        writeln!(out, "{:>3}. {} ({} components)", i + 1, slide.title, slide.components.len())?;
    }
    Ok(())
}

fn meta<B: SnapshotBackend>(builder: &mut LessonBuilder<B>, args: MetaArgs, out: &mut impl Write) -> Result<(), CliError> {
    let patch = MetadataPatch {
        title: args.title,
        description: args.description,
        author: args.author,
        level: args.level,
        duration: args.duration,
    };
    if patch.is_empty() {
        writeln!(out, "nothing to update")?;
        return Ok(());
    }
    builder.update_metadata(&patch);
    writeln!(out, "updated {}", builder.lesson().title)?;
    Ok(())
}

// =============================================================================
// SLIDES
// =============================================================================

fn run_slide<B: SnapshotBackend>(
    builder: &mut LessonBuilder<B>,
    command: SlideSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        SlideSubcommand::Add => notify(out, &builder.add_slide()),
        SlideSubcommand::Delete { index } => {
            let notice = builder.delete_slide(position(index)?);
            notify(out, &notice)
        }
        SlideSubcommand::Move { from, to } => {
            builder.reorder_slides(position(from)?, position(to)?);
            writeln!(out, "moved slide {from} to {}", builder.current_index() + 1)?;
            Ok(())
        }
        SlideSubcommand::Rename { index, title } => {
            builder.rename_slide(position(index)?, &title)?;
            writeln!(out, "renamed slide {index} to {title}")?;
            Ok(())
        }
        SlideSubcommand::Select { index } => {
            if !builder.select_slide(position(index)?) {
                return Err(CliError::NoSlide(index));
            }
            if let Some(slide) = builder.current_slide() {
                for line in render_slide(slide, Mode::Author) {
                    writeln!(out, "{line}")?;
                }
            }
            Ok(())
        }
    }
}

// =============================================================================
// COMPONENTS
// =============================================================================

fn run_component<B: SnapshotBackend>(
    builder: &mut LessonBuilder<B>,
    command: ComponentSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        ComponentSubcommand::Add { kind, slide, props } => {
            let overrides = match props {
                Some(text) => serde_json::from_str::<Props>(&text)?,
                None => Props::new(),
            };
            let id = builder.add_component(&ComponentType::parse(&kind), overrides, Some(position(slide)?))?;
            writeln!(out, "{id}")?;
            Ok(())
        }
        ComponentSubcommand::Set { id, prop, value } => {
            let component = builder.lesson().component(&id).ok_or_else(|| CliError::UnknownComponent(id.clone()))?;
            let definition = registry::lookup(&component.kind)
                .ok_or_else(|| EditError::UnknownComponentType(component.kind.to_string()))?;
            let property = definition.property(&prop).ok_or_else(|| EditError::UnknownProperty(prop.clone()))?;
            let edit = Edit::from_text(property, &value)?;
            builder.edit_component(&id, &prop, &edit)?;
            writeln!(out, "updated {id}.{prop}")?;
            Ok(())
        }
        ComponentSubcommand::Delete { id } => {
            builder.delete_component(&id)?;
            writeln!(out, "deleted {id}")?;
            Ok(())
        }
        ComponentSubcommand::Move { from, to, slide } => {
            builder.reorder_components(Some(position(slide)?), position(from)?, position(to)?)?;
            writeln!(out, "moved component {from} to {to}")?;
            Ok(())
        }
        ComponentSubcommand::List { slide } => {
            let slides: Vec<(usize, &Slide)> = match slide {
                Some(n) => {
                    let index = position(n)?;
                    let slide = builder.lesson().slide(index).ok_or(CliError::NoSlide(n))?;
                    vec![(index, slide)]
                }
                None => builder.lesson().slides.iter().enumerate().collect(),
            };
            for (index, slide) in slides {
                writeln!(out, "slide {}: {}", index + 1, slide.title)?;
                for (i, component) in slide.components.iter().enumerate() {
                    writeln!(out, "{:>3}. {}  {}", i + 1, component.id, component_label(component))?;
                }
            }
            Ok(())
        }
        ComponentSubcommand::Fields { id } => {
            let component = builder.lesson().component(&id).ok_or_else(|| CliError::UnknownComponent(id.clone()))?;
            let definition = registry::lookup(&component.kind)
                .ok_or_else(|| EditError::UnknownComponentType(component.kind.to_string()))?;
            for field in editor::fields(component, definition) {
                let required = if field.required { "*" } else { "" };
                let value = match &field.value {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                writeln!(out, "{}{required} ({}) [{}] = {value}", field.name, field.label, widget_label(&field.widget))?;
                if let Some(description) = field.description {
                    writeln!(out, "    {description}")?;
                }
            }
            Ok(())
        }
    }
}

fn widget_label(widget: &Widget) -> String {
    match widget {
        Widget::Text { .. } => "text".into(),
        Widget::Number { min, max, .. } => match (min, max) {
            (Some(min), Some(max)) => format!("number {min}..{max}"),
            _ => "number".into(),
        },
        Widget::Switch => "switch".into(),
        Widget::Select { options } | Widget::MultiSelect { options } => {
            let keys: Vec<String> = options.iter().map(registry::SelectOption::key).collect();
            let name = if matches!(widget, Widget::Select { .. }) { "select" } else { "multi-select" };
            format!("{name} {}", keys.join("|"))
        }
        Widget::RichText => "rich text".into(),
        Widget::Media(kind) => format!("media {kind:?}").to_lowercase(),
        Widget::Color => "color".into(),
        Widget::Json => "json".into(),
        Widget::Collection(editor) => format!("collection {editor:?}"),
        Widget::Unsupported => "unsupported".into(),
    }
}

// =============================================================================
// PALETTE / FILES
// =============================================================================

fn catalog(category: Option<&str>, search: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    let category = category.map(Category::from_str).transpose()?;
    let matches = registry::filter(search.unwrap_or_default(), category);
    if matches.is_empty() {
        writeln!(out, "no components match")?;
    }
    let mut current = None;
    for definition in matches {
        if current != Some(definition.category) {
            writeln!(out, "[{}]", definition.category)?;
            current = Some(definition.category);
        }
        writeln!(out, "  {} {:<16} {}", definition.icon, definition.kind.as_str(), definition.description)?;
    }
    Ok(())
}

fn export<B: SnapshotBackend>(builder: &LessonBuilder<B>, path: Option<&Path>, out: &mut impl Write) -> Result<(), CliError> {
    let export = builder.export()?;
    if path == Some(Path::new("-")) {
        writeln!(out, "{}", export.json)?;
        return Ok(());
    }
    let target = path.map_or_else(|| PathBuf::from(&export.file_name), Path::to_path_buf);
    fs::write(&target, &export.json)?;
    if path.is_some() {
        writeln!(out, "{}: Saved as {}", export.notice.title, target.display())?;
        return Ok(());
    }
    notify(out, &export.notice)
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
