mod commands;
mod config;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use lesson::builder::{BuilderError, LessonBuilder, Notice};
use lesson::editor::EditError;
use lesson::kind::UnknownCategory;
use lesson::store::{FileBackend, LessonStore, StoreError};

use crate::config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Category(#[from] UnknownCategory),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("positions start at 1")]
    ZeroPosition,
    #[error("no slide {0}")]
    NoSlide(usize),
    #[error("component not found: {0}")]
    UnknownComponent(String),
    #[error("{title}: {description}")]
    Rejected { title: String, description: String },
}

impl From<Notice> for CliError {
    fn from(notice: Notice) -> Self {
        Self::Rejected { title: notice.title, description: notice.description }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lesson-builder", about = "Build and play interactive slide lessons")]
struct Cli {
    /// Directory holding the lesson snapshot.
    #[arg(long, env = "LESSON_HOME", global = true)]
    home: Option<PathBuf>,

    /// Seed for playback shuffles.
    #[arg(long, env = "LESSON_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lesson metadata and slide list.
    Show,
    /// Update lesson metadata.
    Meta(MetaArgs),
    Slide(SlideCommand),
    Component(ComponentCommand),
    /// Browse the component palette.
    Catalog {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Write the lesson as pretty JSON.
    Export {
        /// Output path; defaults to `<slug>.json`. Use `-` for stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the lesson with one read from a JSON file.
    Import { path: PathBuf },
    /// Start over from the starter lesson.
    Reset,
    /// Interactive playback on stdin/stdout.
    Play {
        /// Slide to start on (1-based).
        #[arg(long, default_value_t = 1)]
        from: usize,
    },
}

#[derive(Args, Debug, Default)]
struct MetaArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    level: Option<String>,
    /// Expected duration in minutes.
    #[arg(long)]
    duration: Option<u32>,
}

#[derive(Args, Debug)]
struct SlideCommand {
    #[command(subcommand)]
    command: SlideSubcommand,
}

/// Slide positions are 1-based.
#[derive(Subcommand, Debug)]
enum SlideSubcommand {
    Add,
    Delete { index: usize },
    Move { from: usize, to: usize },
    Rename { index: usize, title: String },
    /// Render one slide in author mode.
    Select { index: usize },
}

#[derive(Args, Debug)]
struct ComponentCommand {
    #[command(subcommand)]
    command: ComponentSubcommand,
}

#[derive(Subcommand, Debug)]
enum ComponentSubcommand {
    /// Add a component from the palette.
    Add {
        /// Type tag, e.g. `quiz` or `matchingPairs`.
        kind: String,
        #[arg(long, default_value_t = 1)]
        slide: usize,
        /// JSON object merged over the registry defaults.
        #[arg(long)]
        props: Option<String>,
    },
    /// Edit one property. Collections take a JSON op, e.g. `{"op":"add"}`.
    Set { id: String, prop: String, value: String },
    Delete { id: String },
    Move {
        from: usize,
        to: usize,
        #[arg(long, default_value_t = 1)]
        slide: usize,
    },
    List {
        #[arg(long)]
        slide: Option<usize>,
    },
    /// Editable fields of a component.
    Fields { id: String },
}

fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("warning: .env not loaded: {err}");
        }
    }
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config.with_overrides(cli.home, cli.seed),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Command) -> Result<(), CliError> {
    let store = LessonStore::load(FileBackend::new(&config.home));
    let mut builder = LessonBuilder::new(store);
    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    commands::dispatch(&mut builder, config, command, &mut input, &mut out)
}
