//! Line-oriented playback shell.
//!
//! Components on the current slide are addressed by their 1-based position:
//! `1 select b`, `2 left 3`, `3 move 1 2`, `4 flip`, `5 open h1`.

use std::io::{self, BufRead, Write};

use lesson::play::Outcome;
use lesson::play::flashcards::FlashcardIntent;
use lesson::play::hotspot::HotspotIntent;
use lesson::play::matching::{MatchingIntent, Side};
use lesson::play::ordering::OrderingIntent;
use lesson::play::quiz::QuizIntent;
use lesson::play::session::{Intent, PlaybackSession, Player};
use lesson::render::render_player;
use rand::Rng;

const HELP: &str = "\
commands: next | prev | goto N | show | score | restart | help | quit
component actions (N = position on the slide):
  quiz        N select ID | N submit | N next | N prev | N reset
  matching    N left ID | N right ID | N reset
  ordering    N move FROM TO | N submit | N reset
  flashcards  N flip | N next | N prev | N goto K | N reset
  hotspot     N open ID | N reset";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ReplError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("not a position: {0}")]
    BadNumber(String),
    #[error("no component {0} on this slide")]
    NoComponent(usize),
    #[error("component {0} is not interactive")]
    NotInteractive(usize),
    #[error("{kind} does not understand `{action}`")]
    UnknownAction { kind: &'static str, action: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReplCommand {
    Next,
    Previous,
    GoTo(usize),
    Show,
    Score,
    Restart,
    Help,
    Quit,
    /// Action on the component at 1-based `position`.
    Act { position: usize, action: String, args: Vec<String> },
}

/// Parse one input line. Blank lines are `Ok(None)`.
pub(crate) fn parse(line: &str) -> Result<Option<ReplCommand>, ReplError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let command = match head {
        "next" | "n" => ReplCommand::Next,
        "prev" | "p" => ReplCommand::Previous,
        "goto" | "g" => ReplCommand::GoTo(number(words.next(), "slide number")?),
        "show" | "s" => ReplCommand::Show,
        "score" => ReplCommand::Score,
        "restart" => ReplCommand::Restart,
        "help" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        _ => {
            let position = head.parse::<usize>().map_err(|_| ReplError::Unknown(head.to_owned()))?;
            let action = words.next().ok_or(ReplError::Missing("action"))?.to_owned();
            ReplCommand::Act { position, action, args: words.map(str::to_owned).collect() }
        }
    };
    Ok(Some(command))
}

/// Parse a 1-based position into a 0-based index.
fn number(word: Option<&str>, what: &'static str) -> Result<usize, ReplError> {
    let word = word.ok_or(ReplError::Missing(what))?;
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ReplError::BadNumber(word.to_owned())),
    }
}

fn word(args: &[String], what: &'static str) -> Result<String, ReplError> {
    args.first().cloned().ok_or(ReplError::Missing(what))
}

/// Translate a component action into an intent for `player`.
pub(crate) fn intent_for(player: &Player, position: usize, action: &str, args: &[String]) -> Result<Intent, ReplError> {
    let arg = |i: usize| args.get(i).map(String::as_str);
    let unknown = |kind| ReplError::UnknownAction { kind, action: action.to_owned() };
    Ok(match player {
        Player::Quiz(_) => Intent::Quiz(match action {
            "select" => QuizIntent::Select(word(args, "option id")?),
            "submit" => QuizIntent::Submit,
            "next" => QuizIntent::Next,
            "prev" => QuizIntent::Previous,
            "reset" => QuizIntent::Reset,
            _ => return Err(unknown("quiz")),
        }),
        Player::Matching(_) => Intent::Matching(match action {
            "left" => MatchingIntent::Pick(Side::Left, word(args, "pair id")?),
            "right" => MatchingIntent::Pick(Side::Right, word(args, "pair id")?),
            "reset" => MatchingIntent::Reset,
            _ => return Err(unknown("matching")),
        }),
        Player::Ordering(_) => Intent::Ordering(match action {
            "move" => OrderingIntent::Move { from: number(arg(0), "from")?, to: number(arg(1), "to")? },
            "submit" => OrderingIntent::Submit,
            "reset" => OrderingIntent::Reset,
            _ => return Err(unknown("ordering")),
        }),
        Player::Flashcards(_) => Intent::Flashcards(match action {
            "flip" => FlashcardIntent::Flip,
            "next" => FlashcardIntent::Next,
            "prev" => FlashcardIntent::Previous,
            "goto" => FlashcardIntent::GoTo(number(arg(0), "card number")?),
            "reset" => FlashcardIntent::Reset,
            _ => return Err(unknown("flashcards")),
        }),
        Player::Hotspot(_) => Intent::Hotspot(match action {
            "open" => HotspotIntent::Discover(word(args, "hotspot id")?),
            "reset" => HotspotIntent::Reset,
            _ => return Err(unknown("hotspot")),
        }),
        Player::ScoreBoard { .. } | Player::Content(_) | Player::Fallback { .. } => {
            return Err(ReplError::NotInteractive(position));
        }
    })
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Ignored => "(no change)".into(),
        Outcome::Updated => String::new(),
        Outcome::Answered { correct: true, points } => format!("Correct! +{points}"),
        Outcome::Answered { correct: false, .. } => "Not quite.".into(),
        Outcome::Completed { points } => format!("Complete! +{points}"),
    }
}

fn write_slide<R: Rng>(session: &PlaybackSession<R>, out: &mut impl Write) -> io::Result<()> {
    let title = session.current_slide().map(|s| s.title.as_str()).unwrap_or_default();
    writeln!(out, "--- Slide {}/{}: {title} ---", session.current_index() + 1, session.slide_count())?;
    for (i, slot) in session.current_players().iter().enumerate() {
        for (n, line) in render_player(slot, session.scoreboard()).iter().enumerate() {
            if n == 0 {
                writeln!(out, "[{}] {line}", i + 1)?;
            } else {
                writeln!(out, "    {line}")?;
            }
        }
    }
    Ok(())
}

fn write_score<R: Rng>(session: &PlaybackSession<R>, out: &mut impl Write) -> io::Result<()> {
    let board = session.scoreboard();
    writeln!(out, "Score: {} / {} ({}%)", board.score(), board.total_possible(), board.percentage())
}

/// Run until `quit` or end of input.
pub(crate) fn run<R: Rng>(session: &mut PlaybackSession<R>, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write_slide(session, out)?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Score => write_score(session, out)?,
            ReplCommand::Show => write_slide(session, out)?,
            ReplCommand::Restart => {
                session.restart();
                write_slide(session, out)?;
            }
            ReplCommand::Next => {
                let moved = session.next_slide();
                after_move(session, moved, out)?;
            }
            ReplCommand::Previous => {
                let moved = session.previous_slide();
                after_move(session, moved, out)?;
            }
            ReplCommand::GoTo(index) => {
                let moved = session.go_to(index) || session.current_index() == index;
                after_move(session, moved, out)?;
            }
            ReplCommand::Act { position, action, args } => act(session, position, &action, &args, out)?,
        }
    }
    write_score(session, out)
}

fn after_move<R: Rng>(session: &PlaybackSession<R>, moved: bool, out: &mut impl Write) -> io::Result<()> {
    if moved {
        write_slide(session, out)
    } else {
        writeln!(out, "(no such slide)")
    }
}

fn act<R: Rng>(
    session: &mut PlaybackSession<R>,
    position: usize,
    action: &str,
    args: &[String],
    out: &mut impl Write,
) -> io::Result<()> {
    let target = position
        .checked_sub(1)
        .and_then(|i| session.current_players().get(i))
        .ok_or(ReplError::NoComponent(position))
        .and_then(|slot| Ok((slot.component.id.clone(), intent_for(&slot.player, position, action, args)?)));
    let (id, intent) = match target {
        Ok(target) => target,
        Err(err) => return writeln!(out, "{err}"),
    };
    match session.dispatch(&id, &intent) {
        Ok(outcome) => {
            while session.tick() {}
            let message = describe(outcome);
            if !message.is_empty() {
                writeln!(out, "{message}")?;
            }
            if outcome.changed() {
                write_slide(session, out)?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "{err}"),
    }
}

#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;
