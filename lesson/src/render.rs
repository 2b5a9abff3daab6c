//! Text rendering of components.
//!
//! Author mode shows a static summary of the authored props. Playback mode
//! shows a player's live state. Both resolve through [`ComponentProps`], so
//! every type renders: kinds without a dedicated view and unreadable props
//! go through the fallback.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::doc::{Component, Slide};
use crate::kind::ComponentType;
use crate::play::flashcards::FlashcardSession;
use crate::play::hotspot::HotspotSession;
use crate::play::matching::{MatchingSession, Side};
use crate::play::ordering::OrderingSession;
use crate::play::quiz::{OptionMark, QuizSession};
use crate::play::score::{ScoreTicker, Scoreboard, percent};
use crate::play::session::{Player, PlayerSlot};
use crate::props::{
    BulletListProps, ComponentProps, DragDropProps, FlashcardsProps, HeadingProps, HotspotProps, ImageProps,
    ListStyle, MatchingProps, ParagraphProps, QuizProps, ScoreBoardProps,
};

/// Sample values shown by a score board outside playback.
const SAMPLE_SCORE: u32 = 75;
const SAMPLE_TOTAL: u32 = 100;

/// Which surface a component is drawn for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Builder canvas: static summary of the props.
    #[default]
    Author,
    /// Learner view: the component's initial interactive state.
    Playback,
}

/// Render one component.
///
/// Playback mode starts a throwaway player with a fixed seed; use
/// [`render_player`] to draw a live session.
#[must_use]
pub fn render_component(component: &Component, mode: Mode) -> Vec<String> {
    match mode {
        Mode::Author => author(component),
        Mode::Playback => {
            let mut rng = StdRng::seed_from_u64(0);
            let player = Player::for_component(component, 0, &mut rng);
            let slot = PlayerSlot { component: component.clone(), player };
            render_player(&slot, &Scoreboard::default())
        }
    }
}

/// Render a slide title followed by each component, separated by blank lines.
#[must_use]
pub fn render_slide(slide: &Slide, mode: Mode) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", slide.title)];
    if slide.components.is_empty() {
        lines.push("(empty slide)".into());
    }
    for component in &slide.components {
        lines.push(String::new());
        lines.extend(render_component(component, mode));
    }
    lines
}

fn author(component: &Component) -> Vec<String> {
    match ComponentProps::from_component(component) {
        Ok(ComponentProps::Quiz(p)) => quiz_summary(&p),
        Ok(ComponentProps::MatchingPairs(p)) => matching_summary(&p),
        Ok(ComponentProps::DragDrop(p)) => ordering_summary(&p),
        Ok(ComponentProps::Flashcards(p)) => flashcards_summary(&p),
        Ok(ComponentProps::Hotspot(p)) => hotspot_summary(&p),
        Ok(ComponentProps::ScoreBoard(p)) => score_board(&p, SAMPLE_SCORE, SAMPLE_TOTAL),
        Ok(ComponentProps::Opaque(_)) | Err(_) => fallback(component, true),
        Ok(content) => content_lines(&content),
    }
}

/// Render a live player against the session scoreboard.
#[must_use]
pub fn render_player(slot: &PlayerSlot, scoreboard: &Scoreboard) -> Vec<String> {
    match &slot.player {
        Player::Quiz(quiz) => quiz_view(quiz),
        Player::Matching(board) => matching_view(&slot.component, board),
        Player::Ordering(list) => ordering_view(&slot.component, list),
        Player::Flashcards(deck) => flashcards_view(&slot.component, deck),
        Player::Hotspot(spots) => hotspot_view(&slot.component, spots),
        Player::ScoreBoard { props, ticker } => live_score_board(props, ticker, scoreboard),
        Player::Content(content) => content_lines(content),
        Player::Fallback { reason } => {
            let mut lines = fallback(&slot.component, false);
            if let Some(reason) = reason {
                lines.push(format!("({reason})"));
            }
            lines
        }
    }
}

// =============================================================================
// CONTENT
// =============================================================================

fn content_lines(props: &ComponentProps) -> Vec<String> {
    match props {
        ComponentProps::Heading(p) => heading(p),
        ComponentProps::Paragraph(p) => paragraph(p),
        ComponentProps::BulletList(p) => bullet_list(p),
        ComponentProps::Image(p) => image(p),
        _ => Vec::new(),
    }
}

fn heading(props: &HeadingProps) -> Vec<String> {
    let marks = "#".repeat(usize::try_from(props.level()).unwrap_or(1));
    vec![format!("{marks} {}", props.content)]
}

fn paragraph(props: &ParagraphProps) -> Vec<String> {
    if props.content.trim().is_empty() {
        return vec!["(empty paragraph)".into()];
    }
    props.content.lines().map(str::to_owned).collect()
}

fn bullet_list(props: &BulletListProps) -> Vec<String> {
    if props.items.is_empty() {
        return vec!["(no items)".into()];
    }
    props
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| match props.style {
            ListStyle::Ordered => format!("{}. {item}", i + 1),
            ListStyle::Unordered => format!("- {item}"),
        })
        .collect()
}

fn image(props: &ImageProps) -> Vec<String> {
    let mut lines = if props.src.is_empty() {
        vec![format!("[image: {}] No image selected", props.alt)]
    } else {
        vec![format!("[image: {}] {} ({})", props.alt, props.src, props.width)]
    };
    if !props.caption.is_empty() {
        lines.push(props.caption.clone());
    }
    lines
}

fn fallback(component: &Component, with_props: bool) -> Vec<String> {
    let mut lines = vec![format!("{} component (not yet implemented)", component.kind)];
    if with_props {
        match serde_json::to_string_pretty(&component.props) {
            Ok(json) => lines.extend(json.lines().map(str::to_owned)),
            Err(err) => tracing::warn!(component = %component.id, error = %err, "props not printable"),
        }
    }
    lines
}

// =============================================================================
// AUTHOR SUMMARIES
// =============================================================================

fn quiz_summary(props: &QuizProps) -> Vec<String> {
    let questions = props.questions();
    if questions.is_empty() {
        return vec!["Quiz: No questions".into()];
    }
    let mut lines = vec![format!("Quiz ({} questions, {} points each)", questions.len(), props.points)];
    for (i, question) in questions.iter().enumerate() {
        lines.push(format!("Q{}. {}", i + 1, question.question));
        for option in &question.options {
            let mark = if option.is_correct { "[x]" } else { "[ ]" };
            lines.push(format!("  {mark} {}", option.text));
        }
        if !question.explanation.is_empty() {
            lines.push(format!("  Explanation: {}", question.explanation));
        }
    }
    lines
}

fn matching_summary(props: &MatchingProps) -> Vec<String> {
    let mut lines = vec![format!("{} ({} points)", props.title, props.points)];
    if props.pairs.is_empty() {
        lines.push("No pairs".into());
    }
    lines.extend(props.pairs.iter().map(|p| format!("  {} = {}", p.left, p.right)));
    lines
}

fn ordering_summary(props: &DragDropProps) -> Vec<String> {
    let mut lines = vec![format!("{} ({} points)", props.title, props.points)];
    let preview = OrderingSession::preview(props);
    if preview.items().is_empty() {
        lines.push("No items".into());
    }
    lines.extend(preview.items().iter().enumerate().map(|(i, item)| format!("  {}. {}", i + 1, item.text)));
    lines
}

fn flashcards_summary(props: &FlashcardsProps) -> Vec<String> {
    let mut lines = vec![props.title.clone()];
    if props.cards.is_empty() {
        lines.push("No flashcards available".into());
    }
    for card in &props.cards {
        lines.push(format!("  Front: {}", card.front));
        lines.push(format!("  Back: {}", card.back));
    }
    lines
}

fn hotspot_summary(props: &HotspotProps) -> Vec<String> {
    let mut lines = vec![props.title.clone()];
    if props.image.is_empty() {
        lines.push("[image] No image selected".into());
    } else {
        lines.push(format!("[image] {}", props.image));
    }
    lines.extend(props.hotspots.iter().map(|h| {
        format!("  {} ({:.0}%, {:.0}%): {}", h.label, h.x * 100.0, h.y * 100.0, h.content)
    }));
    lines
}

fn score_board(props: &ScoreBoardProps, score: u32, total: u32) -> Vec<String> {
    let mut lines = vec![props.title.clone()];
    if props.show_total {
        lines.push(format!("Score: {score} / {total}"));
    } else {
        lines.push(format!("Score: {score}"));
    }
    if props.show_percentage {
        lines.push(format!("{}%", percent(score, total)));
    }
    lines
}

// =============================================================================
// LIVE PLAYERS
// =============================================================================

fn quiz_view(quiz: &QuizSession) -> Vec<String> {
    let Some(question) = quiz.current_question() else {
        return vec!["Quiz: No questions".into()];
    };
    let mut lines = vec![
        format!("Question {} of {}", quiz.current_index() + 1, quiz.questions().len()),
        question.question.clone(),
    ];
    for option in &question.options {
        let mark = match quiz.option_mark(&option.id) {
            OptionMark::Neutral => "[ ]",
            OptionMark::Selected => "[*]",
            OptionMark::Correct => "[✓]",
            OptionMark::Incorrect => "[✗]",
        };
        lines.push(format!("  {mark} {}: {}", option.id, option.text));
    }
    if let Some(explanation) = quiz.explanation() {
        lines.push(format!("Explanation: {explanation}"));
    }
    lines.push(format!("Score: {}/{}", quiz.score(), quiz.total()));
    lines
}

fn title_of(component: &Component, fallback: &str) -> String {
    component
        .props
        .get("title")
        .and_then(serde_json::Value::as_str)
        .unwrap_or(fallback)
        .to_owned()
}

fn matching_view(component: &Component, board: &MatchingSession) -> Vec<String> {
    let mut lines = vec![title_of(component, "Match the items")];
    if board.pair_count() == 0 {
        lines.push("No pairs".into());
        return lines;
    }
    let mark = |side: Side, id: &str| {
        if board.is_matched(id) {
            "✓"
        } else if board.selection(side) == Some(id) {
            "*"
        } else {
            " "
        }
    };
    lines.push("Left:".into());
    lines.extend(board.left_items().iter().map(|p| format!("  [{}] {}: {}", mark(Side::Left, &p.id), p.id, p.left)));
    lines.push("Right:".into());
    lines.extend(board.right_items().iter().map(|p| format!("  [{}] {}: {}", mark(Side::Right, &p.id), p.id, p.right)));
    lines.push(format!("Matched: {} of {}", board.matched_count(), board.pair_count()));
    if board.is_complete() {
        lines.push("Great job! All matches are correct.".into());
    }
    lines
}

fn ordering_view(component: &Component, list: &OrderingSession) -> Vec<String> {
    let mut lines = vec![title_of(component, "Arrange in the correct order")];
    if list.items().is_empty() {
        lines.push("No items".into());
        return lines;
    }
    for (i, item) in list.items().iter().enumerate() {
        let mark = match (list.is_submitted(), list.in_place(i)) {
            (false, _) => "",
            (true, true) => " ✓",
            (true, false) => " ✗",
        };
        lines.push(format!("  {}. {}{mark}", i + 1, item.text));
    }
    if list.is_submitted() {
        lines.push(if list.is_correct() {
            "Great job! The order is correct.".into()
        } else {
            "The order is not correct. Try again!".into()
        });
    }
    lines
}

fn flashcards_view(component: &Component, deck: &FlashcardSession) -> Vec<String> {
    let mut lines = vec![title_of(component, "Flashcards")];
    let Some(face) = deck.visible_face() else {
        lines.push("No flashcards available".into());
        return lines;
    };
    lines.push(format!("Card {} of {}", deck.current_index() + 1, deck.len()));
    let side = if deck.is_flipped() { "Back" } else { "Front" };
    lines.push(format!("[{side}] {face}"));
    lines
}

fn hotspot_view(component: &Component, spots: &HotspotSession) -> Vec<String> {
    let mut lines = vec![title_of(component, "Interactive Image")];
    for marker in spots.markers() {
        let mark = if spots.is_discovered(&marker.id) { "✓" } else { " " };
        lines.push(format!("  [{mark}] {}: {}", marker.id, marker.label));
    }
    if let Some(active) = spots.active() {
        lines.push(format!("{}: {}", active.label, active.content));
    }
    lines.push(format!("Discovered: {} of {} hotspots", spots.discovered(), spots.total()));
    lines
}

fn live_score_board(props: &ScoreBoardProps, ticker: &ScoreTicker, scoreboard: &Scoreboard) -> Vec<String> {
    score_board(props, ticker.shown(), scoreboard.total_possible())
}

/// Label used by listings: the wire tag plus a short content hint.
#[must_use]
pub fn component_label(component: &Component) -> String {
    let hint = match ComponentProps::from_component(component) {
        Ok(ComponentProps::Heading(p)) => p.content,
        Ok(ComponentProps::Paragraph(p)) => p.content.lines().next().unwrap_or_default().to_owned(),
        Ok(ComponentProps::Quiz(p)) => format!("{} questions", p.questions().len()),
        Ok(ComponentProps::MatchingPairs(p)) => p.title,
        Ok(ComponentProps::DragDrop(p)) => p.title,
        Ok(ComponentProps::Flashcards(p)) => p.title,
        Ok(ComponentProps::Hotspot(p)) => p.title,
        Ok(ComponentProps::ScoreBoard(p)) => p.title,
        _ => String::new(),
    };
    match (&component.kind, hint.is_empty()) {
        (ComponentType::Unknown(tag), _) => format!("{tag} (unknown)"),
        (kind, true) => kind.to_string(),
        (kind, false) => format!("{kind}: {hint}"),
    }
}
