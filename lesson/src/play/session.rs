//! Playback session: one run through a lesson.
//!
//! The session owns a player per component of every slide, the slide
//! cursor, and the shared [`Scoreboard`]. Intents are routed to players by
//! component id; scored outcomes feed the scoreboard, and every score board
//! component on any slide is retargeted to the new total.
//!
//! Players are rebuilt from props at start, on [`PlaybackSession::restart`],
//! and for any component whose props changed in [`PlaybackSession::sync`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rand::Rng;

use super::Outcome;
use super::flashcards::{FlashcardIntent, FlashcardSession};
use super::hotspot::{HotspotIntent, HotspotSession};
use super::matching::{MatchingIntent, MatchingSession};
use super::ordering::{OrderingIntent, OrderingSession};
use super::quiz::{QuizIntent, QuizSession};
use super::score::{ScoreTicker, Scoreboard, total_possible};
use crate::doc::{Component, Lesson, Slide};
use crate::kind::ComponentType;
use crate::props::{ComponentProps, ScoreBoardProps};

/// Errors from routing an intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("component {component} ({kind}) does not accept this intent")]
    IntentMismatch { component: String, kind: ComponentType },
    #[error("component not found: {0}")]
    ComponentNotFound(String),
}

/// A learner intent addressed to one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Quiz(QuizIntent),
    Matching(MatchingIntent),
    Ordering(OrderingIntent),
    Flashcards(FlashcardIntent),
    Hotspot(HotspotIntent),
}

/// Live state of one component during playback.
#[derive(Debug, Clone, PartialEq)]
pub enum Player {
    Quiz(QuizSession),
    Matching(MatchingSession),
    Ordering(OrderingSession),
    Flashcards(FlashcardSession),
    Hotspot(HotspotSession),
    ScoreBoard { props: ScoreBoardProps, ticker: ScoreTicker },
    /// Non-interactive content with a dedicated renderer.
    Content(ComponentProps),
    /// Unknown type, a type without a renderer, or unreadable props.
    Fallback { reason: Option<String> },
}

impl Player {
    /// Build the player for `component`. Never fails: anything that cannot
    /// be played becomes a fallback.
    pub fn for_component<R: Rng + ?Sized>(component: &Component, score: u32, rng: &mut R) -> Self {
        let props = match ComponentProps::from_component(component) {
            Ok(props) => props,
            Err(err) => {
                tracing::warn!(component = %component.id, error = %err, "props unreadable; using fallback player");
                return Self::Fallback { reason: Some(err.to_string()) };
            }
        };
        match props {
            ComponentProps::Quiz(p) => Self::Quiz(QuizSession::new(&p, rng)),
            ComponentProps::MatchingPairs(p) => Self::Matching(MatchingSession::new(&p, rng)),
            ComponentProps::DragDrop(p) => Self::Ordering(OrderingSession::new(&p, rng)),
            ComponentProps::Flashcards(p) => Self::Flashcards(FlashcardSession::new(&p)),
            ComponentProps::Hotspot(p) => Self::Hotspot(HotspotSession::new(&p)),
            ComponentProps::ScoreBoard(p) => {
                let mut ticker = ScoreTicker::new(p.animation);
                ticker.retarget(score);
                Self::ScoreBoard { props: p, ticker }
            }
            ComponentProps::Opaque(_) => Self::Fallback { reason: None },
            content => Self::Content(content),
        }
    }

    /// Whether this player accepts learner intents.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Quiz(_) | Self::Matching(_) | Self::Ordering(_) | Self::Flashcards(_) | Self::Hotspot(_)
        )
    }

    fn apply<R: Rng + ?Sized>(&mut self, intent: &Intent, rng: &mut R) -> Option<Outcome> {
        Some(match (self, intent) {
            (Self::Quiz(quiz), Intent::Quiz(i)) => quiz.apply(i, rng),
            (Self::Matching(board), Intent::Matching(i)) => board.apply(i, rng),
            (Self::Ordering(list), Intent::Ordering(i)) => list.apply(*i, rng),
            (Self::Flashcards(deck), Intent::Flashcards(i)) => deck.apply(*i),
            (Self::Hotspot(spots), Intent::Hotspot(i)) => spots.apply(i),
            _ => return None,
        })
    }
}

/// A component paired with its player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSlot {
    pub component: Component,
    pub player: Player,
}

/// One run through a lesson.
#[derive(Debug)]
pub struct PlaybackSession<R: Rng> {
    lesson: Lesson,
    slides: Vec<Vec<PlayerSlot>>,
    current: usize,
    scoreboard: Scoreboard,
    rng: R,
}

impl<R: Rng> PlaybackSession<R> {
    /// Start playback at `start_index` (clamped) with a fresh scoreboard.
    pub fn start(lesson: Lesson, start_index: usize, mut rng: R) -> Self {
        let scoreboard = Scoreboard::new(total_possible(&lesson));
        let slides = lesson
            .slides
            .iter()
            .map(|slide| build_slide(slide, 0, &mut rng))
            .collect();
        let current = lesson.clamp_index(start_index);
        tracing::info!(
            lesson = %lesson.id,
            slides = lesson.slides.len(),
            total_possible = scoreboard.total_possible(),
            "playback started"
        );
        Self { lesson, slides, current, scoreboard, rng }
    }

    /// Discard all session state and start over on the current slide.
    pub fn restart(&mut self) {
        self.scoreboard = Scoreboard::new(total_possible(&self.lesson));
        let rng = &mut self.rng;
        self.slides = self.lesson.slides.iter().map(|slide| build_slide(slide, 0, &mut *rng)).collect();
        tracing::debug!("playback restarted");
    }

    /// Follow an edited lesson. Players of unchanged components keep their
    /// state; changed or new components get fresh players.
    pub fn sync(&mut self, lesson: Lesson) {
        let score = self.scoreboard.score();
        let mut previous: Vec<PlayerSlot> = std::mem::take(&mut self.slides).into_iter().flatten().collect();
        let rng = &mut self.rng;
        self.slides = lesson
            .slides
            .iter()
            .map(|slide| {
                slide
                    .components
                    .iter()
                    .map(|component| match previous.iter().position(|s| &s.component == component) {
                        Some(i) => previous.swap_remove(i),
                        None => PlayerSlot {
                            component: component.clone(),
                            player: Player::for_component(component, score, &mut *rng),
                        },
                    })
                    .collect()
            })
            .collect();
        self.scoreboard.set_total_possible(total_possible(&lesson));
        self.current = lesson.clamp_index(self.current);
        self.lesson = lesson;
    }

    // --- Navigation ---

    /// Advance one slide. Returns `false` on the last slide.
    pub fn next_slide(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Go back one slide. Returns `false` on the first slide.
    pub fn previous_slide(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(prev) => self.go_to(prev),
            None => false,
        }
    }

    /// Jump to slide `index`. Returns `false` when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.lesson.slides.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    // --- Intents ---

    /// Route `intent` to component `component_id` on any slide.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` for unknown ids and `IntentMismatch` when
    /// the component's player does not take this kind of intent.
    pub fn dispatch(&mut self, component_id: &str, intent: &Intent) -> Result<Outcome, PlayError> {
        let slot = self
            .slides
            .iter_mut()
            .flatten()
            .find(|s| s.component.id == component_id)
            .ok_or_else(|| PlayError::ComponentNotFound(component_id.to_owned()))?;

        let Some(outcome) = slot.player.apply(intent, &mut self.rng) else {
            tracing::warn!(component = component_id, kind = %slot.component.kind, "intent mismatch");
            return Err(PlayError::IntentMismatch {
                component: component_id.to_owned(),
                kind: slot.component.kind.clone(),
            });
        };

        let points = outcome.points();
        if points > 0 {
            self.scoreboard.add_points(points);
            tracing::info!(component = component_id, points, score = self.scoreboard.score(), "points awarded");
            self.retarget_score_boards();
        }
        Ok(outcome)
    }

    fn retarget_score_boards(&mut self) {
        let score = self.scoreboard.score();
        for slot in self.slides.iter_mut().flatten() {
            if let Player::ScoreBoard { ticker, .. } = &mut slot.player {
                ticker.retarget(score);
            }
        }
    }

    /// Advance every score board animation one frame. Returns whether any
    /// displayed value changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for slot in self.slides.iter_mut().flatten() {
            if let Player::ScoreBoard { ticker, .. } = &mut slot.player {
                changed |= ticker.tick().is_some();
            }
        }
        changed
    }

    // --- Queries ---

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.lesson.slides.len()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.lesson.slide(self.current)
    }

    /// Players of the current slide in display order.
    #[must_use]
    pub fn current_players(&self) -> &[PlayerSlot] {
        self.slides.get(self.current).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn player(&self, component_id: &str) -> Option<&Player> {
        self.slides
            .iter()
            .flatten()
            .find(|s| s.component.id == component_id)
            .map(|s| &s.player)
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}

fn build_slide<R: Rng + ?Sized>(slide: &Slide, score: u32, rng: &mut R) -> Vec<PlayerSlot> {
    slide
        .components
        .iter()
        .map(|component| PlayerSlot {
            component: component.clone(),
            player: Player::for_component(component, score, rng),
        })
        .collect()
}
