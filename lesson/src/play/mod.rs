//! Playback: interactive component state machines and scoring.
//!
//! | Module | Role |
//! |--------|------|
//! | [`quiz`] | Multiple-choice questions with per-question submit |
//! | [`matching`] | Two-column pair matching |
//! | [`ordering`] | Drag-to-order list |
//! | [`flashcards`] | Flip-card deck |
//! | [`hotspot`] | Image marker discovery |
//! | [`score`] | Session scoreboard and score board count-up |
//! | [`session`] | One run through a lesson: players, navigation, scoring |
//!
//! Every state machine starts unanswered, reaches its terminal state at most
//! once until reset, and reports each intent's effect as an [`Outcome`].

pub mod flashcards;
pub mod hotspot;
pub mod matching;
pub mod ordering;
pub mod quiz;
pub mod score;
pub mod session;

/// Effect of one intent on a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (locked, out of range, unknown target).
    Ignored,
    /// Visible state changed without scoring.
    Updated,
    /// An answer was checked. `points` is zero when incorrect.
    Answered { correct: bool, points: u32 },
    /// The component reached its terminal state and awarded `points`.
    Completed { points: u32 },
}

impl Outcome {
    /// Points this outcome adds to the session score.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Answered { points, .. } | Self::Completed { points } => points,
            Self::Ignored | Self::Updated => 0,
        }
    }

    /// Whether anything changed.
    #[must_use]
    pub fn changed(self) -> bool {
        self != Self::Ignored
    }
}
