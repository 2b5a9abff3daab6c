//! Matching-pairs player.
//!
//! The left column keeps authored order; the right column is shuffled when
//! configured. A pair is matched by selecting its left and right entries in
//! either order. On a mismatch the selection just made is cleared and the
//! other side keeps its earlier selection.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use rand::Rng;
use rand::seq::SliceRandom;

use super::Outcome;
use crate::props::{MatchingPair, MatchingProps};

/// Column of a matching board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Learner intents for a matching board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchingIntent {
    /// Click the entry of pair `id` in one column.
    Pick(Side, String),
    Reset,
}

/// Session state of one matching component.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingSession {
    pairs: Vec<MatchingPair>,
    right_order: Vec<usize>,
    shuffled: bool,
    points: u32,
    selected_left: Option<String>,
    selected_right: Option<String>,
    matched: Vec<String>,
    complete: bool,
}

impl MatchingSession {
    pub fn new<R: Rng + ?Sized>(props: &MatchingProps, rng: &mut R) -> Self {
        let mut session = Self {
            pairs: props.pairs.clone(),
            right_order: (0..props.pairs.len()).collect(),
            shuffled: props.shuffled,
            points: props.points,
            selected_left: None,
            selected_right: None,
            matched: Vec::new(),
            complete: false,
        };
        session.arrange(rng);
        session
    }

    fn arrange<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.right_order = (0..self.pairs.len()).collect();
        if self.shuffled {
            self.right_order.shuffle(rng);
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, intent: &MatchingIntent, rng: &mut R) -> Outcome {
        match intent {
            MatchingIntent::Pick(side, id) => self.pick(*side, id),
            MatchingIntent::Reset => {
                self.reset(rng);
                Outcome::Updated
            }
        }
    }

    fn pick(&mut self, side: Side, id: &str) -> Outcome {
        if self.complete || self.is_matched(id) || !self.pairs.iter().any(|p| p.id == id) {
            return Outcome::Ignored;
        }
        *self.selection_mut(side) = Some(id.to_owned());

        let Some(other) = self.selection(side.other()).map(str::to_owned) else {
            return Outcome::Updated;
        };
        if other != id {
            *self.selection_mut(side) = None;
            tracing::debug!(left = ?self.selected_left, attempted = id, "matching mismatch");
            return Outcome::Updated;
        }

        self.selected_left = None;
        self.selected_right = None;
        self.matched.push(id.to_owned());
        if self.matched.len() < self.pairs.len() {
            return Outcome::Updated;
        }

        self.complete = true;
        let all_correct = self.pairs.iter().all(|p| self.is_matched(&p.id));
        let points = if all_correct { self.points } else { 0 };
        tracing::debug!(points, "matching complete");
        Outcome::Completed { points }
    }

    fn selection_mut(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::Left => &mut self.selected_left,
            Side::Right => &mut self.selected_right,
        }
    }

    /// Clear matches and selections and reshuffle the right column.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selected_left = None;
        self.selected_right = None;
        self.matched.clear();
        self.complete = false;
        self.arrange(rng);
    }

    // --- Queries ---

    #[must_use]
    pub fn left_items(&self) -> &[MatchingPair] {
        &self.pairs
    }

    /// Right column in display order.
    #[must_use]
    pub fn right_items(&self) -> Vec<&MatchingPair> {
        self.right_order.iter().filter_map(|&i| self.pairs.get(i)).collect()
    }

    #[must_use]
    pub fn selection(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.selected_left.as_deref(),
            Side::Right => self.selected_right.as_deref(),
        }
    }

    #[must_use]
    pub fn is_matched(&self, id: &str) -> bool {
        self.matched.iter().any(|m| m == id)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
