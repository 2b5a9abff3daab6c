//! Drag-to-order player.

#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;

use rand::Rng;
use rand::seq::SliceRandom;

use super::Outcome;
use crate::doc::move_item;
use crate::props::{DragDropProps, DragItem};

/// Learner intents for an ordering list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingIntent {
    /// Relocate the item at `from` to `to`. Indices are clamped.
    Move { from: usize, to: usize },
    Submit,
    Reset,
}

/// Session state of one drag-to-order component.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingSession {
    source: Vec<DragItem>,
    items: Vec<DragItem>,
    shuffled: bool,
    points: u32,
    submitted: bool,
    correct: bool,
}

impl OrderingSession {
    /// Start a session, shuffling the display order when configured.
    pub fn new<R: Rng + ?Sized>(props: &DragDropProps, rng: &mut R) -> Self {
        let mut session = Self {
            source: props.items.clone(),
            items: props.items.clone(),
            shuffled: props.shuffled,
            points: props.points,
            submitted: false,
            correct: false,
        };
        session.arrange(rng);
        session
    }

    /// Author-mode view: items in their correct order, never shuffled.
    #[must_use]
    pub fn preview(props: &DragDropProps) -> Self {
        Self {
            source: props.items.clone(),
            items: props.correct_order(),
            shuffled: false,
            points: props.points,
            submitted: false,
            correct: false,
        }
    }

    fn arrange<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.clone_from(&self.source);
        if self.shuffled {
            self.items.shuffle(rng);
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, intent: OrderingIntent, rng: &mut R) -> Outcome {
        match intent {
            OrderingIntent::Move { from, to } => self.relocate(from, to),
            OrderingIntent::Submit => self.submit(),
            OrderingIntent::Reset => {
                self.reset(rng);
                Outcome::Updated
            }
        }
    }

    fn relocate(&mut self, from: usize, to: usize) -> Outcome {
        if self.submitted || self.items.is_empty() {
            return Outcome::Ignored;
        }
        let last = self.items.len() - 1;
        if from.min(last) == to.min(last) {
            return Outcome::Ignored;
        }
        self.items = move_item(&self.items, from, to);
        Outcome::Updated
    }

    fn submit(&mut self) -> Outcome {
        if self.submitted || self.items.is_empty() {
            return Outcome::Ignored;
        }
        self.submitted = true;
        self.correct = self.items.iter().enumerate().all(|(i, item)| item.correct_index == i);
        let points = if self.correct { self.points } else { 0 };
        tracing::debug!(correct = self.correct, points, "ordering submitted");
        Outcome::Answered { correct: self.correct, points }
    }

    /// Reshuffle and clear the submitted flag.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.submitted = false;
        self.correct = false;
        self.arrange(rng);
    }

    // --- Queries ---

    /// Items in current display order.
    #[must_use]
    pub fn items(&self) -> &[DragItem] {
        &self.items
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the submitted order was correct. `false` before submit.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Whether the item at display position `index` sits where it belongs.
    #[must_use]
    pub fn in_place(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.correct_index == index)
    }
}
