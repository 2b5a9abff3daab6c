//! Flashcard deck player. No scoring.

#[cfg(test)]
#[path = "flashcards_test.rs"]
mod flashcards_test;

use super::Outcome;
use crate::props::{Flashcard, FlashcardsProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardIntent {
    Next,
    Previous,
    Flip,
    /// Jump to card `index`.
    GoTo(usize),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSession {
    cards: Vec<Flashcard>,
    current: usize,
    flipped: bool,
}

impl FlashcardSession {
    #[must_use]
    pub fn new(props: &FlashcardsProps) -> Self {
        Self { cards: props.cards.clone(), current: 0, flipped: false }
    }

    pub fn apply(&mut self, intent: FlashcardIntent) -> Outcome {
        match intent {
            FlashcardIntent::Next => self.go_to(self.current + 1),
            FlashcardIntent::Previous => match self.current.checked_sub(1) {
                Some(prev) => self.go_to(prev),
                None => Outcome::Ignored,
            },
            FlashcardIntent::GoTo(index) => self.go_to(index),
            FlashcardIntent::Flip => {
                if self.cards.is_empty() {
                    return Outcome::Ignored;
                }
                self.flipped = !self.flipped;
                Outcome::Updated
            }
            FlashcardIntent::Reset => {
                self.current = 0;
                self.flipped = false;
                Outcome::Updated
            }
        }
    }

    fn go_to(&mut self, index: usize) -> Outcome {
        if index >= self.cards.len() || index == self.current {
            return Outcome::Ignored;
        }
        self.current = index;
        self.flipped = false;
        Outcome::Updated
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the back of the current card is showing.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Text on the visible face of the current card.
    #[must_use]
    pub fn visible_face(&self) -> Option<&str> {
        self.current_card()
            .map(|card| if self.flipped { card.back.as_str() } else { card.front.as_str() })
    }
}
