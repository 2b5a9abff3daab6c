//! Quiz player.
//!
//! Questions are answered one at a time: select an option, submit, and the
//! question locks with its correctness revealed. Navigation between
//! questions is free in both directions.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use rand::Rng;
use rand::seq::SliceRandom;

use super::Outcome;
use crate::props::{QuizProps, QuizQuestion};

/// Learner intents for a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    /// Choose an option of the current question by id.
    Select(String),
    Submit,
    Next,
    Previous,
    Reset,
}

/// Per-question answer state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionState {
    pub selected: Option<String>,
    pub submitted: bool,
    pub correct: bool,
}

/// How an option is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    /// Chosen and correct, or the correct answer revealed after a miss.
    Correct,
    /// Chosen and wrong.
    Incorrect,
}

/// Session state of one quiz component.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    source: Vec<QuizQuestion>,
    questions: Vec<QuizQuestion>,
    states: Vec<QuestionState>,
    current: usize,
    points: u32,
    show_explanation: bool,
    shuffle_options: bool,
    score: u32,
}

impl QuizSession {
    /// Start a session. Options are shuffled once here when configured.
    pub fn new<R: Rng + ?Sized>(props: &QuizProps, rng: &mut R) -> Self {
        let source = props.questions();
        let mut session = Self {
            questions: source.clone(),
            states: vec![QuestionState::default(); source.len()],
            source,
            current: 0,
            points: props.points,
            show_explanation: props.show_explanation,
            shuffle_options: props.shuffle_options,
            score: 0,
        };
        session.arrange(rng);
        session
    }

    fn arrange<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.clone_from(&self.source);
        if self.shuffle_options {
            for question in &mut self.questions {
                question.options.shuffle(rng);
            }
        }
    }

    /// Apply one intent.
    pub fn apply<R: Rng + ?Sized>(&mut self, intent: &QuizIntent, rng: &mut R) -> Outcome {
        match intent {
            QuizIntent::Select(option) => self.select(option),
            QuizIntent::Submit => self.submit(),
            QuizIntent::Next => self.go_to(self.current + 1),
            QuizIntent::Previous => match self.current.checked_sub(1) {
                Some(prev) => self.go_to(prev),
                None => Outcome::Ignored,
            },
            QuizIntent::Reset => {
                self.reset(rng);
                Outcome::Updated
            }
        }
    }

    fn select(&mut self, option: &str) -> Outcome {
        let Some(question) = self.questions.get(self.current) else {
            return Outcome::Ignored;
        };
        if !question.options.iter().any(|o| o.id == option) {
            return Outcome::Ignored;
        }
        let Some(state) = self.states.get_mut(self.current) else {
            return Outcome::Ignored;
        };
        if state.submitted || state.selected.as_deref() == Some(option) {
            return Outcome::Ignored;
        }
        state.selected = Some(option.to_owned());
        Outcome::Updated
    }

    fn submit(&mut self) -> Outcome {
        let (Some(question), Some(state)) = (self.questions.get(self.current), self.states.get_mut(self.current))
        else {
            return Outcome::Ignored;
        };
        if state.submitted {
            return Outcome::Ignored;
        }
        let Some(selected) = state.selected.as_deref() else {
            return Outcome::Ignored;
        };
        let correct = question.options.iter().any(|o| o.id == selected && o.is_correct);
        state.submitted = true;
        state.correct = correct;

        let points = if correct { self.points } else { 0 };
        self.score = self.score.saturating_add(points);
        tracing::debug!(question = %question.id, correct, points, "quiz answer submitted");
        Outcome::Answered { correct, points }
    }

    fn go_to(&mut self, index: usize) -> Outcome {
        if index >= self.questions.len() || index == self.current {
            return Outcome::Ignored;
        }
        self.current = index;
        Outcome::Updated
    }

    /// Clear every answer, return to question 1, and reshuffle.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.states = vec![QuestionState::default(); self.questions.len()];
        self.current = 0;
        self.score = 0;
        self.arrange(rng);
    }

    // --- Queries ---

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<&QuestionState> {
        self.states.get(index)
    }

    /// Presentation of option `option` on the current question.
    #[must_use]
    pub fn option_mark(&self, option: &str) -> OptionMark {
        let (Some(question), Some(state)) = (self.current_question(), self.state(self.current)) else {
            return OptionMark::Neutral;
        };
        let chosen = state.selected.as_deref() == Some(option);
        if !state.submitted {
            return if chosen { OptionMark::Selected } else { OptionMark::Neutral };
        }
        let is_correct = question.options.iter().any(|o| o.id == option && o.is_correct);
        match (chosen, is_correct) {
            (true, true) => OptionMark::Correct,
            (true, false) => OptionMark::Incorrect,
            (false, true) if !state.correct => OptionMark::Correct,
            _ => OptionMark::Neutral,
        }
    }

    /// Explanation of the current question once it is submitted.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        let question = self.current_question()?;
        let state = self.state(self.current)?;
        (self.show_explanation && state.submitted && !question.explanation.is_empty())
            .then_some(question.explanation.as_str())
    }

    /// Points earned in this quiz.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points available in this quiz.
    #[must_use]
    pub fn total(&self) -> u32 {
        let count = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        self.points.saturating_mul(count)
    }

    /// Number of submitted questions.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.states.iter().filter(|s| s.submitted).count()
    }
}
