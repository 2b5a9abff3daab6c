//! Session scoring and the score board count-up.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use crate::consts::{SCORE_ANIMATION_MS, SCORE_FRAME_MS};
use crate::doc::Lesson;
use crate::props::ComponentProps;

/// Points earned during one playback session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    total_possible: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new(total_possible: u32) -> Self {
        Self { score: 0, total_possible }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Zero the score. The total is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn set_total_possible(&mut self, total: u32) {
        self.total_possible = total;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_possible(&self) -> u32 {
        self.total_possible
    }

    /// Rounded percentage of the total; 0 when nothing is available.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        percent(self.score, self.total_possible)
    }
}

/// Rounded `part / whole` as a percentage; 0 when `whole` is 0.
#[must_use]
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = u64::from(part) * 100 + u64::from(whole) / 2;
    u32::try_from(scaled / u64::from(whole)).unwrap_or(u32::MAX)
}

/// Points available across every scoring component of `lesson`.
///
/// Every quiz, matching board and ordering list contributes its configured
/// `points` once. Components whose props cannot be read contribute nothing.
#[must_use]
pub fn total_possible(lesson: &Lesson) -> u32 {
    lesson
        .components()
        .filter(|c| c.kind.is_scoring())
        .map(|c| match ComponentProps::from_component(c) {
            Ok(ComponentProps::Quiz(quiz)) => quiz.points,
            Ok(ComponentProps::MatchingPairs(matching)) => matching.points,
            Ok(ComponentProps::DragDrop(ordering)) => ordering.points,
            Ok(_) => 0,
            Err(err) => {
                tracing::warn!(component = %c.id, error = %err, "scoring component skipped");
                0
            }
        })
        .fold(0, u32::saturating_add)
}

// =============================================================================
// COUNT-UP
// =============================================================================

/// Frame-by-frame count-up of the displayed score.
///
/// Retargeting fixes a per-frame step of `ceil(distance / (SCORE_ANIMATION_MS
/// / SCORE_FRAME_MS))`, so a change settles within about 32 frames. Drops
/// jump straight to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTicker {
    shown: u32,
    target: u32,
    step: u32,
    animated: bool,
}

impl ScoreTicker {
    #[must_use]
    pub fn new(animated: bool) -> Self {
        Self { shown: 0, target: 0, step: 0, animated }
    }

    /// Point the ticker at a new score.
    pub fn retarget(&mut self, target: u32) {
        self.target = target;
        if !self.animated || target < self.shown {
            self.shown = target;
            self.step = 0;
            return;
        }
        let distance = target - self.shown;
        let step = (u64::from(distance) * u64::from(SCORE_FRAME_MS)).div_ceil(u64::from(SCORE_ANIMATION_MS));
        self.step = u32::try_from(step).unwrap_or(distance).max(1);
    }

    /// Advance one frame. Returns the new displayed value, or `None` once the
    /// target is reached.
    pub fn tick(&mut self) -> Option<u32> {
        if self.shown >= self.target {
            return None;
        }
        self.shown = self.shown.saturating_add(self.step.max(1)).min(self.target);
        Some(self.shown)
    }

    /// Run to completion, returning every displayed value in order.
    pub fn frames(&mut self) -> Vec<u32> {
        std::iter::from_fn(|| self.tick()).collect()
    }

    #[must_use]
    pub fn shown(&self) -> u32 {
        self.shown
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.shown == self.target
    }
}
