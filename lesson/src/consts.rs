//! Shared constants for the lesson crate.

// ── Collections ─────────────────────────────────────────────────

/// A quiz keeps at least this many questions.
pub const MIN_QUIZ_QUESTIONS: usize = 1;

/// Every quiz question keeps at least this many options.
pub const MIN_QUIZ_OPTIONS: usize = 2;

/// A matching exercise keeps at least this many pairs.
pub const MIN_MATCHING_PAIRS: usize = 2;

/// A drag-to-order exercise keeps at least this many items.
pub const MIN_DRAG_ITEMS: usize = 2;

/// A flashcard deck keeps at least this many cards.
pub const MIN_FLASHCARDS: usize = 1;

// ── Score board animation ───────────────────────────────────────

/// Total duration of the score count-up animation, in milliseconds.
pub const SCORE_ANIMATION_MS: u32 = 500;

/// Frame interval of the score count-up animation, in milliseconds.
pub const SCORE_FRAME_MS: u32 = 16;

// ── Lesson defaults ─────────────────────────────────────────────

/// Duration in minutes for lessons that do not declare one.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Key under which the local snapshot of the open lesson is stored.
pub const SNAPSHOT_KEY: &str = "currentLesson";
