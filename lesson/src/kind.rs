//! Component type tags and palette categories.
//!
//! `ComponentType` is the discriminant stored in every component's `type`
//! field. Tags outside the known set survive a load/save round trip as
//! `Unknown` so hand-edited or newer files never lose data.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Palette grouping for component definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Text, media, and code.
    Content,
    /// Layout and decoration.
    Visual,
    /// Components the learner interacts with.
    Interactive,
    /// Score and reward components.
    Gamified,
    /// Lesson framing (intro, summary, completion).
    Structure,
    /// Helpers such as timers and note pads.
    Utility,
}

impl Category {
    /// Every category in palette order.
    pub const ALL: [Category; 6] = [
        Category::Content,
        Category::Visual,
        Category::Interactive,
        Category::Gamified,
        Category::Structure,
        Category::Utility,
    ];

    /// Wire name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Visual => "visual",
            Self::Interactive => "interactive",
            Self::Gamified => "gamified",
            Self::Structure => "structure",
            Self::Utility => "utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// The type tag of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    // Content
    Paragraph,
    Heading,
    BulletList,
    Table,
    Image,
    Video,
    CodeBlock,
    Quote,
    // Visual
    Divider,
    Box,
    Callout,
    Grid,
    Carousel,
    Accordion,
    IconBlock,
    // Interactive
    Quiz,
    Poll,
    DragDrop,
    MatchingPairs,
    FillInTheBlank,
    Flashcards,
    CodeEditor,
    ClickableImage,
    Hotspot,
    // Gamified
    BadgeReveal,
    ScoreBoard,
    MiniGame,
    ProgressBar,
    // Structure
    SlideTitle,
    LessonIntro,
    LessonSummary,
    LessonComplete,
    // Utility
    Timer,
    AudioPlayer,
    LanguageToggle,
    ThemeSwitch,
    Hint,
    NotePad,
    /// A tag this build does not know. Preserved verbatim.
    Unknown(String),
}

impl ComponentType {
    /// Every known type tag, in palette order.
    pub const KNOWN: [ComponentType; 38] = [
        Self::Paragraph,
        Self::Heading,
        Self::BulletList,
        Self::Table,
        Self::Image,
        Self::Video,
        Self::CodeBlock,
        Self::Quote,
        Self::Divider,
        Self::Box,
        Self::Callout,
        Self::Grid,
        Self::Carousel,
        Self::Accordion,
        Self::IconBlock,
        Self::Quiz,
        Self::Poll,
        Self::DragDrop,
        Self::MatchingPairs,
        Self::FillInTheBlank,
        Self::Flashcards,
        Self::CodeEditor,
        Self::ClickableImage,
        Self::Hotspot,
        Self::BadgeReveal,
        Self::ScoreBoard,
        Self::MiniGame,
        Self::ProgressBar,
        Self::SlideTitle,
        Self::LessonIntro,
        Self::LessonSummary,
        Self::LessonComplete,
        Self::Timer,
        Self::AudioPlayer,
        Self::LanguageToggle,
        Self::ThemeSwitch,
        Self::Hint,
        Self::NotePad,
    ];

    /// Parse a wire tag. Unrecognized tags become [`ComponentType::Unknown`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|k| k.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| Self::Unknown(tag.to_owned()))
    }

    /// Wire tag of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::BulletList => "bulletList",
            Self::Table => "table",
            Self::Image => "image",
            Self::Video => "video",
            Self::CodeBlock => "codeBlock",
            Self::Quote => "quote",
            Self::Divider => "divider",
            Self::Box => "box",
            Self::Callout => "callout",
            Self::Grid => "grid",
            Self::Carousel => "carousel",
            Self::Accordion => "accordion",
            Self::IconBlock => "iconBlock",
            Self::Quiz => "quiz",
            Self::Poll => "poll",
            Self::DragDrop => "dragDrop",
            Self::MatchingPairs => "matchingPairs",
            Self::FillInTheBlank => "fillInTheBlank",
            Self::Flashcards => "flashcards",
            Self::CodeEditor => "codeEditor",
            Self::ClickableImage => "clickableImage",
            Self::Hotspot => "hotspot",
            Self::BadgeReveal => "badgeReveal",
            Self::ScoreBoard => "scoreBoard",
            Self::MiniGame => "miniGame",
            Self::ProgressBar => "progressBar",
            Self::SlideTitle => "slideTitle",
            Self::LessonIntro => "lessonIntro",
            Self::LessonSummary => "lessonSummary",
            Self::LessonComplete => "lessonComplete",
            Self::Timer => "timer",
            Self::AudioPlayer => "audioPlayer",
            Self::LanguageToggle => "languageToggle",
            Self::ThemeSwitch => "themeSwitch",
            Self::Hint => "hint",
            Self::NotePad => "notePad",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether this tag is part of the known set.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Whether playback of this type can award points.
    #[must_use]
    pub fn is_scoring(&self) -> bool {
        matches!(self, Self::Quiz | Self::MatchingPairs | Self::DragDrop)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ComponentType {
    fn from(tag: String) -> Self {
        match Self::parse(&tag) {
            Self::Unknown(_) => Self::Unknown(tag),
            known => known,
        }
    }
}

impl From<ComponentType> for String {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Unknown(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}
