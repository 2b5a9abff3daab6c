//! Component definition registry.
//!
//! A static, compiled-in catalogue mapping every known [`ComponentType`] to
//! its palette metadata, default property map, and ordered property schema.
//! The table is built once on first access and never mutated. A known tag
//! with no entry here is a configuration defect (guarded by tests), not a
//! runtime condition to recover from.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::{Value, json};

use crate::doc::{Props, object};
use crate::kind::{Category, ComponentType};

// =============================================================================
// TYPES
// =============================================================================

/// Value kind of a declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropKind {
    String,
    Number,
    Boolean,
    Select,
    MultiSelect,
    Color,
    RichText,
    Image,
    Video,
    Audio,
    Json,
    Component,
    ComponentArray,
}

/// Specialized sub-editor owning an array-valued property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionEditor {
    QuizQuestions,
    MatchingPairs,
    DragItems,
    Flashcards,
    Hotspots,
}

/// One choice of a select property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    /// Stored value; a string or a number depending on the property.
    pub value: Value,
}

impl SelectOption {
    /// String identity of the option used for comparisons.
    #[must_use]
    pub fn key(&self) -> String {
        value_key(&self.value)
    }
}

/// String identity of a JSON scalar (`"2"` and `2` compare equal).
#[must_use]
pub fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Declarative schema entry for one property. Carries no behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: PropKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Sub-editor for `ComponentArray` properties, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<CollectionEditor>,
}

/// Registry entry for one component type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub label: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub icon: &'static str,
    pub default_props: Props,
    pub prop_definitions: Vec<PropertyDefinition>,
}

impl ComponentDefinition {
    /// Schema entry for property `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.prop_definitions.iter().find(|p| p.name == name)
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

static REGISTRY: LazyLock<Vec<ComponentDefinition>> = LazyLock::new(catalogue);

/// Every definition in palette order.
#[must_use]
pub fn all() -> &'static [ComponentDefinition] {
    &REGISTRY
}

/// Definition for `kind`, or `None` for unknown tags.
#[must_use]
pub fn lookup(kind: &ComponentType) -> Option<&'static ComponentDefinition> {
    REGISTRY.iter().find(|d| &d.kind == kind)
}

/// Definitions in `category`, in palette order.
#[must_use]
pub fn by_category(category: Category) -> Vec<&'static ComponentDefinition> {
    REGISTRY.iter().filter(|d| d.category == category).collect()
}

/// Case-insensitive substring search over label and description.
/// An empty query matches everything.
#[must_use]
pub fn search(query: &str) -> Vec<&'static ComponentDefinition> {
    filter(query, None)
}

/// Palette filter: search text combined with an optional category.
#[must_use]
pub fn filter(query: &str, category: Option<Category>) -> Vec<&'static ComponentDefinition> {
    let needle = query.trim().to_lowercase();
    REGISTRY
        .iter()
        .filter(|d| category.is_none_or(|c| d.category == c))
        .filter(|d| {
            needle.is_empty()
                || d.label.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
        })
        .collect()
}

// =============================================================================
// SCHEMA BUILDERS
// =============================================================================

impl PropertyDefinition {
    fn new(name: &'static str, label: &'static str, kind: PropKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            default_value: None,
            options: Vec::new(),
            min: None,
            max: None,
            step: None,
            placeholder: None,
            description: None,
            editor: None,
        }
    }

    fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, PropKind::String)
    }

    fn number(name: &'static str, label: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self { min: Some(min), max: Some(max), step: Some(step), ..Self::new(name, label, PropKind::Number) }
    }

    fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, PropKind::Boolean)
    }

    fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self { options, ..Self::new(name, label, PropKind::Select) }
    }

    fn multi_select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self { options, ..Self::new(name, label, PropKind::MultiSelect) }
    }

    fn collection(name: &'static str, label: &'static str, editor: Option<CollectionEditor>) -> Self {
        Self { editor, ..Self::new(name, label, PropKind::ComponentArray) }
    }

    fn required(self) -> Self {
        Self { required: true, ..self }
    }

    fn placeholder(self, placeholder: &'static str) -> Self {
        Self { placeholder: Some(placeholder), ..self }
    }

    fn describe(self, description: &'static str) -> Self {
        Self { description: Some(description), ..self }
    }
}

fn choices(values: &[&str]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|v| SelectOption { label: (*v).to_owned(), value: Value::String((*v).to_owned()) })
        .collect()
}

fn numeric_choices(values: &[(&str, i64)]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|(label, v)| SelectOption { label: (*label).to_owned(), value: json!(v) })
        .collect()
}

fn alignment() -> Vec<SelectOption> {
    choices(&["left", "center", "right"])
}

fn heading_levels() -> Vec<SelectOption> {
    numeric_choices(&[("H1", 1), ("H2", 2), ("H3", 3), ("H4", 4), ("H5", 5), ("H6", 6)])
}

fn spacing() -> Vec<SelectOption> {
    choices(&["small", "medium", "large"])
}

fn languages() -> Vec<SelectOption> {
    choices(&["javascript", "typescript", "python", "rust", "html", "css", "json"])
}

fn define(
    kind: ComponentType,
    label: &'static str,
    category: Category,
    description: &'static str,
    icon: &'static str,
    defaults: Value,
    props: Vec<PropertyDefinition>,
) -> ComponentDefinition {
    let default_props = object(defaults);
    let prop_definitions = props
        .into_iter()
        .map(|p| {
            let default_value = default_props.get(p.name).cloned();
            PropertyDefinition { default_value, ..p }
        })
        .collect();
    ComponentDefinition { kind, label, category, description, icon, default_props, prop_definitions }
}

// =============================================================================
// CATALOGUE
// =============================================================================

type P = PropertyDefinition;

#[allow(clippy::too_many_lines)]
fn catalogue() -> Vec<ComponentDefinition> {
    use Category::{Content, Gamified, Interactive, Structure, Utility, Visual};
    use ComponentType as T;

    vec![
        // ── Content ─────────────────────────────────────────────
        define(
            T::Paragraph,
            "Paragraph",
            Content,
            "A block of formatted text",
            "type",
            json!({ "content": "Enter your text here...", "align": "left" }),
            vec![
                P::new("content", "Content", PropKind::RichText).required().placeholder("Enter your text here..."),
                P::select("align", "Alignment", choices(&["left", "center", "right", "justify"])),
            ],
        ),
        define(
            T::Heading,
            "Heading",
            Content,
            "A section heading",
            "heading",
            json!({ "content": "Heading", "level": 2, "align": "left" }),
            vec![
                P::text("content", "Text").required().placeholder("Heading text"),
                P::select("level", "Level", heading_levels()),
                P::select("align", "Alignment", alignment()),
            ],
        ),
        define(
            T::BulletList,
            "Bullet List",
            Content,
            "An ordered or unordered list of items",
            "list",
            json!({ "items": ["First item", "Second item", "Third item"], "type": "unordered" }),
            vec![
                P::new("items", "Items", PropKind::Json).required().describe("One string per list item"),
                P::select("type", "List Type", choices(&["unordered", "ordered"])),
            ],
        ),
        define(
            T::Table,
            "Table",
            Content,
            "Rows and columns of data",
            "table",
            json!({
                "headers": ["Column 1", "Column 2"],
                "rows": [["Cell 1", "Cell 2"], ["Cell 3", "Cell 4"]],
                "striped": true,
            }),
            vec![
                P::new("headers", "Headers", PropKind::Json),
                P::new("rows", "Rows", PropKind::Json).required(),
                P::boolean("striped", "Striped Rows"),
            ],
        ),
        define(
            T::Image,
            "Image",
            Content,
            "A picture with optional caption",
            "image",
            json!({ "src": "", "alt": "Image", "caption": "", "width": "100%" }),
            vec![
                P::new("src", "Image", PropKind::Image).required(),
                P::text("alt", "Alt Text").required().describe("Describe the image for screen readers"),
                P::text("caption", "Caption"),
                P::select("width", "Width", choices(&["25%", "50%", "75%", "100%"])),
            ],
        ),
        define(
            T::Video,
            "Video",
            Content,
            "An embedded video player",
            "video",
            json!({ "src": "", "title": "Video", "autoplay": false, "controls": true }),
            vec![
                P::new("src", "Video", PropKind::Video).required(),
                P::text("title", "Title"),
                P::boolean("autoplay", "Autoplay"),
                P::boolean("controls", "Show Controls"),
            ],
        ),
        define(
            T::CodeBlock,
            "Code Block",
            Content,
            "Syntax-highlighted source code",
            "code",
            json!({ "code": "console.log('Hello, world!')", "language": "javascript", "showLineNumbers": true }),
            vec![
                P::text("code", "Code").required(),
                P::select("language", "Language", languages()),
                P::boolean("showLineNumbers", "Line Numbers"),
            ],
        ),
        define(
            T::Quote,
            "Quote",
            Content,
            "A highlighted quotation",
            "quote",
            json!({ "content": "Quote text", "author": "", "source": "" }),
            vec![
                P::new("content", "Quote", PropKind::RichText).required(),
                P::text("author", "Author"),
                P::text("source", "Source"),
            ],
        ),
        // ── Visual ──────────────────────────────────────────────
        define(
            T::Divider,
            "Divider",
            Visual,
            "A horizontal rule between sections",
            "minus",
            json!({ "style": "solid", "spacing": "medium" }),
            vec![
                P::select("style", "Style", choices(&["solid", "dashed", "dotted"])),
                P::select("spacing", "Spacing", spacing()),
            ],
        ),
        define(
            T::Box,
            "Box",
            Visual,
            "A container with background and border",
            "square",
            json!({ "content": "", "backgroundColor": "#f8fafc", "borderColor": "#e2e8f0", "padding": "medium" }),
            vec![
                P::new("content", "Content", PropKind::RichText),
                P::new("backgroundColor", "Background", PropKind::Color),
                P::new("borderColor", "Border", PropKind::Color),
                P::select("padding", "Padding", spacing()),
            ],
        ),
        define(
            T::Callout,
            "Callout",
            Visual,
            "A highlighted note, tip, or warning",
            "alert-circle",
            json!({ "title": "Note", "content": "Important information", "type": "info" }),
            vec![
                P::text("title", "Title"),
                P::new("content", "Content", PropKind::RichText).required(),
                P::select("type", "Type", choices(&["info", "warning", "success", "error"])),
            ],
        ),
        define(
            T::Grid,
            "Grid",
            Visual,
            "Arrange nested components in columns",
            "layout-grid",
            json!({ "columns": 2, "gap": "medium", "items": [] }),
            vec![
                P::number("columns", "Columns", 1.0, 4.0, 1.0),
                P::select("gap", "Gap", spacing()),
                P::collection("items", "Items", None),
            ],
        ),
        define(
            T::Carousel,
            "Carousel",
            Visual,
            "Cycle through slides of nested content",
            "gallery-horizontal",
            json!({ "items": [], "autoplay": false, "interval": 5 }),
            vec![
                P::collection("items", "Items", None),
                P::boolean("autoplay", "Autoplay"),
                P::number("interval", "Interval (seconds)", 1.0, 30.0, 1.0),
            ],
        ),
        define(
            T::Accordion,
            "Accordion",
            Visual,
            "Collapsible sections of content",
            "chevrons-up-down",
            json!({
                "items": [{ "title": "Section 1", "content": "Content for section 1" }],
                "allowMultiple": false,
            }),
            vec![
                P::collection("items", "Sections", None),
                P::boolean("allowMultiple", "Allow Multiple Open"),
            ],
        ),
        define(
            T::IconBlock,
            "Icon Block",
            Visual,
            "An icon with a title and short description",
            "star",
            json!({ "icon": "star", "title": "Feature", "description": "Describe this feature", "color": "#3b82f6" }),
            vec![
                P::select("icon", "Icon", choices(&["star", "heart", "check", "lightbulb", "book"])),
                P::text("title", "Title").required(),
                P::text("description", "Description"),
                P::new("color", "Color", PropKind::Color),
            ],
        ),
        // ── Interactive ─────────────────────────────────────────
        define(
            T::Quiz,
            "Quiz",
            Interactive,
            "Multiple-choice questions with scoring",
            "help-circle",
            json!({
                "questions": [{
                    "id": "q1",
                    "question": "What is the capital of France?",
                    "options": [
                        { "id": "opt1", "text": "London", "isCorrect": false },
                        { "id": "opt2", "text": "Paris", "isCorrect": true },
                        { "id": "opt3", "text": "Berlin", "isCorrect": false },
                    ],
                    "explanation": "Paris is the capital of France.",
                }],
                "showExplanation": true,
                "shuffleOptions": false,
                "points": 10,
            }),
            vec![
                P::collection("questions", "Questions", Some(CollectionEditor::QuizQuestions)).required(),
                P::boolean("showExplanation", "Show Explanation"),
                P::boolean("shuffleOptions", "Shuffle Options"),
                P::number("points", "Points per Question", 0.0, 100.0, 5.0),
            ],
        ),
        define(
            T::Poll,
            "Poll",
            Interactive,
            "Collect opinions with a quick vote",
            "bar-chart",
            json!({
                "question": "What do you think?",
                "options": ["Option 1", "Option 2"],
                "allowMultiple": false,
                "showResults": true,
            }),
            vec![
                P::text("question", "Question").required(),
                P::new("options", "Options", PropKind::Json).required(),
                P::boolean("allowMultiple", "Allow Multiple Answers"),
                P::boolean("showResults", "Show Results"),
            ],
        ),
        define(
            T::DragDrop,
            "Drag to Order",
            Interactive,
            "Arrange items in the correct order",
            "arrow-down-up",
            json!({
                "title": "Arrange in the correct order",
                "items": [
                    { "id": "item1", "text": "First", "correctIndex": 0 },
                    { "id": "item2", "text": "Second", "correctIndex": 1 },
                    { "id": "item3", "text": "Third", "correctIndex": 2 },
                ],
                "shuffled": true,
                "points": 15,
            }),
            vec![
                P::text("title", "Title"),
                P::collection("items", "Items", Some(CollectionEditor::DragItems)).required(),
                P::boolean("shuffled", "Shuffle Items"),
                P::number("points", "Points", 0.0, 100.0, 5.0),
            ],
        ),
        define(
            T::MatchingPairs,
            "Matching Pairs",
            Interactive,
            "Match items from two columns",
            "link",
            json!({
                "title": "Match the items",
                "pairs": [
                    { "id": "pair1", "left": "Cat", "right": "Meow" },
                    { "id": "pair2", "left": "Dog", "right": "Woof" },
                    { "id": "pair3", "left": "Cow", "right": "Moo" },
                ],
                "shuffled": true,
                "points": 15,
            }),
            vec![
                P::text("title", "Title"),
                P::collection("pairs", "Pairs", Some(CollectionEditor::MatchingPairs)).required(),
                P::boolean("shuffled", "Shuffle Right Column"),
                P::number("points", "Points", 0.0, 100.0, 5.0),
            ],
        ),
        define(
            T::FillInTheBlank,
            "Fill in the Blank",
            Interactive,
            "Complete a sentence with the missing words",
            "text-cursor-input",
            json!({
                "text": "The capital of France is [blank].",
                "answers": ["Paris"],
                "caseSensitive": false,
            }),
            vec![
                P::text("text", "Sentence").required().describe("Mark each gap with [blank]"),
                P::new("answers", "Answers", PropKind::Json).required(),
                P::boolean("caseSensitive", "Case Sensitive"),
            ],
        ),
        define(
            T::Flashcards,
            "Flashcards",
            Interactive,
            "Flip cards to review terms and definitions",
            "layers",
            json!({
                "title": "Flashcards",
                "cards": [{ "id": "card1", "front": "Term", "back": "Definition" }],
            }),
            vec![
                P::text("title", "Title"),
                P::collection("cards", "Cards", Some(CollectionEditor::Flashcards)).required(),
            ],
        ),
        define(
            T::CodeEditor,
            "Code Editor",
            Interactive,
            "An editable code playground",
            "terminal",
            json!({ "code": "", "language": "javascript", "readOnly": false }),
            vec![
                P::text("code", "Starter Code"),
                P::select("language", "Language", languages()),
                P::boolean("readOnly", "Read Only"),
            ],
        ),
        define(
            T::ClickableImage,
            "Clickable Image",
            Interactive,
            "An image with clickable regions",
            "mouse-pointer-click",
            json!({ "src": "", "alt": "", "regions": [] }),
            vec![
                P::new("src", "Image", PropKind::Image).required(),
                P::text("alt", "Alt Text"),
                P::new("regions", "Regions", PropKind::Json),
            ],
        ),
        define(
            T::Hotspot,
            "Hotspot",
            Interactive,
            "Explore an image by discovering points of interest",
            "crosshair",
            json!({ "title": "Interactive Image", "image": "", "hotspots": [] }),
            vec![
                P::text("title", "Title"),
                P::new("image", "Image", PropKind::Image).required(),
                P::collection("hotspots", "Hotspots", Some(CollectionEditor::Hotspots)),
            ],
        ),
        // ── Gamified ────────────────────────────────────────────
        define(
            T::BadgeReveal,
            "Badge Reveal",
            Gamified,
            "Reward learners with a badge",
            "award",
            json!({
                "title": "Achievement Unlocked",
                "description": "You completed the lesson!",
                "badge": "trophy",
                "color": "#f59e0b",
            }),
            vec![
                P::text("title", "Title"),
                P::text("description", "Description"),
                P::select("badge", "Badge", choices(&["trophy", "medal", "star", "crown"])),
                P::new("color", "Color", PropKind::Color),
            ],
        ),
        define(
            T::ScoreBoard,
            "Score Board",
            Gamified,
            "Show the learner's current score",
            "trophy",
            json!({ "title": "Your Score", "showTotal": true, "showPercentage": true, "animation": true }),
            vec![
                P::text("title", "Title"),
                P::boolean("showTotal", "Show Total"),
                P::boolean("showPercentage", "Show Percentage"),
                P::boolean("animation", "Animate"),
            ],
        ),
        define(
            T::MiniGame,
            "Mini Game",
            Gamified,
            "A short memory or word game",
            "gamepad-2",
            json!({ "gameType": "memory", "difficulty": "easy", "data": {} }),
            vec![
                P::select("gameType", "Game", choices(&["memory", "wordSearch", "crossword"])),
                P::select("difficulty", "Difficulty", choices(&["easy", "medium", "hard"])),
                P::new("data", "Game Data", PropKind::Json),
            ],
        ),
        define(
            T::ProgressBar,
            "Progress Bar",
            Gamified,
            "Visualize progress toward a goal",
            "loader",
            json!({ "value": 0, "max": 100, "showLabel": true, "color": "#3b82f6" }),
            vec![
                P::number("value", "Value", 0.0, 100.0, 1.0),
                P::number("max", "Maximum", 1.0, 1000.0, 1.0),
                P::boolean("showLabel", "Show Label"),
                P::new("color", "Color", PropKind::Color),
            ],
        ),
        // ── Structure ───────────────────────────────────────────
        define(
            T::SlideTitle,
            "Slide Title",
            Structure,
            "A large title for the slide",
            "heading-1",
            json!({ "content": "Slide Title", "level": 1, "align": "center" }),
            vec![
                P::text("content", "Title").required(),
                P::select("level", "Level", heading_levels()),
                P::select("align", "Alignment", alignment()),
            ],
        ),
        define(
            T::LessonIntro,
            "Lesson Intro",
            Structure,
            "Introduce the lesson and its objectives",
            "book-open",
            json!({
                "title": "Welcome",
                "description": "In this lesson you will learn...",
                "objectives": ["Objective 1", "Objective 2"],
            }),
            vec![
                P::text("title", "Title").required(),
                P::new("description", "Description", PropKind::RichText),
                P::new("objectives", "Objectives", PropKind::Json),
            ],
        ),
        define(
            T::LessonSummary,
            "Lesson Summary",
            Structure,
            "Recap the key points of the lesson",
            "list-checks",
            json!({ "title": "Summary", "keyPoints": ["Key point 1", "Key point 2"] }),
            vec![
                P::text("title", "Title").required(),
                P::new("keyPoints", "Key Points", PropKind::Json),
            ],
        ),
        define(
            T::LessonComplete,
            "Lesson Complete",
            Structure,
            "Celebrate the end of the lesson",
            "party-popper",
            json!({ "title": "Lesson Complete!", "message": "Great job!", "showScore": true }),
            vec![
                P::text("title", "Title").required(),
                P::new("message", "Message", PropKind::RichText),
                P::boolean("showScore", "Show Score"),
            ],
        ),
        // ── Utility ─────────────────────────────────────────────
        define(
            T::Timer,
            "Timer",
            Utility,
            "A countdown timer",
            "timer",
            json!({ "duration": 60, "autoStart": false, "showControls": true }),
            vec![
                P::number("duration", "Duration (seconds)", 1.0, 3600.0, 1.0).required(),
                P::boolean("autoStart", "Start Automatically"),
                P::boolean("showControls", "Show Controls"),
            ],
        ),
        define(
            T::AudioPlayer,
            "Audio Player",
            Utility,
            "Play an audio clip",
            "volume-2",
            json!({ "src": "", "title": "Audio", "autoplay": false }),
            vec![
                P::new("src", "Audio", PropKind::Audio).required(),
                P::text("title", "Title"),
                P::boolean("autoplay", "Autoplay"),
            ],
        ),
        define(
            T::LanguageToggle,
            "Language Toggle",
            Utility,
            "Switch content between languages",
            "languages",
            json!({ "languages": ["en", "es"], "defaultLanguage": "en" }),
            vec![
                P::multi_select("languages", "Languages", choices(&["en", "es", "fr", "de", "zh"])),
                P::select("defaultLanguage", "Default", choices(&["en", "es", "fr", "de", "zh"])),
            ],
        ),
        define(
            T::ThemeSwitch,
            "Theme Switch",
            Utility,
            "Let learners toggle light and dark mode",
            "sun-moon",
            json!({ "defaultTheme": "light" }),
            vec![P::select("defaultTheme", "Default Theme", choices(&["light", "dark", "system"]))],
        ),
        define(
            T::Hint,
            "Hint",
            Utility,
            "A hint revealed on demand",
            "lightbulb",
            json!({ "title": "Need a hint?", "content": "Hint text" }),
            vec![
                P::text("title", "Button Label"),
                P::new("content", "Hint", PropKind::RichText).required(),
            ],
        ),
        define(
            T::NotePad,
            "Note Pad",
            Utility,
            "A scratch area for learner notes",
            "notebook-pen",
            json!({ "placeholder": "Take notes here...", "saveNotes": true }),
            vec![
                P::text("placeholder", "Placeholder"),
                P::boolean("saveNotes", "Save Notes"),
            ],
        ),
    ]
}
