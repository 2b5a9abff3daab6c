//! Lesson document model, component registry, and playback engine.
//!
//! This crate owns everything about a lesson that is not pixels: the slide
//! document and its mutations, the static catalogue of component types, the
//! property editing surface, and the per-component state machines that run
//! during playback and feed the session score. A host shell (the `lesson`
//! binary, or any UI layer) drives it with user intents and renders the
//! resulting snapshots.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Lesson, slide, and component types plus value-oriented mutations |
//! | [`kind`] | Component type tags and palette categories |
//! | [`registry`] | Static catalogue of component definitions and property schemas |
//! | [`props`] | Typed views over a component's property bag |
//! | [`editor`] | Property fields, edit coercion, and collection sub-editors |
//! | [`play`] | Interactive state machines, scoring, and the playback session |
//! | [`render`] | Text rendering for author and playback modes |
//! | [`store`] | Local snapshot persistence and JSON import/export |
//! | [`builder`] | Authoring session: current slide, edit target, notices |
//! | [`consts`] | Shared constants (collection minimums, animation timing) |

pub mod builder;
pub mod consts;
pub mod doc;
pub mod editor;
pub mod kind;
pub mod play;
pub mod props;
pub mod registry;
pub mod render;
pub mod store;
