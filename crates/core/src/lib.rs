//! Domain logic for Launchpad.
//!
//! Pure, dependency-light building blocks shared by the database, AI and API
//! crates: identifier types, the core error type, presence validation, the
//! generated-artifact shapes (blueprint, pitch deck, wireframe, checklist,
//! AI tool reports), the code scaffold templates and billing helpers.

pub mod ai_tools;
pub mod billing;
pub mod blueprint;
pub mod checklist;
pub mod error;
mod labels;
pub mod pitch_deck;
pub mod project;
pub mod scaffold;
pub mod types;
pub mod validation;
pub mod webhook_signature;
pub mod wireframe;
