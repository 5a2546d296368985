//! Suggestion rendering helpers
//!
//! Pure helpers used by the suggestion renderer.

pub mod reveal;
pub mod spinner;
pub mod text;
