//! Report presentation: JSON persistence and terminal rendering.
//!
//! # Submodules
//!
//! - [`json`]: Writes a [`crate::models::ThemeReport`] to `report.json`
//! - [`text`]: Renders the distribution bar chart, gap suggestions, and
//!   report summary for the terminal

pub mod json;
pub mod text;
