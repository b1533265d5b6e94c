//! Heuristic text fitting.
//!
//! Bound values rarely match the box they were designed for, so every field
//! binding carries a fit policy reconciling the two: leave the text alone,
//! shrink the font, wrap onto multiple lines, or clip with an ellipsis.
//!
//! Width estimation is deliberately coarse: a per-character-class em table
//! instead of real font metrics (see [`width`]). This trades pixel accuracy
//! for determinism across fonts and platforms. The estimation constants are
//! compatibility-sensitive: changing them changes rendered output for
//! existing templates.

pub mod width;

mod engine;
mod wrap;

pub use engine::{ElementMetrics, FitEngine, FitError, FitOptions, FitOutcome, FitPolicy};
