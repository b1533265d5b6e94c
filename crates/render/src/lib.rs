//! Binding and rendering orchestration.
//!
//! This crate ties the pipeline together: the value resolver turns bindings
//! into strings, the binder writes them into a cloned page document, and the
//! renderer drives paginator and binder across all tables and pages into the
//! final ordered page sequence.
//!
//! Rendering is two-pass: every table's row windows are computed before any
//! page is bound, because the page-number binding on page 1 already needs
//! the final total. A render either produces the complete page list or fails
//! with the first error, annotated with page, archetype and element context;
//! there is no partial output.

mod binder;
mod error;
mod renderer;
mod resolve;
mod trace;

pub use binder::{BindReport, Binder};
pub use error::{BindError, RenderError, Warning};
pub use renderer::{RenderJob, RenderOptions, RenderResult, RenderedPage, Renderer};
pub use resolve::{Resolved, resolve};
pub use trace::{BindingTrace, FitDecision, PageTrace, RenderTrace};
