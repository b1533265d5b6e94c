//! # platen
//!
//! Business-document rendering engine. Binds key-value and tabular data onto
//! reusable SVG page templates, splits variable-length tables across first
//! and repeat page archetypes, and emits per-page SVG markup for browser
//! printing.
//!
//! - **svgtree**: owned SVG element tree, cloned per output page
//! - **source**: key-value and table data sources
//! - **template**: archetype/binding configuration and formatters
//! - **paginate**: pure row-window computation
//! - **textfit**: shrink/wrap/clip text fitting
//! - **render**: resolver, binder and the rendering orchestrator
//!
//! ## Design principle
//!
//! The core is synchronous and does no I/O: inputs (parsed templates,
//! configuration, data sources) are fully materialized by the caller, and a
//! render either returns the complete ordered page list or the first error.
//! Archetype documents are read-only blueprints; each page binds against its
//! own deep clone, so parsed templates are safely reusable across jobs.

// Re-export foundation crates
pub use platen_source as source;
pub use platen_svgtree as svgtree;
pub use platen_types as types;

// Re-export algorithm crates
pub use platen_paginate as paginate;
pub use platen_template as template;
pub use platen_textfit as textfit;

// Re-export the integration layer
pub use platen_render as render;

// Re-export commonly used types
pub use platen_render::{
    RenderError, RenderJob, RenderOptions, RenderResult, RenderedPage, Renderer, Warning,
};
pub use platen_source::{DataSet, DataSource, Row};
pub use platen_svgtree::SvgDocument;
pub use platen_template::{FormatterRegistry, TemplateConfig};
pub use platen_textfit::{FitEngine, FitOptions, FitPolicy};
pub use platen_types::{ArchetypeId, ArchetypeKind, ElementId, SourceName};
