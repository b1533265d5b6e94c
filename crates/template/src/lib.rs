//! Template configuration model.
//!
//! A template description arrives as JSON (schema conformance is checked
//! upstream) and deserializes into the types here: page archetypes, field
//! and table bindings, and the page-number binding. The configuration is
//! immutable once parsed; the renderer only reads it.
//!
//! The formatter registry also lives here: a closed set of built-in
//! formatters plus a name-to-function extension point, constructed
//! explicitly by the caller so renders stay reentrant with no global state.

mod config;
mod error;
pub mod format;

pub use config::{
    Alignment, CellBinding, FieldBinding, PageArchetype, PageNumberBinding, TableBinding,
    TemplateConfig, ValueBinding,
};
pub use error::TemplateError;
pub use format::{BuiltinFormatter, FormatterRegistry};
