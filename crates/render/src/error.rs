//! Error and warning types for the rendering pipeline.
//!
//! Everything here is fatal except [`Warning`]: a warning accumulates next
//! to a successful result, because a document should still print when a
//! metadata field is missing, while a partially wrong invoice must never be
//! emitted.

use platen_paginate::PaginateError;
use platen_textfit::FitError;
use platen_types::{ArchetypeId, ElementId, SourceName};
use std::fmt;
use thiserror::Error;

/// A fatal rendering error. Fatal errors abort the whole render; variants
/// raised while binding a page carry the page number and archetype id.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid template configuration: {0}")]
    Config(#[from] platen_template::TemplateError),

    #[error("pagination of table '{table}' failed: {error}")]
    Paginate {
        table: SourceName,
        #[source]
        error: PaginateError,
    },

    #[error("page {page_number} requires a repeat archetype but none is configured")]
    MissingRepeatArchetype { page_number: usize },

    #[error("no parsed template document for archetype '{0}'")]
    MissingDocument(ArchetypeId),

    #[error("page {page_number}, archetype '{archetype}': element '{element}' not found in template document")]
    MissingElement {
        page_number: usize,
        archetype: ArchetypeId,
        element: ElementId,
    },

    #[error("page {page_number}, archetype '{archetype}', element '{element}': {error}")]
    Fit {
        page_number: usize,
        archetype: ArchetypeId,
        element: ElementId,
        error: FitError,
    },
}

/// A binder-level failure, before page context is known. The renderer
/// attaches page number and archetype id when propagating.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("element '{0}' not found")]
    MissingElement(ElementId),

    #[error("element '{element}': {error}")]
    Fit { element: ElementId, error: FitError },
}

impl BindError {
    /// Attaches page and archetype context, producing the fatal error.
    pub fn at(self, page_number: usize, archetype: &ArchetypeId) -> RenderError {
        match self {
            BindError::MissingElement(element) => RenderError::MissingElement {
                page_number,
                archetype: archetype.clone(),
                element,
            },
            BindError::Fit { element, error } => RenderError::Fit {
                page_number,
                archetype: archetype.clone(),
                element,
                error,
            },
        }
    }
}

/// A non-fatal problem recorded alongside a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `DataRef` named a source or key that does not exist; the element
    /// was rendered empty.
    UnresolvedDataReference {
        source: SourceName,
        key: String,
        element: ElementId,
    },
    /// A table binding named a source that is absent or not a table; the
    /// table body was rendered empty.
    MissingTableSource { source: SourceName },
    /// A binding named a formatter the registry does not know; the raw
    /// value was used.
    UnknownFormatter { name: String, element: ElementId },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnresolvedDataReference {
                source,
                key,
                element,
            } => write!(
                f,
                "unresolved data reference '{source}.{key}' for element '{element}', rendered empty"
            ),
            Warning::MissingTableSource { source } => {
                write!(f, "table source '{source}' is missing or not a table")
            }
            Warning::UnknownFormatter { name, element } => {
                write!(f, "unknown formatter '{name}' for element '{element}', raw value used")
            }
        }
    }
}
