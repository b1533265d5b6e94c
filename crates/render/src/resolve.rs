//! Value resolution: from a [`ValueBinding`] to a raw string.

use crate::error::Warning;
use platen_source::DataSet;
use platen_template::ValueBinding;
use platen_types::ElementId;

/// The outcome of resolving one value binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: String,
    pub warning: Option<Warning>,
}

impl Resolved {
    fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            warning: None,
        }
    }
}

/// Resolves a binding against the active data sources.
///
/// A dangling `DataRef` resolves to the empty string with a warning rather
/// than failing: documents should still print despite metadata gaps.
pub fn resolve(binding: &ValueBinding, data: &DataSet, element: &ElementId) -> Resolved {
    match binding {
        ValueBinding::Static { text } => Resolved::ok(text.clone()),
        ValueBinding::DataRef { source, key } => match data.lookup(source, key) {
            Some(value) => Resolved::ok(value),
            None => Resolved {
                value: String::new(),
                warning: Some(Warning::UnresolvedDataReference {
                    source: source.clone(),
                    key: key.clone(),
                    element: element.clone(),
                }),
            },
        },
    }
}
