//! Owned SVG element tree.
//!
//! Page archetype templates are parsed once into an [`SvgDocument`], an
//! owned tree that is cheap to address by element id and safe to deep-clone.
//! Every rendered page starts from a fresh clone of the archetype document,
//! so no mutation ever leaks back into the shared blueprint.
//!
//! Parsing uses `roxmltree`; serialization uses `quick-xml` escaping so
//! text and attribute values are safe on the way out.

mod document;
mod element;
mod error;
mod serialize;

pub use document::SvgDocument;
pub use element::{SvgElement, SvgNode};
pub use error::SvgTreeError;
