//! Foundation types shared across the platen crates.

pub mod archetype;
pub mod ids;

pub use archetype::ArchetypeKind;
pub use ids::{ArchetypeId, ElementId, SourceName};
