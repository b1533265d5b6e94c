use serde::{Deserialize, Serialize};

/// Which role a page archetype plays in a multi-page document.
///
/// A template configures exactly one `First` archetype and at most one
/// `Repeat` archetype; overflow table rows spill onto repeat pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeKind {
    First,
    Repeat,
}

impl std::fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchetypeKind::First => write!(f, "first"),
            ArchetypeKind::Repeat => write!(f, "repeat"),
        }
    }
}
