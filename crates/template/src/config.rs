use crate::error::TemplateError;
use platen_textfit::FitPolicy;
use platen_types::{ArchetypeId, ArchetypeKind, ElementId, SourceName};
use serde::Deserialize;

/// Where a bound value comes from: authored text or a data-source lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ValueBinding {
    /// A fixed string authored with the template.
    Static { text: String },
    /// A lookup of `key` in the named key-value source.
    #[serde(rename_all = "camelCase")]
    DataRef { source: SourceName, key: String },
}

/// Horizontal alignment of a bound value inside its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The SVG `text-anchor` value realizing this alignment.
    pub fn text_anchor(self) -> &'static str {
        match self {
            Alignment::Left => "start",
            Alignment::Center => "middle",
            Alignment::Right => "end",
        }
    }
}

/// Binds one value to one template element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    /// Id of the element receiving the value.
    pub target: ElementId,
    pub value: ValueBinding,
    #[serde(default)]
    pub fit: FitPolicy,
    #[serde(default)]
    pub align: Alignment,
    /// Name of a formatter applied before fitting, if any.
    #[serde(default)]
    pub formatter: Option<String>,
}

/// Binds one table column to one cell element inside the row group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellBinding {
    /// Id of the cell element within the row-group subtree.
    pub target: ElementId,
    /// Column of the source row providing the value.
    pub column: String,
    #[serde(default)]
    pub fit: FitPolicy,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub formatter: Option<String>,
}

/// Binds a table data source onto a repeating row group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBinding {
    /// Name of the table source feeding the rows.
    pub source: SourceName,
    /// Id of the row-group element cloned once per row.
    pub row_group: ElementId,
    /// Vertical distance between successive rows, in mm.
    pub row_pitch_mm: f32,
    /// Rows this archetype's table region holds.
    pub rows_per_page: usize,
    /// Overrides the row group's own y position as the table start, in mm.
    #[serde(default)]
    pub start_y_mm: Option<f32>,
    /// Bound once per page, outside the repeating rows.
    #[serde(default)]
    pub header: Vec<FieldBinding>,
    /// Bound once per row from the row's columns.
    #[serde(default)]
    pub cells: Vec<CellBinding>,
}

/// Substitutes `{current}` and `{total}` into a page-number element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNumberBinding {
    pub target: ElementId,
    #[serde(default = "default_page_number_format")]
    pub format: String,
}

fn default_page_number_format() -> String {
    "{current}/{total}".to_string()
}

/// A named page blueprint with its bindings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArchetype {
    pub id: ArchetypeId,
    pub kind: ArchetypeKind,
    #[serde(default)]
    pub fields: Vec<FieldBinding>,
    #[serde(default)]
    pub tables: Vec<TableBinding>,
    #[serde(default)]
    pub page_number: Option<PageNumberBinding>,
}

impl PageArchetype {
    /// The table binding for a given source on this archetype, if any.
    pub fn table_for(&self, source: &SourceName) -> Option<&TableBinding> {
        self.tables.iter().find(|t| &t.source == source)
    }
}

/// The validated template configuration for one document type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub template_id: String,
    pub version: String,
    pub archetypes: Vec<PageArchetype>,
}

impl TemplateConfig {
    /// Parses a configuration from JSON and checks archetype cardinality.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that exactly one `first` archetype exists and at most one
    /// `repeat`. Schema-level validation happens upstream; this is the
    /// structural rule the renderer itself depends on.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let firsts = self.count(ArchetypeKind::First);
        if firsts != 1 {
            return Err(TemplateError::FirstArchetypeCount(firsts));
        }
        let repeats = self.count(ArchetypeKind::Repeat);
        if repeats > 1 {
            return Err(TemplateError::TooManyRepeatArchetypes(repeats));
        }
        Ok(())
    }

    fn count(&self, kind: ArchetypeKind) -> usize {
        self.archetypes.iter().filter(|a| a.kind == kind).count()
    }

    /// The first-page archetype. Valid configurations always have one.
    pub fn first(&self) -> Option<&PageArchetype> {
        self.archetypes
            .iter()
            .find(|a| a.kind == ArchetypeKind::First)
    }

    /// The repeat-page archetype, if configured.
    pub fn repeat(&self) -> Option<&PageArchetype> {
        self.archetypes
            .iter()
            .find(|a| a.kind == ArchetypeKind::Repeat)
    }
}
