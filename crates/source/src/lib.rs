//! Data source abstractions for the binding pipeline.
//!
//! A render consumes a set of named, fully materialized sources. A source is
//! either a flat key-value mapping (document metadata such as customer name
//! or issue date) or a table of ordered rows (line items). Sources are
//! read-only for the duration of a render; row order is significant and
//! preserved.
//!
//! Parsing raw inputs (CSV files, archive entries) into sources happens
//! upstream; this crate only models the already-parsed form.

use platen_types::SourceName;
use std::collections::HashMap;

/// One row of a table source: column name to cell value.
pub type Row = HashMap<String, String>;

/// A single named data source.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A flat string-to-string mapping.
    KeyValue(HashMap<String, String>),
    /// An ordered sequence of rows.
    Table(Vec<Row>),
}

impl DataSource {
    /// Looks up a key in a key-value source. Returns `None` for table
    /// sources or missing keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            DataSource::KeyValue(map) => map.get(key).map(String::as_str),
            DataSource::Table(_) => None,
        }
    }

    /// The rows of a table source. Returns `None` for key-value sources.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            DataSource::Table(rows) => Some(rows),
            DataSource::KeyValue(_) => None,
        }
    }
}

/// The full set of named sources available to one render.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    sources: HashMap<SourceName, DataSource>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a source under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<SourceName>, source: DataSource) {
        self.sources.insert(name.into(), source);
    }

    pub fn get(&self, name: &SourceName) -> Option<&DataSource> {
        self.sources.get(name)
    }

    /// Resolves `source.key` to a value, if both exist.
    pub fn lookup(&self, name: &SourceName, key: &str) -> Option<&str> {
        self.sources.get(name)?.get(key)
    }

    /// The rows of a named table source, if it exists and is a table.
    pub fn table(&self, name: &SourceName) -> Option<&[Row]> {
        self.sources.get(name)?.rows()
    }

    /// Row count of a named table source; zero when absent or not a table.
    pub fn row_count(&self, name: &SourceName) -> usize {
        self.table(name).map_or(0, <[Row]>::len)
    }
}
