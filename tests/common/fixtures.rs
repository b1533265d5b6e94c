//! Shared builders for integration tests: template documents, template
//! configurations and data sets for a small invoice-like document.

use platen::{ArchetypeId, DataSet, DataSource, Row, SvgDocument, TemplateConfig};
use serde_json::json;
use std::collections::HashMap;

/// Initializes logging once for test binaries; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const FIRST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm" viewBox="0 0 210 297">
  <text id="title" x="105" y="20" font-size="6" text-anchor="middle">請求書</text>
  <text id="customer-name" x="15" y="40" font-size="4" data-width="80"/>
  <text id="issue-date" x="150" y="40" font-size="3.5" data-width="40"/>
  <g id="row-group">
    <text id="cell-name" x="20" y="90" font-size="3" data-width="70"/>
    <text id="cell-amount" x="185" y="90" font-size="3" data-width="30"/>
  </g>
  <text id="page-no" x="105" y="290" font-size="2.5"/>
</svg>"#;

pub const REPEAT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="210mm" height="297mm" viewBox="0 0 210 297">
  <text id="carry-label" x="15" y="20" font-size="3.5">明細（続き）</text>
  <g id="row-group">
    <text id="cell-name" x="20" y="40" font-size="3" data-width="70"/>
    <text id="cell-amount" x="185" y="40" font-size="3" data-width="30"/>
  </g>
  <text id="page-no" x="105" y="290" font-size="2.5"/>
</svg>"#;

/// Parsed archetype documents keyed the way the renderer expects.
pub fn documents() -> HashMap<ArchetypeId, SvgDocument> {
    HashMap::from([
        (
            ArchetypeId::new("first"),
            SvgDocument::parse(FIRST_SVG).unwrap(),
        ),
        (
            ArchetypeId::new("repeat"),
            SvgDocument::parse(REPEAT_SVG).unwrap(),
        ),
    ])
}

fn items_table(rows_per_page: usize) -> serde_json::Value {
    json!({
        "source": "items",
        "rowGroup": "row-group",
        "rowPitchMm": 8.5,
        "rowsPerPage": rows_per_page,
        "cells": [
            { "target": "cell-name", "column": "name", "fit": "clip" },
            { "target": "cell-amount", "column": "amount", "align": "right", "formatter": "currency" }
        ]
    })
}

/// An invoice configuration with the given table capacities. `repeat_rows`
/// of `None` configures no repeat archetype at all.
pub fn invoice_config(first_rows: usize, repeat_rows: Option<usize>) -> TemplateConfig {
    let mut archetypes = vec![json!({
        "id": "first",
        "kind": "first",
        "fields": [
            {
                "target": "customer-name",
                "value": { "type": "dataRef", "source": "meta", "key": "customer" },
                "fit": "shrink"
            },
            {
                "target": "issue-date",
                "value": { "type": "dataRef", "source": "meta", "key": "issued" },
                "formatter": "date"
            }
        ],
        "tables": [items_table(first_rows)],
        "pageNumber": { "target": "page-no" }
    })];
    if let Some(repeat_rows) = repeat_rows {
        archetypes.push(json!({
            "id": "repeat",
            "kind": "repeat",
            "tables": [items_table(repeat_rows)],
            "pageNumber": { "target": "page-no" }
        }));
    }
    let config = json!({
        "templateId": "invoice-a4",
        "version": "3",
        "archetypes": archetypes
    });
    TemplateConfig::from_json(&config.to_string()).unwrap()
}

/// A data set with invoice metadata and `item_count` line items named
/// `Item-0`, `Item-1`, … in order.
pub fn invoice_data(item_count: usize) -> DataSet {
    let mut data = DataSet::new();
    data.insert(
        "meta",
        DataSource::KeyValue(HashMap::from([
            ("customer".to_string(), "Acme Trading Co.".to_string()),
            ("issued".to_string(), "2026-04-01".to_string()),
        ])),
    );
    let rows: Vec<Row> = (0..item_count)
        .map(|i| {
            Row::from([
                ("name".to_string(), format!("Item-{i}")),
                ("amount".to_string(), format!("{}", (i + 1) * 1000)),
            ])
        })
        .collect();
    data.insert("items", DataSource::Table(rows));
    data
}

/// The item names that appear in a page's markup, in document order.
pub fn item_names_in(markup: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(">Item-") {
        let tail = &rest[start + 1..];
        let end = tail.find('<').unwrap();
        names.push(tail[..end].to_string());
        rest = &tail[end..];
    }
    names
}
