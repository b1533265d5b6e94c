//! Rendering orchestration.
//!
//! Pass 1 paginates every table so the final page count is known up front;
//! pass 2 binds pages strictly in increasing page order. Multiple tables on
//! one archetype advance in lockstep by page index; there is no tie-break
//! rule for tables that would want different page counts, the longest one
//! simply determines the total.

use crate::binder::{BindReport, Binder};
use crate::error::{RenderError, Warning};
use crate::resolve::resolve;
use crate::trace::{PageTrace, RenderTrace};
use itertools::Itertools;
use platen_paginate::{Capacities, RowWindow, paginate};
use platen_source::{DataSet, Row};
use platen_svgtree::SvgDocument;
use platen_template::{FieldBinding, FormatterRegistry, TemplateConfig};
use platen_textfit::FitEngine;
use platen_types::{ArchetypeId, SourceName};
use std::collections::HashMap;

/// Identity of one render request, echoed into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub job_id: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Drop the pages of tables with zero rows instead of rendering an
    /// empty first page.
    pub skip_empty_tables: bool,
    /// Collect a structured trace of every binding decision.
    pub trace: bool,
}

/// One serialized output page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// 1-based, contiguous across the whole render.
    pub page_number: usize,
    pub archetype: ArchetypeId,
    pub markup: String,
}

/// The complete output of a successful render.
#[derive(Debug)]
pub struct RenderResult {
    pub job_id: String,
    pub template_id: String,
    pub template_version: String,
    pub total_pages: usize,
    pub pages: Vec<RenderedPage>,
    pub warnings: Vec<Warning>,
    pub trace: Option<RenderTrace>,
}

/// Drives paginator and binder across all tables and pages.
///
/// Holds the fit engine and formatter registry as explicit, owned
/// configuration, so concurrent renders of different jobs never share
/// mutable state.
#[derive(Debug, Default)]
pub struct Renderer {
    fit: FitEngine,
    formatters: FormatterRegistry,
}

impl Renderer {
    pub fn new(fit: FitEngine, formatters: FormatterRegistry) -> Self {
        Self { fit, formatters }
    }

    /// Renders all pages of one job. Fails atomically: any error aborts the
    /// render with no partial output.
    pub fn render(
        &self,
        job: &RenderJob,
        config: &TemplateConfig,
        data: &DataSet,
        documents: &HashMap<ArchetypeId, SvgDocument>,
        options: RenderOptions,
    ) -> Result<RenderResult, RenderError> {
        config.validate()?;
        let first = config
            .first()
            .ok_or(platen_template::TemplateError::FirstArchetypeCount(0))?;
        let repeat = config.repeat();

        let mut warnings = Vec::new();

        // Pass 1: row windows for every table source, in archetype order.
        let sources: Vec<SourceName> = [Some(first), repeat]
            .into_iter()
            .flatten()
            .flat_map(|a| a.tables.iter().map(|t| t.source.clone()))
            .unique()
            .collect();

        let mut windows: HashMap<SourceName, Vec<RowWindow>> = HashMap::new();
        for source in &sources {
            if data.table(source).is_none() {
                warnings.push(Warning::MissingTableSource {
                    source: source.clone(),
                });
            }
            let capacities = Capacities {
                first: first.table_for(source).map_or(0, |t| t.rows_per_page),
                repeat: repeat
                    .and_then(|a| a.table_for(source))
                    .map(|t| t.rows_per_page),
            };
            let source_windows = paginate(
                capacities,
                data.row_count(source),
                options.skip_empty_tables,
            )
            .map_err(|error| RenderError::Paginate {
                table: source.clone(),
                error,
            })?;
            windows.insert(source.clone(), source_windows);
        }

        let table_pages = windows.values().map(Vec::len).max().unwrap_or(0);
        let total_pages = if sources.is_empty() { 1 } else { table_pages };

        // Pass 2: bind pages in increasing page order.
        let binder = Binder::new(&self.fit, &self.formatters);
        let mut pages = Vec::with_capacity(total_pages);
        let mut trace = options.trace.then(RenderTrace::default);

        for page_index in 0..total_pages {
            let archetype = if page_index == 0 {
                first
            } else {
                repeat.ok_or(RenderError::MissingRepeatArchetype {
                    page_number: page_index + 1,
                })?
            };
            let page_number = page_index + 1;

            let mut doc = documents
                .get(&archetype.id)
                .ok_or_else(|| RenderError::MissingDocument(archetype.id.clone()))?
                .clone();
            let mut report = BindReport::default();

            self.bind_fields(&binder, &mut doc, &archetype.fields, data, &mut report)
                .map_err(|e| e.at(page_number, &archetype.id))?;

            for table in &archetype.tables {
                self.bind_fields(&binder, &mut doc, &table.header, data, &mut report)
                    .map_err(|e| e.at(page_number, &archetype.id))?;

                let rows: &[Row] = match (data.table(&table.source), windows.get(&table.source)) {
                    (Some(all_rows), Some(source_windows)) => source_windows
                        .get(page_index)
                        .map_or(&[], |w| &all_rows[w.range()]),
                    _ => &[],
                };
                binder
                    .bind_table_window(&mut doc, table, rows, &mut report)
                    .map_err(|e| e.at(page_number, &archetype.id))?;
            }

            if let Some(page_number_binding) = &archetype.page_number {
                binder
                    .bind_page_number(
                        &mut doc,
                        page_number_binding,
                        page_number,
                        total_pages,
                        &mut report,
                    )
                    .map_err(|e| e.at(page_number, &archetype.id))?;
            }

            log::debug!(
                "bound page {page_number}/{total_pages} (archetype '{}', {} bindings)",
                archetype.id,
                report.traces.len()
            );
            if let Some(trace) = trace.as_mut() {
                trace.pages.push(PageTrace {
                    page_number,
                    archetype: archetype.id.to_string(),
                    bindings: report.traces,
                });
            }
            warnings.extend(report.warnings);

            pages.push(RenderedPage {
                page_number,
                archetype: archetype.id.clone(),
                markup: doc.serialize(),
            });
        }

        for warning in &warnings {
            log::warn!("{warning}");
        }

        Ok(RenderResult {
            job_id: job.job_id.clone(),
            template_id: config.template_id.clone(),
            template_version: config.version.clone(),
            total_pages,
            pages,
            warnings,
            trace,
        })
    }

    fn bind_fields(
        &self,
        binder: &Binder<'_>,
        doc: &mut SvgDocument,
        fields: &[FieldBinding],
        data: &DataSet,
        report: &mut BindReport,
    ) -> Result<(), crate::error::BindError> {
        for field in fields {
            let resolved = resolve(&field.value, data, &field.target);
            if let Some(warning) = resolved.warning {
                report.warnings.push(warning);
            }
            binder.bind_field(doc, field, &resolved.value, report)?;
        }
        Ok(())
    }
}
