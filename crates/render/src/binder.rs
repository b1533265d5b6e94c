//! Applies bindings to a cloned page document.
//!
//! The binder only ever mutates the clone it is handed; the shared archetype
//! blueprint is never touched. Fit geometry is read off the target element
//! itself: `data-width` (annotated during geometric normalization of the
//! template) and `font-size`.

use crate::error::{BindError, Warning};
use crate::trace::{BindingTrace, FitDecision};
use platen_source::Row;
use platen_svgtree::{SvgDocument, SvgElement, SvgNode};
use platen_template::{Alignment, FieldBinding, FormatterRegistry, PageNumberBinding, TableBinding};
use platen_textfit::{ElementMetrics, FitEngine, FitOutcome, FitPolicy};
use platen_types::ElementId;

/// Warnings and trace entries produced while binding one page.
#[derive(Debug, Default)]
pub struct BindReport {
    pub warnings: Vec<Warning>,
    pub traces: Vec<BindingTrace>,
}

/// Binds fields, table windows and page numbers onto one page clone.
pub struct Binder<'a> {
    fit: &'a FitEngine,
    formatters: &'a FormatterRegistry,
}

impl<'a> Binder<'a> {
    pub fn new(fit: &'a FitEngine, formatters: &'a FormatterRegistry) -> Self {
        Self { fit, formatters }
    }

    /// Writes a resolved field value into its target element, applying
    /// formatter, alignment and fit policy.
    pub fn bind_field(
        &self,
        doc: &mut SvgDocument,
        field: &FieldBinding,
        resolved: &str,
        report: &mut BindReport,
    ) -> Result<(), BindError> {
        let formatted =
            self.format_value(field.formatter.as_deref(), resolved, &field.target, report);
        let decision = apply_text(
            doc.root_mut(),
            &field.target,
            field.fit,
            field.align,
            &formatted,
            self.fit,
        )?;
        report.traces.push(BindingTrace {
            element: field.target.to_string(),
            raw: resolved.to_string(),
            formatted,
            fit: decision,
        });
        Ok(())
    }

    /// Materializes one row window: clones the row-group subtree per row,
    /// offsets each clone vertically, binds its cells, and finally replaces
    /// the unbound template with the bound rows.
    pub fn bind_table_window(
        &self,
        doc: &mut SvgDocument,
        table: &TableBinding,
        rows: &[Row],
        report: &mut BindReport,
    ) -> Result<(), BindError> {
        let template = doc
            .find_by_id(&table.row_group)
            .cloned()
            .ok_or_else(|| BindError::MissingElement(table.row_group.clone()))?;

        let start_y = table.start_y_mm.unwrap_or(0.0);
        let mut bound_rows = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let mut clone = template.clone();
            let offset = start_y + row_index as f32 * table.row_pitch_mm;
            if offset != 0.0 {
                clone.translate_y(offset);
            }

            for cell in &table.cells {
                let raw = match row.get(&cell.column) {
                    Some(value) => value.clone(),
                    None => {
                        report.warnings.push(Warning::UnresolvedDataReference {
                            source: table.source.clone(),
                            key: cell.column.clone(),
                            element: cell.target.clone(),
                        });
                        String::new()
                    }
                };
                let formatted =
                    self.format_value(cell.formatter.as_deref(), &raw, &cell.target, report);
                let decision = apply_text(
                    &mut clone,
                    &cell.target,
                    cell.fit,
                    cell.align,
                    &formatted,
                    self.fit,
                )?;
                report.traces.push(BindingTrace {
                    element: cell.target.to_string(),
                    raw,
                    formatted,
                    fit: decision,
                });
            }

            // Bound rows are copies; drop their ids so the page has no
            // duplicates of the template's.
            strip_ids(&mut clone);
            bound_rows.push(clone);
        }

        doc.root_mut().replace_by_id(&table.row_group, bound_rows);
        Ok(())
    }

    /// Substitutes `{current}`/`{total}` into the page-number element.
    pub fn bind_page_number(
        &self,
        doc: &mut SvgDocument,
        binding: &PageNumberBinding,
        current: usize,
        total: usize,
        report: &mut BindReport,
    ) -> Result<(), BindError> {
        let text = binding
            .format
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string());
        let element = doc
            .find_by_id_mut(&binding.target)
            .ok_or_else(|| BindError::MissingElement(binding.target.clone()))?;
        element.set_text(text.clone());
        report.traces.push(BindingTrace {
            element: binding.target.to_string(),
            raw: binding.format.clone(),
            formatted: text,
            fit: FitDecision::Unchanged,
        });
        Ok(())
    }

    /// Applies a named formatter, falling back to the raw value with a
    /// warning when the registry does not know the name.
    pub(crate) fn format_value(
        &self,
        formatter: Option<&str>,
        raw: &str,
        element: &ElementId,
        report: &mut BindReport,
    ) -> String {
        match formatter {
            None => raw.to_string(),
            Some(name) => match self.formatters.format(name, raw) {
                Some(formatted) => formatted,
                None => {
                    report.warnings.push(Warning::UnknownFormatter {
                        name: name.to_string(),
                        element: element.clone(),
                    });
                    raw.to_string()
                }
            },
        }
    }
}

/// Locates the target element and writes the fit-adjusted text into it.
fn apply_text(
    root: &mut SvgElement,
    target: &ElementId,
    policy: FitPolicy,
    align: Alignment,
    text: &str,
    fit: &FitEngine,
) -> Result<FitDecision, BindError> {
    let element = root
        .find_by_id_mut(target)
        .ok_or_else(|| BindError::MissingElement(target.clone()))?;
    element.set_attr("text-anchor", align.text_anchor());

    if policy == FitPolicy::None {
        element.set_text(text);
        return Ok(FitDecision::Unchanged);
    }

    let metrics = ElementMetrics {
        box_width: element.attr_f32("data-width").unwrap_or(0.0),
        font_size: element.attr_f32("font-size").unwrap_or(0.0),
    };
    let outcome = fit
        .fit(metrics, text, policy)
        .map_err(|error| BindError::Fit {
            element: target.clone(),
            error,
        })?;
    let decision = FitDecision::from(&outcome);

    match outcome {
        FitOutcome::Unchanged { text } | FitOutcome::Clipped { text } => element.set_text(text),
        FitOutcome::Shrunk { text, font_size } => {
            element.set_text(text);
            element.set_attr("font-size", fmt_num(font_size));
        }
        FitOutcome::Wrapped { lines, line_height } => {
            if lines.len() <= 1 {
                element.set_text(lines.into_iter().next().unwrap_or_default());
            } else {
                // Sub-lines keep the original x; y steps down one line
                // height per line from the original baseline.
                let x = element.attr("x").unwrap_or("0").to_string();
                let y0 = element.attr_f32("y").unwrap_or(0.0);
                element.children_mut().clear();
                for (line_index, line) in lines.into_iter().enumerate() {
                    let mut tspan = SvgElement::new("tspan");
                    tspan.set_attr("x", x.clone());
                    tspan.set_attr("y", fmt_num(y0 + line_index as f32 * line_height));
                    tspan.set_text(line);
                    element.push_child(SvgNode::Element(tspan));
                }
            }
        }
    }
    Ok(decision)
}

fn strip_ids(element: &mut SvgElement) {
    element.remove_attr("id");
    for child in element.children_mut() {
        if let SvgNode::Element(e) = child {
            strip_ids(e);
        }
    }
}

/// Formats a coordinate or font size without trailing zeros.
fn fmt_num(value: f32) -> String {
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
