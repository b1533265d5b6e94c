//! Structured trace of binding decisions.
//!
//! Enabled by [`RenderOptions::trace`](crate::RenderOptions); consumed by an
//! external debug-dump writer. Tracing never changes what gets rendered.

use platen_textfit::FitOutcome;
use serde::Serialize;

/// The fit decision taken for one binding, without the full payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum FitDecision {
    /// Policy `none`, or the text fit as-is.
    Unchanged,
    #[serde(rename_all = "camelCase")]
    Shrunk { font_size: f32 },
    #[serde(rename_all = "camelCase")]
    Wrapped { line_count: usize },
    Clipped,
}

impl From<&FitOutcome> for FitDecision {
    fn from(outcome: &FitOutcome) -> Self {
        match outcome {
            FitOutcome::Unchanged { .. } => FitDecision::Unchanged,
            FitOutcome::Shrunk { font_size, .. } => FitDecision::Shrunk {
                font_size: *font_size,
            },
            FitOutcome::Wrapped { lines, .. } => FitDecision::Wrapped {
                line_count: lines.len(),
            },
            FitOutcome::Clipped { .. } => FitDecision::Clipped,
        }
    }
}

/// One binding applied to one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingTrace {
    pub element: String,
    /// Resolved value before formatting.
    pub raw: String,
    /// Value after formatting, as handed to the fit engine.
    pub formatted: String,
    pub fit: FitDecision,
}

/// All binding decisions taken on one output page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTrace {
    pub page_number: usize,
    pub archetype: String,
    pub bindings: Vec<BindingTrace>,
}

/// The full trace of one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTrace {
    pub pages: Vec<PageTrace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_serializes_to_json() {
        let trace = RenderTrace {
            pages: vec![PageTrace {
                page_number: 1,
                archetype: "first".to_string(),
                bindings: vec![BindingTrace {
                    element: "customer-name".to_string(),
                    raw: "Acme".to_string(),
                    formatted: "Acme".to_string(),
                    fit: FitDecision::Shrunk { font_size: 2.5 },
                }],
            }],
        };
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["pages"][0]["pageNumber"], 1);
        assert_eq!(json["pages"][0]["bindings"][0]["fit"]["decision"], "shrunk");
        assert_eq!(json["pages"][0]["bindings"][0]["fit"]["fontSize"], 2.5);
    }
}
