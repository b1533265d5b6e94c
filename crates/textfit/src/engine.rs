use crate::width::text_width;
use crate::wrap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FitError {
    #[error("invalid geometry: box width {box_width} / font size {font_size} must be positive")]
    InvalidGeometry { box_width: f32, font_size: f32 },
}

/// How a bound string is reconciled with its element's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPolicy {
    /// Leave the text alone regardless of overflow.
    #[default]
    None,
    /// Reduce the font size proportionally, down to a floor.
    Shrink,
    /// Pack the text into multiple lines at nominal size.
    Wrap,
    /// Truncate to the longest fitting prefix, with an ellipsis.
    Clip,
}

/// Box and font geometry of the element a value is bound to.
///
/// Units are whatever the template uses (mm throughout the standard
/// templates); box width and font size just have to agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    pub box_width: f32,
    pub font_size: f32,
}

/// Tunable fit constants. The defaults match the calibrated templates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Lowest font scale `Shrink` may apply, as a fraction of nominal.
    pub min_scale: f32,
    /// Line height as a multiple of font size, used by `Wrap`.
    pub leading: f32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            leading: 1.2,
        }
    }
}

/// The result of applying a fit policy.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    /// The text fits (or the policy does not care); use it as-is.
    Unchanged { text: String },
    /// The text was kept whole but the font size was reduced.
    Shrunk { text: String, font_size: f32 },
    /// The text was split into lines at nominal size.
    Wrapped { lines: Vec<String>, line_height: f32 },
    /// The text was truncated; `text` already carries the ellipsis.
    Clipped { text: String },
}

/// Applies fit policies. Pure: identical inputs produce identical outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitEngine {
    options: FitOptions,
}

const ELLIPSIS: char = '\u{2026}';

impl FitEngine {
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FitOptions {
        self.options
    }

    pub fn fit(
        &self,
        metrics: ElementMetrics,
        text: &str,
        policy: FitPolicy,
    ) -> Result<FitOutcome, FitError> {
        if metrics.box_width <= 0.0 || metrics.font_size <= 0.0 {
            return Err(FitError::InvalidGeometry {
                box_width: metrics.box_width,
                font_size: metrics.font_size,
            });
        }

        Ok(match policy {
            FitPolicy::None => FitOutcome::Unchanged { text: text.to_string() },
            FitPolicy::Shrink => self.shrink(metrics, text),
            FitPolicy::Wrap => FitOutcome::Wrapped {
                lines: wrap::break_lines(text, metrics.box_width, metrics.font_size),
                line_height: metrics.font_size * self.options.leading,
            },
            FitPolicy::Clip => self.clip(metrics, text),
        })
    }

    fn shrink(&self, metrics: ElementMetrics, text: &str) -> FitOutcome {
        let natural = text_width(text, metrics.font_size);
        if natural <= metrics.box_width {
            return FitOutcome::Unchanged { text: text.to_string() };
        }
        // Never scale up; floor at min_scale of nominal.
        let scale = (metrics.box_width / natural).max(self.options.min_scale);
        FitOutcome::Shrunk {
            text: text.to_string(),
            font_size: metrics.font_size * scale,
        }
    }

    fn clip(&self, metrics: ElementMetrics, text: &str) -> FitOutcome {
        if text_width(text, metrics.font_size) <= metrics.box_width {
            return FitOutcome::Unchanged { text: text.to_string() };
        }

        // Longest prefix such that prefix + ellipsis still fits.
        let budget = metrics.box_width - crate::width::char_width(ELLIPSIS, metrics.font_size);
        let mut used = 0.0f32;
        let mut clipped = String::new();
        for c in text.chars() {
            let w = crate::width::char_width(c, metrics.font_size);
            if used + w > budget {
                break;
            }
            clipped.push(c);
            used += w;
        }
        clipped.push(ELLIPSIS);
        FitOutcome::Clipped { text: clipped }
    }
}
