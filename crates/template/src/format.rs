//! Value formatters.
//!
//! Formatting happens after value resolution and before text fitting. The
//! built-in set is a closed enum so dispatch stays exhaustive; anything else
//! goes through the explicit name-to-function extension map. The registry is
//! plain owned data passed into each render, never process-wide state.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// The closed set of built-in formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFormatter {
    /// Identity.
    Raw,
    /// `YYYY-MM-DD` or `YYYY/MM/DD` input rendered as `YYYY/MM/DD`.
    Date,
    /// Thousands separators on the integer part.
    Number,
    /// Number formatting with a currency symbol prefix.
    Currency,
}

impl BuiltinFormatter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw" => Some(Self::Raw),
            "date" => Some(Self::Date),
            "number" => Some(Self::Number),
            "currency" => Some(Self::Currency),
            _ => None,
        }
    }
}

/// A caller-supplied formatter function.
pub type CustomFormatter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Maps formatter names to formatting functions.
pub struct FormatterRegistry {
    currency_symbol: String,
    custom: HashMap<String, CustomFormatter>,
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("currency_symbol", &self.currency_symbol)
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            custom: HashMap::new(),
        }
    }
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency_symbol(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: symbol.into(),
            custom: HashMap::new(),
        }
    }

    /// Registers a custom formatter. Built-in names cannot be shadowed.
    pub fn register(&mut self, name: impl Into<String>, formatter: CustomFormatter) {
        self.custom.insert(name.into(), formatter);
    }

    /// Formats a raw value. Returns `None` when the name is unknown, so the
    /// caller can fall back to the raw value and record a warning.
    pub fn format(&self, name: &str, raw: &str) -> Option<String> {
        if let Some(builtin) = BuiltinFormatter::from_name(name) {
            return Some(self.apply_builtin(builtin, raw));
        }
        self.custom.get(name).map(|f| f(raw))
    }

    fn apply_builtin(&self, formatter: BuiltinFormatter, raw: &str) -> String {
        match formatter {
            BuiltinFormatter::Raw => raw.to_string(),
            BuiltinFormatter::Date => format_date(raw),
            BuiltinFormatter::Number => format_number(raw),
            BuiltinFormatter::Currency => match parse_number(raw) {
                Some(formatted) => format!("{}{}", self.currency_symbol, formatted),
                None => raw.to_string(),
            },
        }
    }
}

/// Unparseable dates pass through unchanged; a slip should still print when
/// a metadata field holds free text.
fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"));
    match parsed {
        Ok(date) => date.format("%Y/%m/%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn format_number(raw: &str) -> String {
    parse_number(raw).unwrap_or_else(|| raw.to_string())
}

/// Renders a decimal string with thousands separators, or `None` when the
/// input is not a plain decimal number.
fn parse_number(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.is_some_and(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    for (i, b) in integer.bytes().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(b as char);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Some(out)
}
