//! Character-class width table.
//!
//! The table distinguishes two classes: half-width characters (Latin,
//! digits, ASCII punctuation) and full-width characters (CJK ideographs,
//! kana, hangul, full-width forms). These ratios match how business
//! templates are calibrated; they are part of the output contract.

/// Advance of a half-width character, in em.
pub const HALF_WIDTH_EM: f32 = 0.5;

/// Advance of a full-width character, in em.
pub const FULL_WIDTH_EM: f32 = 1.0;

/// Whether a character renders full-width.
pub fn is_full_width(c: char) -> bool {
    matches!(u32::from(c),
        0x1100..=0x115F          // Hangul Jamo
        | 0x2E80..=0x303E        // CJK radicals, CJK punctuation
        | 0x3041..=0x33FF        // kana, CJK symbols
        | 0x3400..=0x4DBF        // CJK extension A
        | 0x4E00..=0x9FFF        // CJK unified ideographs
        | 0xA000..=0xA4CF        // Yi
        | 0xAC00..=0xD7A3        // Hangul syllables
        | 0xF900..=0xFAFF        // CJK compatibility ideographs
        | 0xFE30..=0xFE4F        // CJK compatibility forms
        | 0xFF00..=0xFF60        // full-width forms
        | 0xFFE0..=0xFFE6        // full-width signs
        | 0x20000..=0x2FFFD      // CJK extension B and beyond
        | 0x30000..=0x3FFFD)
}

/// Estimated advance of one character at a given font size.
pub fn char_width(c: char, font_size: f32) -> f32 {
    let em = if is_full_width(c) {
        FULL_WIDTH_EM
    } else {
        HALF_WIDTH_EM
    };
    em * font_size
}

/// Estimated rendered width of a string at a given font size.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(|c| char_width(c, font_size)).sum()
}
