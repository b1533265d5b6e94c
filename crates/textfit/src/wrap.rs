//! Greedy line packing.
//!
//! CJK text may break between any two characters; Latin text breaks only at
//! whitespace. A Latin word wider than the whole box is hard-broken at a
//! character boundary as a last resort, so packing always terminates.

use crate::width::{char_width, is_full_width, text_width};

enum Token<'a> {
    Word(&'a str),
    FullWidth(char),
    Space,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start = None;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() || is_full_width(c) {
            if let Some(start) = word_start.take() {
                tokens.push(Token::Word(&text[start..idx]));
            }
            if is_full_width(c) {
                tokens.push(Token::FullWidth(c));
            } else {
                tokens.push(Token::Space);
            }
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::Word(&text[start..]));
    }
    tokens
}

/// Packs text into lines whose estimated width does not exceed `max_width`
/// at the given font size. Leading whitespace on continuation lines is
/// dropped; an empty input yields no lines.
pub fn break_lines(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0f32;

    // Trailing spaces at a break point carry no visual width.
    let mut flush = |line: &mut String, line_width: &mut f32, lines: &mut Vec<String>| {
        lines.push(line.trim_end().to_string());
        line.clear();
        *line_width = 0.0;
    };

    for token in tokenize(text) {
        match token {
            Token::Space => {
                // Spaces never start a line.
                if line.is_empty() {
                    continue;
                }
                let w = char_width(' ', font_size);
                if line_width + w > max_width {
                    flush(&mut line, &mut line_width, &mut lines);
                } else {
                    line.push(' ');
                    line_width += w;
                }
            }
            Token::FullWidth(c) => {
                let w = char_width(c, font_size);
                if line_width + w > max_width && !line.is_empty() {
                    flush(&mut line, &mut line_width, &mut lines);
                }
                line.push(c);
                line_width += w;
            }
            Token::Word(word) => {
                let w = text_width(word, font_size);
                if line_width + w <= max_width {
                    line.push_str(word);
                    line_width += w;
                    continue;
                }
                if !line.is_empty() {
                    flush(&mut line, &mut line_width, &mut lines);
                }
                if w <= max_width {
                    line.push_str(word);
                    line_width = w;
                } else {
                    // Overlong word: hard-break at character boundaries.
                    for c in word.chars() {
                        let cw = char_width(c, font_size);
                        if line_width + cw > max_width && !line.is_empty() {
                            flush(&mut line, &mut line_width, &mut lines);
                        }
                        line.push(c);
                        line_width += cw;
                    }
                }
            }
        }
    }

    // Trailing spaces do not earn a line of their own.
    let trailing = line.trim_end();
    if !trailing.is_empty() {
        lines.push(trailing.to_string());
    }
    lines
}
