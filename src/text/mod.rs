//! # Text Wrapping
//!
//! Greedy word wrap for block bodies. Lines break at spaces, never inside a
//! word; a word wider than the whole line gets a line to itself and is
//! allowed to overshoot. `\n` in the input always forces a break.
//!
//! Wrapping is lossless short of newlines: rejoining a segment's lines with
//! single spaces reproduces the segment, double spaces and all. Each line
//! break consumes exactly one space from the input.

use crate::font::StandardFont;

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Always returns at least one line; empty input yields one empty line so
/// every block keeps a measurable height.
pub fn wrap(text: &str, font: StandardFont, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let segment = segment.strip_suffix('\r').unwrap_or(segment);
        wrap_segment(segment, font, size, max_width, &mut lines);
    }
    lines
}

fn wrap_segment(
    segment: &str,
    font: StandardFont,
    size: f64,
    max_width: f64,
    lines: &mut Vec<String>,
) {
    // split(' ') keeps empty tokens, so runs of spaces survive the
    // round trip through wrapping.
    let mut current = String::new();
    let mut has_token = false;

    for token in segment.split(' ') {
        if !has_token {
            current.push_str(token);
            has_token = true;
            continue;
        }
        let candidate_width =
            font.measure(&current, size) + font.char_width(' ', size) + font.measure(token, size);
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(token);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
        }
    }
    lines.push(current);
}
