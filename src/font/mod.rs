//! # Fonts
//!
//! Text measurement for the two faces the report uses: Helvetica for body
//! text and Helvetica-Bold for titles and badge labels. Both belong to the
//! PDF standard 14, so nothing is embedded: the viewer supplies the
//! glyphs and we only need advance widths to wrap and center text.
//!
//! Widths are compiled in from the Adobe AFM files, in 1/1000 em units.
//! Characters outside the table fall back to the width of a typical
//! lowercase glyph, which keeps wrapping sane for exotic input without
//! carrying the full Latin-1 table around.

/// A font the report can draw with.
///
/// Each variant maps to a fixed PDF resource name, so every page can share
/// one `/Font` dictionary and content streams can reference fonts without a
/// registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The `/BaseFont` name used in the font dictionary.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The resource name content streams select the font by.
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F0",
            StandardFont::HelveticaBold => "F1",
        }
    }

    /// Advance width of `ch` at `size` points.
    pub fn char_width(&self, ch: char, size: f64) -> f64 {
        let units = match self {
            StandardFont::Helvetica => helvetica_units(ch),
            StandardFont::HelveticaBold => helvetica_bold_units(ch),
        };
        units as f64 / 1000.0 * size
    }

    /// Total advance width of `text` at `size` points.
    pub fn measure(&self, text: &str, size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, size)).sum()
    }
}

// ── AFM advance widths ─────────────────────────────────────────
// Transcribed from Helvetica.afm and Helvetica-Bold.afm. Units per 1000 em.

fn helvetica_units(ch: char) -> u32 {
    match ch {
        ' ' => 278,
        '!' => 278,
        '"' => 355,
        '#' => 556,
        '$' => 556,
        '%' => 889,
        '&' => 667,
        '\'' => 191,
        '(' => 333,
        ')' => 333,
        '*' => 389,
        '+' => 584,
        ',' => 278,
        '-' => 333,
        '.' => 278,
        '/' => 278,
        '0'..='9' => 556,
        ':' => 278,
        ';' => 278,
        '<' => 584,
        '=' => 584,
        '>' => 584,
        '?' => 556,
        '@' => 1015,
        'A' => 667,
        'B' => 667,
        'C' => 722,
        'D' => 722,
        'E' => 667,
        'F' => 611,
        'G' => 778,
        'H' => 722,
        'I' => 278,
        'J' => 500,
        'K' => 667,
        'L' => 556,
        'M' => 833,
        'N' => 722,
        'O' => 778,
        'P' => 667,
        'Q' => 778,
        'R' => 722,
        'S' => 667,
        'T' => 611,
        'U' => 722,
        'V' => 667,
        'W' => 944,
        'X' => 667,
        'Y' => 667,
        'Z' => 611,
        '[' => 278,
        '\\' => 278,
        ']' => 278,
        '^' => 469,
        '_' => 556,
        '`' => 333,
        'a' => 556,
        'b' => 556,
        'c' => 500,
        'd' => 556,
        'e' => 556,
        'f' => 278,
        'g' => 556,
        'h' => 556,
        'i' => 222,
        'j' => 222,
        'k' => 500,
        'l' => 222,
        'm' => 833,
        'n' => 556,
        'o' => 556,
        'p' => 556,
        'q' => 556,
        'r' => 333,
        's' => 500,
        't' => 278,
        'u' => 556,
        'v' => 500,
        'w' => 722,
        'x' => 500,
        'y' => 500,
        'z' => 500,
        '{' => 334,
        '|' => 260,
        '}' => 334,
        '~' => 584,
        _ => 556,
    }
}

fn helvetica_bold_units(ch: char) -> u32 {
    match ch {
        ' ' => 278,
        '!' => 333,
        '"' => 474,
        '#' => 556,
        '$' => 556,
        '%' => 889,
        '&' => 722,
        '\'' => 238,
        '(' => 333,
        ')' => 333,
        '*' => 389,
        '+' => 584,
        ',' => 278,
        '-' => 333,
        '.' => 278,
        '/' => 278,
        '0'..='9' => 556,
        ':' => 333,
        ';' => 333,
        '<' => 584,
        '=' => 584,
        '>' => 584,
        '?' => 611,
        '@' => 975,
        'A' => 722,
        'B' => 722,
        'C' => 722,
        'D' => 722,
        'E' => 667,
        'F' => 611,
        'G' => 778,
        'H' => 722,
        'I' => 278,
        'J' => 556,
        'K' => 722,
        'L' => 611,
        'M' => 833,
        'N' => 722,
        'O' => 778,
        'P' => 667,
        'Q' => 778,
        'R' => 722,
        'S' => 667,
        'T' => 611,
        'U' => 722,
        'V' => 667,
        'W' => 944,
        'X' => 667,
        'Y' => 667,
        'Z' => 611,
        '[' => 333,
        '\\' => 278,
        ']' => 333,
        '^' => 584,
        '_' => 556,
        '`' => 333,
        'a' => 556,
        'b' => 611,
        'c' => 556,
        'd' => 611,
        'e' => 556,
        'f' => 333,
        'g' => 611,
        'h' => 611,
        'i' => 278,
        'j' => 278,
        'k' => 556,
        'l' => 278,
        'm' => 889,
        'n' => 611,
        'o' => 611,
        'p' => 611,
        'q' => 611,
        'r' => 389,
        's' => 556,
        't' => 333,
        'u' => 611,
        'v' => 556,
        'w' => 778,
        'x' => 556,
        'y' => 556,
        'z' => 500,
        '{' => 389,
        '|' => 280,
        '}' => 389,
        '~' => 584,
        _ => 611,
    }
}
