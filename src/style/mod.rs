//! # Report Style
//!
//! The fixed visual vocabulary of an incident report: the color palette the
//! dashboard uses for severity coding, and the geometry constants that drive
//! block placement.
//!
//! There is no style cascade here and no per-document configuration. Every
//! report looks the same on purpose: operators compare incidents side by
//! side, and a report that re-arranges itself based on content would defeat
//! that. What varies is the data; the frame never does.

/// An RGB color with unit-interval channels, as used by PDF `rg` operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64, // 0.0 - 1.0
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

// ── Palette ────────────────────────────────────────────────────
// Severity coding shared with the dashboard's badge styling. Values are
// 8-bit web colors normalized to the unit interval.

/// Critical severity.
pub const RED: Color = Color::rgb(220.0 / 255.0, 53.0 / 255.0, 69.0 / 255.0);
/// High severity.
pub const ORANGE: Color = Color::rgb(253.0 / 255.0, 126.0 / 255.0, 20.0 / 255.0);
/// Medium severity.
pub const AMBER: Color = Color::rgb(255.0 / 255.0, 193.0 / 255.0, 7.0 / 255.0);
/// Low severity.
pub const GREEN: Color = Color::rgb(40.0 / 255.0, 167.0 / 255.0, 69.0 / 255.0);
/// Unknown severity, and muted footer text.
pub const GRAY: Color = Color::rgb(108.0 / 255.0, 117.0 / 255.0, 125.0 / 255.0);
/// Module badges, regardless of module value.
pub const BLUE: Color = Color::rgb(13.0 / 255.0, 110.0 / 255.0, 253.0 / 255.0);
/// Page header band.
pub const NAVY: Color = Color::rgb(27.0 / 255.0, 42.0 / 255.0, 78.0 / 255.0);
/// Body and title text inside content boxes.
pub const INK: Color = Color::rgb(33.0 / 255.0, 37.0 / 255.0, 41.0 / 255.0);

/// Alert box background.
pub const RED_TINT: Color = Color::rgb(248.0 / 255.0, 215.0 / 255.0, 218.0 / 255.0);
/// Problem box background.
pub const AMBER_TINT: Color = Color::rgb(255.0 / 255.0, 243.0 / 255.0, 205.0 / 255.0);
/// Resolution box background.
pub const GREEN_TINT: Color = Color::rgb(209.0 / 255.0, 231.0 / 255.0, 221.0 / 255.0);
/// SOP box and case banner background.
pub const BLUE_TINT: Color = Color::rgb(207.0 / 255.0, 226.0 / 255.0, 255.0 / 255.0);
/// Contact box background.
pub const GRAY_TINT: Color = Color::rgb(226.0 / 255.0, 227.0 / 255.0, 229.0 / 255.0);

// ── Page geometry ──────────────────────────────────────────────
// The report's dimensions are millimetre values; the PDF coordinate
// space is points. All placement math stays in points, with the
// millimetre values visible through this one conversion factor.

/// One millimetre in points (1/72 inch).
pub const MM: f64 = 72.0 / 25.4;

/// A4 portrait, in points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

/// Left and right page margins.
pub const MARGIN: f64 = 15.0 * MM;

/// Where the write cursor starts on every page.
pub const TOP_OFFSET: f64 = 20.0 * MM;

/// Space kept clear at the bottom of each page. A block that would enter
/// this zone moves to the next page; only the footer may sit inside it.
pub const BOTTOM_RESERVE: f64 = 30.0 * MM;

/// Vertical advance per wrapped body line.
pub const LINE_HEIGHT: f64 = 5.0 * MM;

/// Fixed height added to every content box on top of its body lines.
/// Covers the title line and the padding above and below the text.
pub const BLOCK_PADDING: f64 = 20.0 * MM;

/// Vertical gap between consecutive blocks.
pub const BLOCK_GAP: f64 = 8.0 * MM;

/// Horizontal inset of text from a box's left edge.
pub const TEXT_INSET: f64 = 5.0 * MM;

/// Title baseline, measured from a box's top edge.
pub const TITLE_BASELINE: f64 = 8.0 * MM;

/// First body-line baseline, measured from a box's top edge.
pub const BODY_BASELINE: f64 = 15.0 * MM;

/// Corner radius of content boxes and badges.
pub const CORNER_RADIUS: f64 = 3.0 * MM;

/// Height of the full-bleed header band on page one.
pub const HEADER_HEIGHT: f64 = 30.0 * MM;

/// Height of the case-id banner.
pub const BANNER_HEIGHT: f64 = 12.0 * MM;

/// Badge row geometry: three badges plus two gaps span the content width.
pub const BADGE_WIDTH: f64 = 56.0 * MM;
pub const BADGE_HEIGHT: f64 = 10.0 * MM;
pub const BADGE_GAP: f64 = 6.0 * MM;

/// Footer baseline, measured up from the bottom page edge.
pub const FOOTER_RISE: f64 = 12.0 * MM;

// ── Type sizes ─────────────────────────────────────────────────

/// Report title in the header band.
pub const HEADER_SIZE: f64 = 24.0;
/// Box titles, badge labels, and the case banner.
pub const TITLE_SIZE: f64 = 11.0;
/// Wrapped body text.
pub const BODY_SIZE: f64 = 10.0;
/// Badge value labels.
pub const BADGE_SIZE: f64 = 10.0;
/// Footer line.
pub const FOOTER_SIZE: f64 = 9.0;
