//! # Page Layout
//!
//! Flows the report blocks of an incident into A4 pages. This is page-native
//! layout: the write cursor moves down a fixed page, and a block that would
//! cross into the bottom reserve starts a fresh page instead. Blocks never
//! split across a page boundary.
//!
//! The order is fixed. Header band, case banner (when the incident has a
//! case id), the badge row, then the five content boxes, and a footer on
//! the final page. Each block measures itself from its wrapped line count,
//! asks the cursor for room, and advances the cursor past itself plus the
//! inter-block gap.
//!
//! The cursor is plain state owned by [`layout`] for the duration of one
//! call. Nothing here is shared or retained between reports, which is what
//! makes generation safe to run from any thread and deterministic for a
//! fixed timestamp.

pub mod blocks;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::font::StandardFont;
use crate::incident::{Classification, IncidentRecord};
use crate::style::{self, Color};
use crate::text;

pub use blocks::{build_blocks, StyledBlock};

/// Title line in the page-one header band.
pub const REPORT_TITLE: &str = "Incident Triage Report";

// ── Placed output ──────────────────────────────────────────────

/// Which report block a placed element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    CaseBanner,
    Badge,
    AlertBox,
    ProblemBox,
    ResolutionBox,
    SopBox,
    ContactBox,
    Footer,
}

/// One positioned line of text. `y` is the baseline, measured down from
/// the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// A drawing instruction attached to a placed element.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the element's own rectangle.
    Rect { background: Color, corner_radius: f64 },
    /// Draw positioned lines in one font.
    Text {
        lines: Vec<TextLine>,
        font: StandardFont,
        size: f64,
        color: Color,
    },
}

/// A block fixed onto a page, with its rectangle in top-down page
/// coordinates and the commands that draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: BlockKind,
    pub commands: Vec<DrawCommand>,
}

/// One finished page of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<PlacedElement>,
}

// ── Cursor ─────────────────────────────────────────────────────

/// The write position on the page under construction.
///
/// Created at the top offset, advanced block by block, reset on page
/// break, and dropped when layout finishes.
pub struct LayoutCursor {
    pub y: f64,
    page_width: f64,
    page_height: f64,
    margin_left: f64,
    margin_right: f64,
    elements: Vec<PlacedElement>,
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self {
            y: style::TOP_OFFSET,
            page_width: style::PAGE_WIDTH,
            page_height: style::PAGE_HEIGHT,
            margin_left: style::MARGIN,
            margin_right: style::MARGIN,
            elements: Vec::new(),
        }
    }

    /// Horizontal space between the margins.
    pub fn content_width(&self) -> f64 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Whether a block of `height` fits above the bottom reserve.
    pub fn fits(&self, height: f64) -> bool {
        self.y + height <= self.page_height - style::BOTTOM_RESERVE
    }

    /// Closes the current page and resets the cursor to the top offset.
    pub fn break_page(&mut self) -> ReportPage {
        let page = ReportPage {
            width: self.page_width,
            height: self.page_height,
            elements: std::mem::take(&mut self.elements),
        };
        self.y = style::TOP_OFFSET;
        page
    }

    pub fn place(&mut self, element: PlacedElement) {
        self.elements.push(element);
    }

    pub fn advance(&mut self, dy: f64) {
        self.y += dy;
    }
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

// ── Engine ─────────────────────────────────────────────────────

/// Lays out one incident into pages.
///
/// Never fails: whatever the field contents, the result is at least one
/// page ending in a footer stamped with `generated_at`.
pub fn layout(incident: &IncidentRecord, generated_at: DateTime<Utc>) -> Vec<ReportPage> {
    let mut cursor = LayoutCursor::new();
    let mut pages = Vec::new();

    place_header(&mut cursor);
    if let Some(case_id) = incident.case() {
        ensure_room(&mut cursor, &mut pages, style::BANNER_HEIGHT);
        place_banner(&mut cursor, case_id);
    }
    ensure_room(&mut cursor, &mut pages, style::BADGE_HEIGHT);
    place_badges(&mut cursor, &incident.classification);
    for block in build_blocks(incident) {
        place_box(&mut cursor, &mut pages, block);
    }
    place_footer(&mut cursor, generated_at);

    pages.push(cursor.break_page());
    let placed: usize = pages.iter().map(|p| p.elements.len()).sum();
    debug!(
        "Laid out incident report: {} pages, {} elements",
        pages.len(),
        placed
    );
    pages
}

/// Starts a fresh page when `height` will not fit on the current one.
///
/// A block taller than the whole content area is still placed, at the top
/// of its own page, and allowed to overrun the reserve. Splitting a block
/// is never an option.
fn ensure_room(cursor: &mut LayoutCursor, pages: &mut Vec<ReportPage>, height: f64) {
    if !cursor.fits(height) && !cursor.elements.is_empty() {
        pages.push(cursor.break_page());
    }
}

// ── Blocks ─────────────────────────────────────────────────────

/// Full-bleed title band across the top of page one.
fn place_header(cursor: &mut LayoutCursor) {
    let title_width = StandardFont::HelveticaBold.measure(REPORT_TITLE, style::HEADER_SIZE);
    let line = TextLine {
        x: (cursor.page_width - title_width) / 2.0,
        y: style::TOP_OFFSET,
        text: REPORT_TITLE.to_string(),
    };
    cursor.place(PlacedElement {
        x: 0.0,
        y: 0.0,
        width: cursor.page_width,
        height: style::HEADER_HEIGHT,
        kind: BlockKind::Header,
        commands: vec![
            DrawCommand::Rect {
                background: style::NAVY,
                corner_radius: 0.0,
            },
            DrawCommand::Text {
                lines: vec![line],
                font: StandardFont::HelveticaBold,
                size: style::HEADER_SIZE,
                color: Color::WHITE,
            },
        ],
    });
    cursor.y = style::HEADER_HEIGHT + style::BLOCK_GAP;
}

/// Case-id banner. Only placed when the incident carries a case id.
fn place_banner(cursor: &mut LayoutCursor, case_id: &str) {
    let line = TextLine {
        x: cursor.margin_left + style::TEXT_INSET,
        y: cursor.y + (style::BANNER_HEIGHT + 0.7 * style::TITLE_SIZE) / 2.0,
        text: format!("Case ID: {case_id}"),
    };
    cursor.place(PlacedElement {
        x: cursor.margin_left,
        y: cursor.y,
        width: cursor.content_width(),
        height: style::BANNER_HEIGHT,
        kind: BlockKind::CaseBanner,
        commands: vec![
            DrawCommand::Rect {
                background: style::BLUE_TINT,
                corner_radius: style::CORNER_RADIUS,
            },
            DrawCommand::Text {
                lines: vec![line],
                font: StandardFont::HelveticaBold,
                size: style::TITLE_SIZE,
                color: style::INK,
            },
        ],
    });
    cursor.advance(style::BANNER_HEIGHT + style::BLOCK_GAP);
}

/// Module, severity, and urgency badges on one row.
///
/// The module badge is always blue; the other two take the color of their
/// level, gray when the level is unknown.
fn place_badges(cursor: &mut LayoutCursor, classification: &Classification) {
    let labels: [(String, Color); 3] = [
        (classification.module.to_uppercase(), style::BLUE),
        (
            classification.severity.label().to_string(),
            classification.severity.color(),
        ),
        (
            classification.urgency.label().to_string(),
            classification.urgency.color(),
        ),
    ];

    for (i, (label, background)) in labels.into_iter().enumerate() {
        let x = cursor.margin_left + i as f64 * (style::BADGE_WIDTH + style::BADGE_GAP);
        let label_width = StandardFont::HelveticaBold.measure(&label, style::BADGE_SIZE);
        let line = TextLine {
            x: x + (style::BADGE_WIDTH - label_width) / 2.0,
            y: cursor.y + (style::BADGE_HEIGHT + 0.7 * style::BADGE_SIZE) / 2.0,
            text: label,
        };
        cursor.place(PlacedElement {
            x,
            y: cursor.y,
            width: style::BADGE_WIDTH,
            height: style::BADGE_HEIGHT,
            kind: BlockKind::Badge,
            commands: vec![
                DrawCommand::Rect {
                    background,
                    corner_radius: style::CORNER_RADIUS,
                },
                DrawCommand::Text {
                    lines: vec![line],
                    font: StandardFont::HelveticaBold,
                    size: style::BADGE_SIZE,
                    color: Color::WHITE,
                },
            ],
        });
    }
    cursor.advance(style::BADGE_HEIGHT + style::BLOCK_GAP);
}

/// Places one content box: tinted rounded rectangle, bold title, wrapped
/// body below it.
fn place_box(cursor: &mut LayoutCursor, pages: &mut Vec<ReportPage>, block: StyledBlock) {
    let body_lines = text::wrap(
        &block.body,
        StandardFont::Helvetica,
        style::BODY_SIZE,
        cursor.content_width(),
    );
    let height = body_lines.len() as f64 * style::LINE_HEIGHT + style::BLOCK_PADDING;
    ensure_room(cursor, pages, height);

    let text_x = cursor.margin_left + style::TEXT_INSET;
    let title = TextLine {
        x: text_x,
        y: cursor.y + style::TITLE_BASELINE,
        text: block.title.to_string(),
    };
    let body = body_lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| TextLine {
            x: text_x,
            y: cursor.y + style::BODY_BASELINE + i as f64 * style::LINE_HEIGHT,
            text: line,
        })
        .collect();

    cursor.place(PlacedElement {
        x: cursor.margin_left,
        y: cursor.y,
        width: cursor.content_width(),
        height,
        kind: block.kind,
        commands: vec![
            DrawCommand::Rect {
                background: block.background,
                corner_radius: style::CORNER_RADIUS,
            },
            DrawCommand::Text {
                lines: vec![title],
                font: StandardFont::HelveticaBold,
                size: style::TITLE_SIZE,
                color: style::INK,
            },
            DrawCommand::Text {
                lines: body,
                font: StandardFont::Helvetica,
                size: style::BODY_SIZE,
                color: style::INK,
            },
        ],
    });
    cursor.advance(height + style::BLOCK_GAP);
}

/// Generation stamp at the bottom of the final page. Exempt from the
/// page-break rule: it lives inside the bottom reserve.
fn place_footer(cursor: &mut LayoutCursor, generated_at: DateTime<Utc>) {
    let stamp = format!(
        "Report generated {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let width = StandardFont::Helvetica.measure(&stamp, style::FOOTER_SIZE);
    let baseline = cursor.page_height - style::FOOTER_RISE;
    let line = TextLine {
        x: cursor.margin_left,
        y: baseline,
        text: stamp,
    };
    cursor.place(PlacedElement {
        x: cursor.margin_left,
        y: baseline,
        width,
        height: style::FOOTER_SIZE,
        kind: BlockKind::Footer,
        commands: vec![DrawCommand::Text {
            lines: vec![line],
            font: StandardFont::Helvetica,
            size: style::FOOTER_SIZE,
            color: style::GRAY,
        }],
    });
}
