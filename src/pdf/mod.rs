//! # PDF Writer
//!
//! Serializes finished report pages into a PDF 1.7 file, written byte by
//! byte: header, numbered objects, cross-reference table, trailer. No PDF
//! library sits underneath, which keeps the engine self-contained and the
//! output fully under our control.
//!
//! The report only ever draws with Helvetica and Helvetica-Bold, both in
//! the standard 14 every viewer ships, so no font programs are embedded
//! and text is encoded as WinAnsi bytes. Content streams are
//! Flate-compressed.
//!
//! Layout hands over top-down coordinates; PDF user space grows upward
//! from the bottom-left corner, so rectangles and baselines flip through
//! the page height here. Every text line is positioned with an absolute
//! text matrix, so line placement never depends on emission order.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::layout::{DrawCommand, ReportPage};
use crate::style::Color;

/// Circle-approximation constant for Bézier corner arcs.
const CORNER_K: f64 = 0.5522847498;

/// One-shot writer: collects numbered objects, then serializes them with
/// the cross-reference table.
pub struct PdfWriter {
    objects: Vec<Vec<u8>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        // Object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root), finished once all pages exist
        Self {
            objects: vec![Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Serializes `pages` into a complete PDF file.
    ///
    /// Infallible: layout output is always drawable and everything lands
    /// in memory.
    pub fn write(mut self, pages: &[ReportPage], title: &str) -> Vec<u8> {
        let f0 = self.add_object(font_object("Helvetica").into_bytes());
        let f1 = self.add_object(font_object("Helvetica-Bold").into_bytes());

        let mut page_obj_ids: Vec<usize> = Vec::with_capacity(pages.len());
        for page in pages {
            let content = build_content_stream(page);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let mut stream: Vec<u8> = Vec::new();
            let _ = write!(
                stream,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            stream.extend_from_slice(&compressed);
            stream.extend_from_slice(b"\nendstream");
            let content_obj_id = self.add_object(stream);

            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << /F0 {} 0 R /F1 {} 0 R >> >> >>",
                page.width, page.height, content_obj_id, f0, f1
            );
            page_obj_ids.push(self.add_object(page_dict.into_bytes()));
        }

        self.objects[1] = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        self.objects[2] = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info = format!(
            "<< /Title ({}) /Producer (casefile {}) >>",
            escape_pdf_string(title),
            env!("CARGO_PKG_VERSION")
        );
        let info_obj_id = self.add_object(info.into_bytes());

        self.serialize(info_obj_id)
    }

    fn add_object(&mut self, data: Vec<u8>) -> usize {
        self.objects.push(data);
        self.objects.len() - 1
    }

    /// Serializes all objects into the final PDF byte stream.
    fn serialize(&self, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; self.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, data) in self.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let _ = write!(output, "{} 0 obj\n", i);
            output.extend_from_slice(data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", self.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.objects.len(),
            info_obj_id,
            xref_offset
        );
        output
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn font_object(base_font: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
         /Encoding /WinAnsiEncoding >>",
        base_font
    )
}

// ── Content streams ────────────────────────────────────────────

/// Builds the operator stream for a single page.
fn build_content_stream(page: &ReportPage) -> String {
    let mut stream = String::new();

    for element in &page.elements {
        for command in &element.commands {
            match command {
                DrawCommand::Rect {
                    background,
                    corner_radius,
                } => {
                    let pdf_y = page.height - element.y - element.height;
                    write_filled_rect(
                        &mut stream,
                        element.x,
                        pdf_y,
                        element.width,
                        element.height,
                        *corner_radius,
                        *background,
                    );
                }
                DrawCommand::Text {
                    lines,
                    font,
                    size,
                    color,
                } => {
                    let _ = write!(
                        stream,
                        "BT\n/{} {:.1} Tf\n{:.3} {:.3} {:.3} rg\n",
                        font.resource_name(),
                        size,
                        color.r,
                        color.g,
                        color.b
                    );
                    for line in lines {
                        let pdf_y = page.height - line.y;
                        let _ = write!(stream, "1 0 0 1 {:.2} {:.2} Tm\n", line.x, pdf_y);
                        let _ = write!(stream, "({}) Tj\n", encode_winansi(&line.text));
                    }
                    let _ = write!(stream, "ET\n");
                }
            }
        }
    }

    stream
}

/// Fills a rectangle, rounding the corners when the radius is positive.
/// The radius is clamped to half the shorter side so corner arcs cannot
/// cross on small rectangles.
fn write_filled_rect(stream: &mut String, x: f64, y: f64, w: f64, h: f64, radius: f64, fill: Color) {
    let _ = write!(stream, "q\n{:.3} {:.3} {:.3} rg\n", fill.r, fill.g, fill.b);

    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        let _ = write!(stream, "{:.2} {:.2} {:.2} {:.2} re\n", x, y, w, h);
    } else {
        let k = CORNER_K * r;

        let _ = write!(stream, "{:.2} {:.2} m\n", x + r, y);

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w - r, y);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w - r + k,
            y,
            x + w,
            y + r - k,
            x + w,
            y + r
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w, y + h - r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w,
            y + h - r + k,
            x + w - r + k,
            y + h,
            x + w - r,
            y + h
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x + r, y + h);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + r - k,
            y + h,
            x,
            y + h - r + k,
            x,
            y + h - r
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x, y + r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x,
            y + r - k,
            x + r - k,
            y,
            x + r,
            y
        );

        let _ = write!(stream, "h\n");
    }

    let _ = write!(stream, "f\nQ\n");
}

// ── String encoding ────────────────────────────────────────────

/// Escapes the characters with meaning inside PDF literal strings.
fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Encodes text as an escaped WinAnsi literal for a `Tj` operand.
///
/// ASCII passes through with delimiter escapes; everything else becomes
/// an octal escape of its Windows-1252 byte, or `?` when the character
/// has no WinAnsi slot.
fn encode_winansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match unicode_to_winansi(ch) {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b @ 0x20..=0x7E => out.push(b as char),
            b => {
                let _ = write!(out, "\\{:03o}", b);
            }
        }
    }
    out
}

/// Maps a character to its Windows-1252 code point.
fn unicode_to_winansi(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7e}' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u8,
        '\u{20ac}' => 0x80, // Euro
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85, // ellipsis
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91, // left single quote
        '\u{2019}' => 0x92, // right single quote
        '\u{201c}' => 0x93, // left double quote
        '\u{201d}' => 0x94, // right double quote
        '\u{2022}' => 0x95, // bullet
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99, // trademark
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => b'?',
    }
}
