//! Integration tests for the report pipeline.
//!
//! These tests exercise the full path from incident JSON to PDF bytes:
//! - Deserialization of the dashboard's incident shape
//! - Block order and badge colors on the rendered pages
//! - Page breaks under flooded input
//! - Determinism for a frozen generation time
//! - Persistence, including the default filename and surfaced IO errors

use casefile::incident::{Analysis, Classification, EscalationContact};
use casefile::layout::{BlockKind, DrawCommand, PlacedElement, ReportPage};
use casefile::style;
use casefile::{
    generate_report, generate_report_at, report_from_json, save_report, IncidentRecord,
    ReportError,
};
use chrono::{DateTime, TimeZone, Utc};

// ─── Helpers ────────────────────────────────────────────────────

fn sample_incident() -> IncidentRecord {
    IncidentRecord {
        case_id: Some("CASE-42".into()),
        alert_text: "short alert".into(),
        classification: Classification {
            module: "CNTR".into(),
            entities: vec!["CMAU1234567".into()],
            alert_type: "duplicate".into(),
            severity: "critical".into(),
            urgency: "high".into(),
        },
        analysis: Analysis {
            best_sop_id: "SOP-9".into(),
            reasoning: "r".into(),
            problem_statement: "p".into(),
            resolution_summary: "s".into(),
        },
        escalation: EscalationContact {
            contact_name: "Jane Doe".into(),
            contact_email: "jane@x.com".into(),
            contact_phone: "555-1111".into(),
        },
    }
}

fn flooded_incident() -> IncidentRecord {
    let mut incident = sample_incident();
    incident.analysis.resolution_summary = vec!["remediation"; 300].join(" ");
    incident
}

fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

fn all_kinds(pages: &[ReportPage]) -> Vec<BlockKind> {
    pages
        .iter()
        .flat_map(|p| p.elements.iter().map(|e| e.kind))
        .collect()
}

fn rect_color(element: &PlacedElement) -> Option<style::Color> {
    element.commands.iter().find_map(|c| match c {
        DrawCommand::Rect { background, .. } => Some(*background),
        _ => None,
    })
}

fn element_texts(element: &PlacedElement) -> Vec<&str> {
    element
        .commands
        .iter()
        .flat_map(|c| match c {
            DrawCommand::Text { lines, .. } => lines.as_slice(),
            _ => &[],
        })
        .map(|line| line.text.as_str())
        .collect()
}

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 50, "PDF too small to be valid");
    assert!(bytes.starts_with(b"%PDF-1.7"), "Missing PDF header");
    assert!(
        bytes.windows(5).any(|w| w == b"%%EOF"),
        "Missing %%EOF marker"
    );
    assert!(bytes.windows(4).any(|w| w == b"xref"), "Missing xref table");
    assert!(
        bytes.windows(7).any(|w| w == b"trailer"),
        "Missing trailer"
    );
}

// ─── Full Pipeline ──────────────────────────────────────────────

#[test]
fn test_sample_incident_produces_valid_pdf() {
    let bytes = generate_report(&sample_incident()).to_bytes();
    assert_valid_pdf(&bytes);
}

#[test]
fn test_report_from_json_end_to_end() {
    let json = r#"{
        "caseId": "CASE-42",
        "alertText": "short alert",
        "classification": {
            "module": "CNTR",
            "entities": ["CMAU1234567"],
            "alertType": "duplicate",
            "severity": "critical",
            "urgency": "high"
        },
        "analysis": {
            "bestSopId": "SOP-9",
            "reasoning": "r",
            "problemStatement": "p",
            "resolutionSummary": "s"
        },
        "escalation": {
            "contactName": "Jane Doe",
            "contactEmail": "jane@x.com",
            "contactPhone": "555-1111"
        }
    }"#;
    let bytes = report_from_json(json).expect("well-formed incident should render");
    assert_valid_pdf(&bytes);
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Title (Incident Report CASE-42)"));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = report_from_json("{ not json").unwrap_err();
    assert!(matches!(err, ReportError::Parse(_)));
}

// ─── Block Order ────────────────────────────────────────────────

#[test]
fn test_single_page_scenario_block_order() {
    let document = generate_report_at(&sample_incident(), frozen_now());
    assert_eq!(document.page_count(), 1, "short incident should fit one page");
    assert_eq!(
        all_kinds(document.pages()),
        vec![
            BlockKind::Header,
            BlockKind::CaseBanner,
            BlockKind::Badge,
            BlockKind::Badge,
            BlockKind::Badge,
            BlockKind::AlertBox,
            BlockKind::ProblemBox,
            BlockKind::ResolutionBox,
            BlockKind::SopBox,
            BlockKind::ContactBox,
            BlockKind::Footer,
        ]
    );
}

#[test]
fn test_single_page_scenario_places_field_texts() {
    let document = generate_report_at(&sample_incident(), frozen_now());
    let page = &document.pages()[0];
    let texts_of = |kind: BlockKind| {
        page.elements
            .iter()
            .filter(|e| e.kind == kind)
            .flat_map(element_texts)
            .collect::<Vec<_>>()
    };

    assert_eq!(texts_of(BlockKind::Header), vec!["Incident Triage Report"]);
    assert_eq!(texts_of(BlockKind::CaseBanner), vec!["Case ID: CASE-42"]);
    assert_eq!(texts_of(BlockKind::Badge), vec!["CNTR", "CRITICAL", "HIGH"]);
    assert_eq!(
        texts_of(BlockKind::AlertBox),
        vec!["Original Alert", "short alert"]
    );
    assert_eq!(
        texts_of(BlockKind::ProblemBox),
        vec!["Problem Statement", "p"]
    );
    assert_eq!(
        texts_of(BlockKind::ResolutionBox),
        vec!["Resolution Summary", "s"]
    );
    assert_eq!(
        texts_of(BlockKind::SopBox),
        vec!["Recommended SOP", "SOP-9", "r"]
    );
    assert_eq!(
        texts_of(BlockKind::ContactBox),
        vec!["Escalation Contact", "Jane Doe", "jane@x.com", "555-1111"]
    );
}

#[test]
fn test_badge_colors_for_sample_incident() {
    let document = generate_report_at(&sample_incident(), frozen_now());
    let badges: Vec<&PlacedElement> = document.pages()[0]
        .elements
        .iter()
        .filter(|e| e.kind == BlockKind::Badge)
        .collect();
    assert_eq!(badges.len(), 3);
    assert_eq!(rect_color(badges[0]), Some(style::BLUE), "module badge");
    assert_eq!(rect_color(badges[1]), Some(style::RED), "critical severity");
    assert_eq!(rect_color(badges[2]), Some(style::ORANGE), "high urgency");
}

#[test]
fn test_footer_carries_frozen_timestamp() {
    let document = generate_report_at(&sample_incident(), frozen_now());
    let footer = document.pages()[0].elements.last().unwrap();
    assert_eq!(footer.kind, BlockKind::Footer);
    let DrawCommand::Text { lines, .. } = &footer.commands[0] else {
        panic!("footer should draw text");
    };
    assert_eq!(lines[0].text, "Report generated 2026-03-14 09:26 UTC");
}

#[test]
fn test_banner_omitted_without_case_id_shifts_blocks_up() {
    let with_banner = generate_report_at(&sample_incident(), frozen_now());
    let mut anonymous = sample_incident();
    anonymous.case_id = None;
    let without_banner = generate_report_at(&anonymous, frozen_now());

    assert!(!all_kinds(without_banner.pages()).contains(&BlockKind::CaseBanner));

    let first_badge_y = |document: &casefile::ReportDocument| {
        document.pages()[0]
            .elements
            .iter()
            .find(|e| e.kind == BlockKind::Badge)
            .map(|e| e.y)
            .unwrap()
    };
    let shift = first_badge_y(&with_banner) - first_badge_y(&without_banner);
    assert!(
        (shift - (style::BANNER_HEIGHT + style::BLOCK_GAP)).abs() < 1e-6,
        "blocks should move up by exactly the banner height plus gap, moved {shift}"
    );
}

// ─── Pagination ─────────────────────────────────────────────────

#[test]
fn test_repeated_word_flood_spans_pages() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    assert!(
        document.page_count() > 1,
        "300 repeated words should overflow one page, got {}",
        document.page_count()
    );
    assert_valid_pdf(&document.to_bytes());
}

#[test]
fn test_no_block_crosses_the_bottom_reserve() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    for page in document.pages() {
        for element in &page.elements {
            if element.kind == BlockKind::Footer {
                continue;
            }
            assert!(
                element.y + element.height <= style::PAGE_HEIGHT - style::BOTTOM_RESERVE + 1e-6,
                "{:?} ends at {} which is inside the reserve",
                element.kind,
                element.y + element.height
            );
        }
    }
}

#[test]
fn test_header_only_on_first_page() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    for (i, page) in document.pages().iter().enumerate() {
        let headers = page
            .elements
            .iter()
            .filter(|e| e.kind == BlockKind::Header)
            .count();
        assert_eq!(headers, usize::from(i == 0));
    }
}

#[test]
fn test_footer_only_on_last_page() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    let pages = document.pages();
    for page in &pages[..pages.len() - 1] {
        assert!(page.elements.iter().all(|e| e.kind != BlockKind::Footer));
    }
    assert_eq!(pages.last().unwrap().elements.last().unwrap().kind, BlockKind::Footer);
}

#[test]
fn test_continuation_pages_restart_at_top_offset() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    for page in &document.pages()[1..] {
        let first = &page.elements[0];
        assert!(
            (first.y - style::TOP_OFFSET).abs() < 1e-6,
            "continuation page starts at {} instead of the top offset",
            first.y
        );
    }
}

#[test]
fn test_one_pdf_page_object_per_laid_out_page() {
    let document = generate_report_at(&flooded_incident(), frozen_now());
    let text = String::from_utf8_lossy(&document.to_bytes()).into_owned();
    assert_eq!(
        text.matches("/Type /Page /Parent").count(),
        document.page_count()
    );
}

// ─── Determinism ────────────────────────────────────────────────

#[test]
fn test_frozen_time_reports_are_byte_identical() {
    let a = generate_report_at(&sample_incident(), frozen_now()).to_bytes();
    let b = generate_report_at(&sample_incident(), frozen_now()).to_bytes();
    assert_eq!(a, b, "same incident and time must serialize identically");
}

// ─── Robustness ─────────────────────────────────────────────────

#[test]
fn test_unrecognized_severity_renders_gray_badge() {
    let mut incident = sample_incident();
    incident.classification.severity = "unrecognized_value".into();
    let document = generate_report_at(&incident, frozen_now());
    let badges: Vec<&PlacedElement> = document.pages()[0]
        .elements
        .iter()
        .filter(|e| e.kind == BlockKind::Badge)
        .collect();
    assert_eq!(rect_color(badges[1]), Some(style::GRAY));
    assert_valid_pdf(&document.to_bytes());
}

#[test]
fn test_blank_contact_renders_three_body_lines() {
    let mut incident = sample_incident();
    incident.escalation = EscalationContact::default();
    let document = generate_report_at(&incident, frozen_now());
    let contact = document.pages()[0]
        .elements
        .iter()
        .find(|e| e.kind == BlockKind::ContactBox)
        .unwrap();
    let body_lines = contact
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { lines, .. } => Some(lines.len()),
            _ => None,
        })
        .max()
        .unwrap();
    assert_eq!(body_lines, 3, "blank contact fields keep their lines");
}

#[test]
fn test_awkward_characters_survive_the_pipeline() {
    let mut incident = sample_incident();
    incident.alert_text = "café crane (bay 4) – naïve retry \\ twice • 100%».".into();
    incident.analysis.problem_statement = "日本語 fragment".into();
    let bytes = generate_report_at(&incident, frozen_now()).to_bytes();
    assert_valid_pdf(&bytes);
}

#[test]
fn test_empty_incident_still_renders() {
    let incident = IncidentRecord {
        case_id: None,
        alert_text: String::new(),
        classification: Classification {
            module: String::new(),
            entities: vec![],
            alert_type: String::new(),
            severity: "".into(),
            urgency: "".into(),
        },
        analysis: Analysis {
            best_sop_id: String::new(),
            reasoning: String::new(),
            problem_statement: String::new(),
            resolution_summary: String::new(),
        },
        escalation: EscalationContact::default(),
    };
    let document = generate_report_at(&incident, frozen_now());
    assert_eq!(document.page_count(), 1);
    assert_valid_pdf(&document.to_bytes());
}

// ─── Persistence ────────────────────────────────────────────────

#[test]
fn test_save_report_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.pdf");
    let written = save_report(&sample_incident(), Some(&target)).unwrap();
    assert_eq!(written, target);
    let bytes = std::fs::read(&target).unwrap();
    assert_valid_pdf(&bytes);
}

/// Restores the working directory it was entered from, so the one test
/// below that chdirs cannot leave the rest of the run in a torn-down
/// tempdir.
struct CwdGuard(std::path::PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CwdGuard(prev)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn test_save_report_default_name_uses_case_id_or_unknown() {
    // The only test that leans on the working directory; everything else
    // uses absolute paths.
    let dir = tempfile::tempdir().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    let written = save_report(&sample_incident(), None).unwrap();
    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        "incident_report_CASE-42.pdf"
    );
    assert!(dir.path().join("incident_report_CASE-42.pdf").exists());

    let mut unfiled = sample_incident();
    unfiled.case_id = Some(String::new());
    let fallback = save_report(&unfiled, None).unwrap();
    assert_eq!(
        fallback.file_name().unwrap().to_str().unwrap(),
        "incident_report_unknown.pdf"
    );
    assert!(dir.path().join("incident_report_unknown.pdf").exists());
}

#[test]
fn test_save_report_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing-subdir").join("report.pdf");
    let err = save_report(&sample_incident(), Some(&target)).unwrap_err();
    match err {
        ReportError::Io { path, .. } => assert_eq!(path, target),
        other => panic!("expected an IO error, got {other}"),
    }
}
