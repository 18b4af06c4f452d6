//! # Casefile
//!
//! A PDF report engine for alert-triage incidents. One triaged incident
//! in, one paginated A4 report out: header band, case banner, the
//! severity badge row, five tinted content boxes, a generation stamp.
//!
//! The engine is page-native. Blocks flow down a fixed page behind a
//! cursor, and a block that would cross into the bottom reserve starts a
//! fresh page instead of shrinking, clipping, or splitting. Every report
//! has the same skeleton, which is the point: operators read dozens of
//! these side by side and the eye should always land in the same place.
//!
//! ```text
//! IncidentRecord ──> layout ──> Vec<ReportPage> ──> PdfWriter ──> bytes
//!      (data)      (paginate)     (positioned)      (serialize)
//! ```
//!
//! Generation cannot fail. Unknown severities fall back to gray badges,
//! blank fields render as blank lines, absurdly long text flows onto more
//! pages. Only the write to disk returns an error.
//!
//! ```no_run
//! let json = std::fs::read_to_string("incident.json").unwrap();
//! let incident = casefile::IncidentRecord::from_json(&json).unwrap();
//! let saved = casefile::save_report(&incident, None).unwrap();
//! println!("report at {}", saved.display());
//! ```

pub mod error;
pub mod font;
pub mod incident;
pub mod layout;
pub mod pdf;
pub mod style;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub use error::{ReportError, Result};
pub use incident::{IncidentRecord, SeverityLevel};
pub use layout::{ReportPage, REPORT_TITLE};
pub use pdf::PdfWriter;

/// A finished, paginated report, still in memory.
///
/// Holds the positioned pages and the document title; serialization to
/// PDF bytes happens on demand and is deterministic for fixed pages.
pub struct ReportDocument {
    pages: Vec<ReportPage>,
    title: String,
}

impl ReportDocument {
    pub fn pages(&self) -> &[ReportPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Serializes the report to PDF bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        PdfWriter::new().write(&self.pages, &self.title)
    }

    /// Writes the PDF to `path`, surfacing the failed path on error.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Generates the report for an incident, stamped with the current time.
pub fn generate_report(incident: &IncidentRecord) -> ReportDocument {
    generate_report_at(incident, Utc::now())
}

/// Generates the report with an explicit generation time.
///
/// Output is a pure function of the incident and `generated_at`, which is
/// what callers freeze to get byte-identical reports.
pub fn generate_report_at(incident: &IncidentRecord, generated_at: DateTime<Utc>) -> ReportDocument {
    let case = incident.case().unwrap_or("unknown");
    debug!("Generating incident report for case {}", case);
    let pages = layout::layout(incident, generated_at);
    ReportDocument {
        pages,
        title: format!("Incident Report {}", case),
    }
}

/// Generates and persists the report, returning where it was written.
///
/// Without an explicit `path` the file lands in the current directory as
/// `incident_report_<case>.pdf`, with `unknown` standing in for a missing
/// or blank case id. Write failures come back as [`ReportError::Io`].
pub fn save_report(incident: &IncidentRecord, path: Option<&Path>) -> Result<PathBuf> {
    let document = generate_report(incident);
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_filename(incident),
    };
    document.write_to(&path)?;
    info!("Incident report saved to {}", path.display());
    Ok(path)
}

/// One-call convenience: incident JSON in, PDF bytes out.
pub fn report_from_json(json: &str) -> Result<Vec<u8>> {
    let incident = IncidentRecord::from_json(json)?;
    Ok(generate_report(&incident).to_bytes())
}

fn default_filename(incident: &IncidentRecord) -> PathBuf {
    let case = incident.case().unwrap_or("unknown");
    PathBuf::from(format!("incident_report_{}.pdf", case))
}
