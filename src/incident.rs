//! # Incident Model
//!
//! The input record a report is generated from, matching the JSON the
//! triage dashboard holds for a case. Field names are camelCase on the
//! wire and deserialization is deliberately forgiving: a missing or blank
//! case id or a blank contact is normal operating data, not an error, and
//! an unrecognized severity string degrades to [`SeverityLevel::Unknown`]
//! instead of failing the whole report.
//!
//! The record is read-only to the engine. Generation borrows it and never
//! writes back.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{self, Color};

/// One triaged alert, as assembled by the upstream agent pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Dashboard case identifier. Absent or blank for alerts still
    /// unfiled; the report then skips the case banner entirely.
    #[serde(default)]
    pub case_id: Option<String>,
    /// Raw alert text as received from the source system.
    #[serde(default)]
    pub alert_text: String,
    pub classification: Classification,
    pub analysis: Analysis,
    #[serde(default)]
    pub escalation: EscalationContact,
}

impl IncidentRecord {
    /// Parses an incident from the dashboard's JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The case id, when the incident actually has one.
    ///
    /// The dashboard sends an empty string for unfiled alerts as often as
    /// it omits the field; both count as no case here.
    pub fn case(&self) -> Option<&str> {
        self.case_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Classifier output: which module owns the alert and how urgent it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub severity: SeverityLevel,
    #[serde(default)]
    pub urgency: SeverityLevel,
}

/// Analyst output: the recommended procedure and its supporting narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default)]
    pub best_sop_id: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub resolution_summary: String,
}

/// Who to call when the incident needs a human. Fields may be blank and
/// still render, as blank lines rather than a collapsed box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationContact {
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

/// Severity and urgency scale.
///
/// Total over all inputs: any string outside the four known levels maps to
/// `Unknown`, which renders with the neutral gray badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeverityLevel {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl SeverityLevel {
    /// Uppercase badge label.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "CRITICAL",
            SeverityLevel::High => "HIGH",
            SeverityLevel::Medium => "MEDIUM",
            SeverityLevel::Low => "LOW",
            SeverityLevel::Unknown => "UNKNOWN",
        }
    }

    /// Badge fill color.
    pub fn color(&self) -> Color {
        match self {
            SeverityLevel::Critical => style::RED,
            SeverityLevel::High => style::ORANGE,
            SeverityLevel::Medium => style::AMBER,
            SeverityLevel::Low => style::GREEN,
            SeverityLevel::Unknown => style::GRAY,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::High => "high",
            SeverityLevel::Medium => "medium",
            SeverityLevel::Low => "low",
            SeverityLevel::Unknown => "unknown",
        }
    }
}

impl From<&str> for SeverityLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => SeverityLevel::Critical,
            "high" => SeverityLevel::High,
            "medium" => SeverityLevel::Medium,
            "low" => SeverityLevel::Low,
            _ => SeverityLevel::Unknown,
        }
    }
}

impl From<String> for SeverityLevel {
    fn from(value: String) -> Self {
        SeverityLevel::from(value.as_str())
    }
}

impl From<SeverityLevel> for String {
    fn from(value: SeverityLevel) -> Self {
        value.as_str().to_string()
    }
}
