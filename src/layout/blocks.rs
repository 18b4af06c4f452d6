//! The content boxes of a report, as data.
//!
//! Every incident renders the same five boxes in the same order. Listing
//! them as descriptors keeps the order in one place and lets a single
//! placement routine handle all of them; the boxes differ only in title,
//! body text, and background tint.

use crate::incident::IncidentRecord;
use crate::style::{self, Color};

use super::BlockKind;

/// One content box, ready for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub kind: BlockKind,
    pub title: &'static str,
    pub body: String,
    pub background: Color,
}

/// Builds the fixed box sequence for an incident: alert, problem,
/// resolution, SOP, contact.
pub fn build_blocks(incident: &IncidentRecord) -> Vec<StyledBlock> {
    let analysis = &incident.analysis;
    let contact = &incident.escalation;
    vec![
        StyledBlock {
            kind: BlockKind::AlertBox,
            title: "Original Alert",
            body: incident.alert_text.clone(),
            background: style::RED_TINT,
        },
        StyledBlock {
            kind: BlockKind::ProblemBox,
            title: "Problem Statement",
            body: analysis.problem_statement.clone(),
            background: style::AMBER_TINT,
        },
        StyledBlock {
            kind: BlockKind::ResolutionBox,
            title: "Resolution Summary",
            body: analysis.resolution_summary.clone(),
            background: style::GREEN_TINT,
        },
        StyledBlock {
            kind: BlockKind::SopBox,
            title: "Recommended SOP",
            body: format!("{}\n{}", analysis.best_sop_id, analysis.reasoning),
            background: style::BLUE_TINT,
        },
        StyledBlock {
            kind: BlockKind::ContactBox,
            title: "Escalation Contact",
            // Blank fields stay as blank lines so the box always shows
            // three slots.
            body: format!(
                "{}\n{}\n{}",
                contact.contact_name, contact.contact_email, contact.contact_phone
            ),
            background: style::GRAY_TINT,
        },
    ]
}
