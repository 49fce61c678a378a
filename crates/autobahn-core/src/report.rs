//! Machine-usable campaign report assembly.
//!
//! Everything here is data for downstream consumers (report rendering,
//! visualization); no human-readable text is produced.

use serde::{Deserialize, Serialize};

use autobahn_actions::types::{Action, Issue, Severity};
use autobahn_model::TraceEntry;

/// Overall campaign verdict: FAILED as soon as any error-severity issue
/// was raised, OK otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    Ok,
    Failed,
}

/// Aggregate counts over the final sequence and collected issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_steps: usize,
    pub num_errors: usize,
    pub num_warnings: usize,
    pub status: CampaignStatus,
}

/// One formatted step for downstream consumers: 1-based index, action
/// name, parameter payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedStep {
    pub index: usize,
    pub action: String,
    pub params: serde_json::Value,
}

/// Full campaign artifact: the three ordered-step collections (raw per
/// case, validated/enriched per case, final optimized), the issue list,
/// and the complete replay trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignReport {
    pub summary: Summary,
    pub steps: Vec<FormattedStep>,
    pub steps_raw: Vec<Vec<Action>>,
    pub steps_validated: Vec<Vec<Action>>,
    pub issues: Vec<Issue>,
    pub state_trace: Vec<TraceEntry>,
}

/// Format a final sequence for consumers, 1-based.
pub fn format_steps(steps: &[Action]) -> Vec<FormattedStep> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| FormattedStep {
            index: idx + 1,
            action: step.kind().to_string(),
            params: step.params(),
        })
        .collect()
}

/// Summarize the final sequence and issue list.
pub fn build_summary(steps: &[Action], issues: &[Issue]) -> Summary {
    let num_errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let num_warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    Summary {
        total_steps: steps.len(),
        num_errors,
        num_warnings,
        status: if num_errors > 0 {
            CampaignStatus::Failed
        } else {
            CampaignStatus::Ok
        },
    }
}

/// Assemble the full report from the pipeline stages' outputs.
pub fn build_report(
    optimized: &[Action],
    steps_raw: Vec<Vec<Action>>,
    steps_validated: Vec<Vec<Action>>,
    issues: Vec<Issue>,
    state_trace: Vec<TraceEntry>,
) -> CampaignReport {
    CampaignReport {
        summary: build_summary(optimized, &issues),
        steps: format_steps(optimized),
        steps_raw,
        steps_validated,
        issues,
        state_trace,
    }
}
