//! End-to-end campaign pipeline:
//! reasoner → chaining → optimizer → replay → report.

use rayon::prelude::*;
use tracing::{debug, info};

use autobahn_actions::parse::{parse_suite, ParseError};
use autobahn_actions::types::{Action, Issue, TestCase};
use autobahn_model::replay;
use autobahn_reasoner::validate_and_enrich;
use autobahn_sequencer::{chain_tests, optimize};

use crate::report::{build_report, CampaignReport};

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("Suite parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Run the full pipeline over already-parsed test cases.
///
/// Validation shares no state across cases, so the reasoner pass fans
/// out in parallel; everything after it is order-dependent and runs
/// strictly sequentially.
pub fn run_campaign(cases: &[TestCase]) -> CampaignReport {
    info!(cases = cases.len(), "campaign start");

    let validated: Vec<(Vec<Action>, Vec<Issue>)> = cases
        .par_iter()
        .map(|case| validate_and_enrich(&case.steps))
        .collect();

    let mut steps_validated = Vec::with_capacity(validated.len());
    let mut issues = Vec::new();
    for (enriched, case_issues) in validated {
        steps_validated.push(enriched);
        issues.extend(case_issues);
    }
    debug!(issues = issues.len(), "validation complete");

    let chained = chain_tests(&steps_validated);
    debug!(steps = chained.len(), "sequences chained");

    let optimized = optimize(&chained);
    debug!(
        kept = optimized.len(),
        dropped = chained.len() - optimized.len(),
        "redundancy removed"
    );

    let state_trace = replay(&optimized);
    let rejected = state_trace.iter().filter(|e| !e.accepted).count();
    info!(
        steps = state_trace.len(),
        rejected, "campaign replay complete"
    );

    let steps_raw = cases.iter().map(|c| c.steps.clone()).collect();
    build_report(&optimized, steps_raw, steps_validated, issues, state_trace)
}

/// Parse a suite document and run the pipeline over it.
///
/// Malformed input is the one fatal path: a step with zero or multiple
/// action keys, or a case of an unsupported shape, aborts before any
/// stage runs.
pub fn run_campaign_json(json: &str) -> Result<CampaignReport, CampaignError> {
    let cases = parse_suite(json)?;
    Ok(run_campaign(&cases))
}
