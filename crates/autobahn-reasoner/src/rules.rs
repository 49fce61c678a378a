//! Advisory rule checks over a single test sequence.
//!
//! Rules observe, they never block: each violation becomes an [`Issue`]
//! and the step proceeds to enrichment regardless.

use autobahn_actions::limits::{ACC_MIN_SPEED, SPEED_MAX_LIMIT};
use autobahn_actions::types::{Action, Issue};

/// Running view of the sequence processed so far.
///
/// Advanced from the *enriched* output (not the raw input), so inserted
/// steps feed back into rule evaluation for subsequent steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleContext {
    /// Last known speed, if any `SET_SPEED` has been emitted yet.
    pub speed: Option<i64>,
    pub acc_on: bool,
}

impl RuleContext {
    /// Advance the context past one emitted step.
    pub fn advance(self, action: &Action) -> Self {
        match action {
            Action::SetSpeed { value } => Self {
                speed: *value,
                ..self
            },
            Action::AccOn {} => Self {
                acc_on: true,
                ..self
            },
            Action::AccOff {} => Self {
                acc_on: false,
                ..self
            },
            _ => self,
        }
    }
}

/// Evaluate the advisory rules for one step against the running context
/// as it stood *before* the step's own rewrite.
pub fn check_step(action: &Action, ctx: RuleContext) -> Vec<Issue> {
    let mut issues = Vec::new();

    match action {
        Action::AccOn {} => {
            if let Some(speed) = ctx.speed {
                if speed < ACC_MIN_SPEED {
                    issues.push(Issue::error(format!(
                        "ACC_ON at {speed} km/h violates ACC_MIN_SPEED (>= {ACC_MIN_SPEED} km/h)."
                    )));
                }
            }
        }
        Action::SetSpeed { value: Some(v) } if *v > SPEED_MAX_LIMIT => {
            issues.push(Issue::error(format!(
                "SET_SPEED {v} km/h violates SPEED_MAX_LIMIT (<= {SPEED_MAX_LIMIT} km/h)."
            )));
        }
        Action::LaneChangeLeft {} | Action::LaneChangeRight {} if ctx.acc_on => {
            issues.push(Issue::warning(format!(
                "{} while ACC is ON. Check LANE_CHANGE + ACC interaction.",
                action.kind()
            )));
        }
        _ => {}
    }

    issues
}
