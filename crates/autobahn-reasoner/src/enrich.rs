//! Sequence enrichment: rewrites each step into a safety-compliant
//! sub-sequence, inserting mandatory precursor actions.

use autobahn_actions::types::{Action, Issue};

use crate::rules::{check_step, RuleContext};

/// Rewrite one step into zero or more steps, given the context before
/// the step's own effect is applied.
///
/// The rewrite preserves intent: a requested speed or lane change always
/// survives, only prefixed with whatever the driving rules require.
fn enrich_step(action: &Action, ctx: RuleContext) -> Vec<Action> {
    match action {
        // Braking overrides ACC, so ACC is released first.
        Action::ApplyBrake {} if ctx.acc_on => {
            vec![Action::AccOff {}, Action::ApplyBrake {}]
        }

        // A lane change always gets its indicator, even if one is
        // already set; the optimizer removes the duplicate later.
        Action::LaneChangeLeft {} => {
            vec![Action::IndicatorLeft {}, Action::LaneChangeLeft {}]
        }
        Action::LaneChangeRight {} => {
            vec![Action::IndicatorRight {}, Action::LaneChangeRight {}]
        }

        Action::SetSpeed { value } => match value {
            // Translator produced a speed step with no value: drop it.
            None => vec![],
            Some(v) => match ctx.speed {
                // Reducing speed requires braking first.
                Some(prev) if *v < prev => {
                    vec![Action::ApplyBrake {}, Action::set_speed(*v)]
                }
                _ => vec![Action::set_speed(*v)],
            },
        },

        other => vec![other.clone()],
    }
}

/// Validate a sequence against the driving rules and rewrite it with the
/// mandatory safety steps inserted.
///
/// Rule checks are evaluated per original step against the running
/// context; the context is then advanced from every emitted step in
/// emission order, so insertions are visible to later rule evaluation.
/// Enrichment is total: no input makes it fail.
pub fn validate_and_enrich(steps: &[Action]) -> (Vec<Action>, Vec<Issue>) {
    let mut ctx = RuleContext::default();
    let mut enriched = Vec::with_capacity(steps.len());
    let mut issues = Vec::new();

    for step in steps {
        issues.extend(check_step(step, ctx));

        let rewritten = enrich_step(step, ctx);
        for emitted in &rewritten {
            ctx = ctx.advance(emitted);
        }
        enriched.extend(rewritten);
    }

    (enriched, issues)
}
