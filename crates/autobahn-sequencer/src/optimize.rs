//! Removes provably redundant steps from the chained sequence.
//!
//! This is a stateful filter, not a windowed dedupe: a duplicate is
//! recognized against the last *kept* value for its field, no matter how
//! far back that was established. The brake rule is the one exception —
//! it only collapses strictly adjacent `APPLY_BRAKE` pairs.

use autobahn_actions::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Last value established by a kept step, per tracked field. Fields stay
/// untouched when a duplicate is dropped.
#[derive(Debug, Clone, Copy, Default)]
struct LastKnown {
    speed: Option<i64>,
    acc_on: Option<bool>,
    lane: Option<Side>,
    indicator: Option<Side>,
}

/// Filter the sequence down to steps that change established state.
///
/// Output never exceeds the input in length, and running the filter
/// twice yields the same sequence as running it once.
pub fn optimize(steps: &[Action]) -> Vec<Action> {
    let mut kept = Vec::with_capacity(steps.len());
    let mut last = LastKnown::default();
    let mut last_was_brake = false;

    for step in steps {
        let drop = match step {
            Action::ApplyBrake {} => last_was_brake,

            Action::SetSpeed { value } => {
                if last.speed == *value {
                    true
                } else {
                    last.speed = *value;
                    false
                }
            }

            Action::AccOn {} => {
                if last.acc_on == Some(true) {
                    true
                } else {
                    last.acc_on = Some(true);
                    false
                }
            }
            Action::AccOff {} => {
                if last.acc_on == Some(false) {
                    true
                } else {
                    last.acc_on = Some(false);
                    false
                }
            }

            Action::LaneChangeLeft {} => {
                if last.lane == Some(Side::Left) {
                    true
                } else {
                    last.lane = Some(Side::Left);
                    false
                }
            }
            Action::LaneChangeRight {} => {
                if last.lane == Some(Side::Right) {
                    true
                } else {
                    last.lane = Some(Side::Right);
                    false
                }
            }

            Action::IndicatorLeft {} => {
                if last.indicator == Some(Side::Left) {
                    true
                } else {
                    last.indicator = Some(Side::Left);
                    false
                }
            }
            Action::IndicatorRight {} => {
                if last.indicator == Some(Side::Right) {
                    true
                } else {
                    last.indicator = Some(Side::Right);
                    false
                }
            }

            _ => false,
        };

        last_was_brake = matches!(step, Action::ApplyBrake {});
        if !drop {
            kept.push(step.clone());
        }
    }

    kept
}
