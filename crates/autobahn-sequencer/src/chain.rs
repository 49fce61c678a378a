//! Merges validated per-test sequences into one continuous campaign
//! sequence, synthesizing minimal transition steps between tests.

use autobahn_actions::types::Action;

/// Speed/ACC view carried across test boundaries.
///
/// Lane state is deliberately not bridged: a new test inherits whatever
/// lane the previous test ended in, and the replay stage is the
/// authority that records any consequence of that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BridgeState {
    speed: Option<i64>,
    acc_on: bool,
}

impl BridgeState {
    fn observe(&mut self, action: &Action) {
        match action {
            Action::SetSpeed { value: Some(v) } => self.speed = Some(*v),
            Action::AccOn {} => self.acc_on = true,
            Action::AccOff {} => self.acc_on = false,
            _ => {}
        }
    }
}

/// Target speed of a case: the value of its *first* `SET_SPEED` step,
/// whatever that value is (a valueless first speed step yields none).
fn first_speed(case: &[Action]) -> Option<i64> {
    case.iter()
        .find_map(|a| match a {
            Action::SetSpeed { value } => Some(*value),
            _ => None,
        })
        .flatten()
}

/// Merge validated test sequences into one flat sequence.
///
/// The first case is appended verbatim. Before each later case, a
/// minimal transition is synthesized: a `SET_SPEED` to the case's target
/// speed when that is known and differs from the bridged speed, then an
/// `ACC_OFF` when the previous case left ACC engaged.
pub fn chain_tests(cases: &[Vec<Action>]) -> Vec<Action> {
    let mut chained = Vec::new();
    let mut bridge = BridgeState::default();

    for (idx, case) in cases.iter().enumerate() {
        if idx > 0 {
            emit_transition(&mut chained, &mut bridge, case);
        }
        for step in case {
            bridge.observe(step);
            chained.push(step.clone());
        }
    }

    chained
}

fn emit_transition(out: &mut Vec<Action>, bridge: &mut BridgeState, next: &[Action]) {
    if let Some(target) = first_speed(next) {
        if bridge.speed != Some(target) {
            out.push(Action::set_speed(target));
            bridge.speed = Some(target);
        }
    }

    if bridge.acc_on {
        out.push(Action::AccOff {});
        bridge.acc_on = false;
    }
}
