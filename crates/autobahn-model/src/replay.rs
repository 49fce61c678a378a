//! Replays the final optimized sequence against the authoritative
//! vehicle model, producing one trace entry per step.

use serde::{Deserialize, Serialize};

use autobahn_actions::types::Action;

use crate::state::VehicleState;
use crate::transition;

/// One replay record. Rejected steps stay in the trace with the guard's
/// message; rejection never halts the replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub step: Action,
    pub accepted: bool,
    pub message: String,
    pub state: VehicleState,
}

/// The authoritative state machine. Owns the only [`VehicleState`] of an
/// orchestration run and mutates it exclusively through validated
/// transitions.
#[derive(Debug, Default)]
pub struct VehicleMachine {
    state: VehicleState,
}

impl VehicleMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one step, returning whether it was accepted plus a message
    /// describing what happened.
    pub fn apply_step(&mut self, step: &Action) -> (bool, String) {
        match transition::apply(&mut self.state, step) {
            Ok(()) => (true, format!("Applied {}", step.kind())),
            Err(e) => (false, e.to_string()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> VehicleState {
        self.state
    }
}

/// Replay a full sequence from a fresh vehicle, one trace entry per
/// input step.
pub fn replay(steps: &[Action]) -> Vec<TraceEntry> {
    let mut machine = VehicleMachine::new();

    steps
        .iter()
        .map(|step| {
            let (accepted, message) = machine.apply_step(step);
            TraceEntry {
                step: step.clone(),
                accepted,
                message,
                state: machine.state(),
            }
        })
        .collect()
}
