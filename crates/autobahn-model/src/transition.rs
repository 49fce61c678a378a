//! Transition guards and state updates, one pair per action.
//!
//! Guards are evaluated before any mutation; on failure the state is
//! left untouched and the error message becomes the trace record.

use autobahn_actions::limits::{ACC_MIN_SPEED, SPEED_HARD_CAP};
use autobahn_actions::types::Action;

use crate::state::{Indicator, Lane, VehicleState};

/// Why a step was rejected. The `Display` form is the authoritative
/// per-step message recorded in the trace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("SET_SPEED requires a value")]
    MissingSpeedValue,

    #[error("Speed cannot be negative")]
    NegativeSpeed,

    #[error("Speed exceeds vehicle capability")]
    SpeedExceedsCap,

    #[error("ACC cannot activate below 30 km/h")]
    AccBelowMinSpeed,

    #[error("ACC requires radar + camera")]
    AccSensorsUnavailable,

    #[error("ACC is already OFF")]
    AccAlreadyOff,

    #[error("Already in {lane} lane")]
    AlreadyInLane { lane: &'static str },

    #[error("{side} indicator must be ON before lane change")]
    IndicatorNotSet { side: &'static str },

    #[error("{side} indicator already ON")]
    IndicatorAlreadyOn { side: &'static str },

    #[error("{sensor} already disabled")]
    SensorAlreadyDisabled { sensor: &'static str },
}

/// Check the guard for `action` against `state` without mutating it.
pub fn check_guard(state: &VehicleState, action: &Action) -> Result<(), TransitionError> {
    match action {
        Action::SetSpeed { value } => match *value {
            None => return Err(TransitionError::MissingSpeedValue),
            Some(v) if v < 0 => return Err(TransitionError::NegativeSpeed),
            Some(v) if v > SPEED_HARD_CAP => return Err(TransitionError::SpeedExceedsCap),
            Some(_) => {}
        },

        Action::AccOn {} => {
            if state.speed < ACC_MIN_SPEED {
                return Err(TransitionError::AccBelowMinSpeed);
            }
            if !state.radar || !state.camera {
                return Err(TransitionError::AccSensorsUnavailable);
            }
        }
        Action::AccOff {} => {
            if !state.acc_on {
                return Err(TransitionError::AccAlreadyOff);
            }
        }

        Action::LaneChangeLeft {} => {
            if state.lane == Lane::Left {
                return Err(TransitionError::AlreadyInLane { lane: "left" });
            }
            if state.indicator != Indicator::Left {
                return Err(TransitionError::IndicatorNotSet { side: "Left" });
            }
        }
        Action::LaneChangeRight {} => {
            if state.lane == Lane::Right {
                return Err(TransitionError::AlreadyInLane { lane: "right" });
            }
            if state.indicator != Indicator::Right {
                return Err(TransitionError::IndicatorNotSet { side: "Right" });
            }
        }

        Action::IndicatorLeft {} => {
            if state.indicator == Indicator::Left {
                return Err(TransitionError::IndicatorAlreadyOn { side: "Left" });
            }
        }
        Action::IndicatorRight {} => {
            if state.indicator == Indicator::Right {
                return Err(TransitionError::IndicatorAlreadyOn { side: "Right" });
            }
        }

        Action::DisableRadar {} => {
            if !state.radar {
                return Err(TransitionError::SensorAlreadyDisabled { sensor: "Radar" });
            }
        }
        Action::DisableCamera {} => {
            if !state.camera {
                return Err(TransitionError::SensorAlreadyDisabled { sensor: "Camera" });
            }
        }
        Action::DisableLidar {} => {
            if !state.lidar {
                return Err(TransitionError::SensorAlreadyDisabled { sensor: "Lidar" });
            }
        }

        Action::ApplyBrake {} => {}
    }

    Ok(())
}

/// Apply `action` to `state`. On guard failure the state is unchanged.
pub fn apply(state: &mut VehicleState, action: &Action) -> Result<(), TransitionError> {
    check_guard(state, action)?;

    match action {
        Action::SetSpeed { value } => {
            // Guard established the value exists and is within the cap.
            if let Some(v) = value {
                state.speed = *v;
            }
        }
        Action::AccOn {} => state.acc_on = true,
        Action::AccOff {} => state.acc_on = false,
        Action::LaneChangeLeft {} => state.lane = Lane::Left,
        Action::LaneChangeRight {} => state.lane = Lane::Right,
        Action::IndicatorLeft {} => state.indicator = Indicator::Left,
        Action::IndicatorRight {} => state.indicator = Indicator::Right,
        Action::DisableRadar {} => state.radar = false,
        Action::DisableCamera {} => state.camera = false,
        Action::DisableLidar {} => state.lidar = false,
        Action::ApplyBrake {} => {}
    }

    Ok(())
}
