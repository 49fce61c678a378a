use serde::{Deserialize, Serialize};

/// Closed vocabulary of discrete vehicle control actions.
///
/// Serializes to the externally tagged wire form used throughout the
/// pipeline: `{"SET_SPEED": {"value": 80}}`, `{"APPLY_BRAKE": {}}`.
/// Every variant is struct-style so the payload is always a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Target speed in km/h. The upstream translator may emit this with
    /// no value; enrichment drops such steps.
    SetSpeed {
        #[serde(default)]
        value: Option<i64>,
    },
    ApplyBrake {},
    AccOn {},
    AccOff {},
    LaneChangeLeft {},
    LaneChangeRight {},
    IndicatorLeft {},
    IndicatorRight {},
    DisableRadar {},
    DisableCamera {},
    DisableLidar {},
}

impl Action {
    /// Wire name of this action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetSpeed { .. } => "SET_SPEED",
            Action::ApplyBrake {} => "APPLY_BRAKE",
            Action::AccOn {} => "ACC_ON",
            Action::AccOff {} => "ACC_OFF",
            Action::LaneChangeLeft {} => "LANE_CHANGE_LEFT",
            Action::LaneChangeRight {} => "LANE_CHANGE_RIGHT",
            Action::IndicatorLeft {} => "INDICATOR_LEFT",
            Action::IndicatorRight {} => "INDICATOR_RIGHT",
            Action::DisableRadar {} => "DISABLE_RADAR",
            Action::DisableCamera {} => "DISABLE_CAMERA",
            Action::DisableLidar {} => "DISABLE_LIDAR",
        }
    }

    /// Parameter payload as a JSON object (empty for parameterless
    /// actions and for a valueless `SET_SPEED`).
    pub fn params(&self) -> serde_json::Value {
        match self {
            Action::SetSpeed { value: Some(v) } => serde_json::json!({ "value": v }),
            _ => serde_json::json!({}),
        }
    }

    /// Convenience constructor for the common valued speed step.
    pub fn set_speed(value: i64) -> Self {
        Action::SetSpeed { value: Some(value) }
    }
}

/// One test case as handed over by the upstream translator: an
/// identifier plus an ordered sequence of action steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub steps: Vec<Action>,
}

/// Severity of a rule finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A rule finding produced during validation.
///
/// Issues are additive and advisory: they never remove steps and never
/// stop the pipeline. Only the state machine's per-step rejections are
/// structurally meaningful downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}
