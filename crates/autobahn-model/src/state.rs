use serde::{Deserialize, Serialize};

/// Lane position of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lane {
    Left,
    Center,
    Right,
}

/// Indicator stalk position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indicator {
    Off,
    Left,
    Right,
}

/// Authoritative vehicle state, evolved only through validated
/// transitions during replay.
///
/// `Copy`, so every trace entry carries a value snapshot rather than a
/// reference into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Current speed in km/h.
    pub speed: i64,
    pub acc_on: bool,
    pub lane: Lane,
    pub indicator: Indicator,
    /// Sensor availability flags. ACC needs radar and camera.
    pub radar: bool,
    pub camera: bool,
    pub lidar: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            speed: 0,
            acc_on: false,
            lane: Lane::Center,
            indicator: Indicator::Off,
            radar: true,
            camera: true,
            lidar: true,
        }
    }
}
