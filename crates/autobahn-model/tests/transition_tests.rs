use autobahn_actions::types::Action;
use autobahn_model::state::{Indicator, Lane, VehicleState};
use autobahn_model::transition::{apply, TransitionError};

#[test]
fn test_set_speed_within_cap() {
    let mut state = VehicleState::default();
    apply(&mut state, &Action::set_speed(250)).unwrap();
    assert_eq!(state.speed, 250);
}

#[test]
fn test_set_speed_rejects_negative() {
    let mut state = VehicleState::default();
    let err = apply(&mut state, &Action::set_speed(-10)).unwrap_err();
    assert_eq!(err, TransitionError::NegativeSpeed);
    assert_eq!(state.speed, 0);
}

#[test]
fn test_set_speed_rejects_above_cap() {
    let mut state = VehicleState::default();
    let err = apply(&mut state, &Action::set_speed(251)).unwrap_err();
    assert_eq!(err, TransitionError::SpeedExceedsCap);
    assert_eq!(err.to_string(), "Speed exceeds vehicle capability");
}

#[test]
fn test_set_speed_rejects_missing_value() {
    let mut state = VehicleState::default();
    let err = apply(&mut state, &Action::SetSpeed { value: None }).unwrap_err();
    assert_eq!(err, TransitionError::MissingSpeedValue);
}

#[test]
fn test_acc_on_requires_minimum_speed() {
    let mut state = VehicleState::default();
    state.speed = 29;
    let err = apply(&mut state, &Action::AccOn {}).unwrap_err();
    assert_eq!(err, TransitionError::AccBelowMinSpeed);
    assert_eq!(err.to_string(), "ACC cannot activate below 30 km/h");
    assert!(!state.acc_on);

    state.speed = 30;
    apply(&mut state, &Action::AccOn {}).unwrap();
    assert!(state.acc_on);
}

#[test]
fn test_acc_on_requires_radar_and_camera() {
    let mut state = VehicleState::default();
    state.speed = 80;
    state.radar = false;
    assert_eq!(
        apply(&mut state, &Action::AccOn {}),
        Err(TransitionError::AccSensorsUnavailable)
    );

    state.radar = true;
    state.camera = false;
    assert_eq!(
        apply(&mut state, &Action::AccOn {}),
        Err(TransitionError::AccSensorsUnavailable)
    );

    // Lidar is not part of the ACC sensor set.
    state.camera = true;
    state.lidar = false;
    apply(&mut state, &Action::AccOn {}).unwrap();
}

#[test]
fn test_acc_off_requires_acc_on() {
    let mut state = VehicleState::default();
    let err = apply(&mut state, &Action::AccOff {}).unwrap_err();
    assert_eq!(err, TransitionError::AccAlreadyOff);

    state.acc_on = true;
    apply(&mut state, &Action::AccOff {}).unwrap();
    assert!(!state.acc_on);
}

#[test]
fn test_lane_change_requires_matching_indicator() {
    let mut state = VehicleState::default();
    let err = apply(&mut state, &Action::LaneChangeLeft {}).unwrap_err();
    assert_eq!(err, TransitionError::IndicatorNotSet { side: "Left" });
    assert_eq!(
        err.to_string(),
        "Left indicator must be ON before lane change"
    );

    apply(&mut state, &Action::IndicatorLeft {}).unwrap();
    apply(&mut state, &Action::LaneChangeLeft {}).unwrap();
    assert_eq!(state.lane, Lane::Left);
}

#[test]
fn test_lane_change_rejects_same_lane() {
    let mut state = VehicleState::default();
    state.lane = Lane::Right;
    state.indicator = Indicator::Right;
    let err = apply(&mut state, &Action::LaneChangeRight {}).unwrap_err();
    assert_eq!(err, TransitionError::AlreadyInLane { lane: "right" });
    assert_eq!(err.to_string(), "Already in right lane");
}

#[test]
fn test_wrong_indicator_blocks_lane_change() {
    let mut state = VehicleState::default();
    state.indicator = Indicator::Left;
    assert_eq!(
        apply(&mut state, &Action::LaneChangeRight {}),
        Err(TransitionError::IndicatorNotSet { side: "Right" })
    );
    assert_eq!(state.lane, Lane::Center);
}

#[test]
fn test_indicator_rejects_duplicate() {
    let mut state = VehicleState::default();
    apply(&mut state, &Action::IndicatorRight {}).unwrap();
    let err = apply(&mut state, &Action::IndicatorRight {}).unwrap_err();
    assert_eq!(err, TransitionError::IndicatorAlreadyOn { side: "Right" });

    // Switching sides is fine.
    apply(&mut state, &Action::IndicatorLeft {}).unwrap();
    assert_eq!(state.indicator, Indicator::Left);
}

#[test]
fn test_sensor_disable_rejects_duplicate() {
    let mut state = VehicleState::default();
    apply(&mut state, &Action::DisableRadar {}).unwrap();
    assert!(!state.radar);
    assert_eq!(
        apply(&mut state, &Action::DisableRadar {}),
        Err(TransitionError::SensorAlreadyDisabled { sensor: "Radar" })
    );

    apply(&mut state, &Action::DisableCamera {}).unwrap();
    apply(&mut state, &Action::DisableLidar {}).unwrap();
    assert_eq!(
        apply(&mut state, &Action::DisableLidar {}),
        Err(TransitionError::SensorAlreadyDisabled { sensor: "Lidar" })
    );
}

#[test]
fn test_brake_is_always_accepted() {
    let mut state = VehicleState::default();
    apply(&mut state, &Action::ApplyBrake {}).unwrap();
    assert_eq!(state, VehicleState::default());
}
