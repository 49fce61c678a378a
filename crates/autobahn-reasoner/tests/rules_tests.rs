use autobahn_actions::types::{Action, Severity};
use autobahn_reasoner::validate_and_enrich;

#[test]
fn test_acc_on_below_minimum_speed_is_an_error() {
    let steps = vec![Action::set_speed(20), Action::AccOn {}];
    let (_, issues) = validate_and_enrich(&steps);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(
        issues[0].message,
        "ACC_ON at 20 km/h violates ACC_MIN_SPEED (>= 30 km/h)."
    );
}

#[test]
fn test_acc_on_with_unknown_speed_is_not_flagged() {
    let (_, issues) = validate_and_enrich(&[Action::AccOn {}]);
    assert!(issues.is_empty());
}

#[test]
fn test_acc_on_at_minimum_speed_is_clean() {
    let (_, issues) = validate_and_enrich(&[Action::set_speed(30), Action::AccOn {}]);
    assert!(issues.is_empty());
}

#[test]
fn test_speed_above_max_limit_is_an_error() {
    let (_, issues) = validate_and_enrich(&[Action::set_speed(200)]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(
        issues[0].message,
        "SET_SPEED 200 km/h violates SPEED_MAX_LIMIT (<= 180 km/h)."
    );
}

#[test]
fn test_speed_at_max_limit_is_clean() {
    let (_, issues) = validate_and_enrich(&[Action::set_speed(180)]);
    assert!(issues.is_empty());
}

#[test]
fn test_lane_change_under_acc_is_a_warning() {
    let steps = vec![
        Action::set_speed(80),
        Action::AccOn {},
        Action::LaneChangeLeft {},
    ];
    let (_, issues) = validate_and_enrich(&steps);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(
        issues[0].message,
        "LANE_CHANGE_LEFT while ACC is ON. Check LANE_CHANGE + ACC interaction."
    );
}

#[test]
fn test_lane_change_without_acc_is_clean() {
    let (_, issues) = validate_and_enrich(&[Action::set_speed(80), Action::LaneChangeRight {}]);
    assert!(issues.is_empty());
}

// The mixed sequence exercises all three rules in one pass: ACC engaged
// too slow, a lane change under ACC, and a speed above the limit.
#[test]
fn test_mixed_sequence_collects_all_issues() {
    let steps = vec![
        Action::set_speed(0),
        Action::set_speed(20),
        Action::AccOn {},
        Action::LaneChangeLeft {},
        Action::ApplyBrake {},
        Action::set_speed(200),
    ];
    let (enriched, issues) = validate_and_enrich(&steps);

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(warnings.len(), 1);

    // The brake was issued under ACC (engaged by the earlier ACC_ON), so
    // it carries the ACC_OFF prefix in the enriched output.
    let brake_pos = enriched
        .iter()
        .position(|a| *a == Action::ApplyBrake {})
        .unwrap();
    assert_eq!(enriched[brake_pos - 1], Action::AccOff {});
}

// The ACC check tracks the running speed: the later 80 km/h supersedes
// the earlier 20, so this ACC_ON is clean.
#[test]
fn test_acc_check_uses_latest_emitted_speed() {
    let steps = vec![
        Action::set_speed(20),
        Action::set_speed(80),
        Action::AccOn {},
    ];
    let (_, issues) = validate_and_enrich(&steps);
    assert!(issues.is_empty());
}
