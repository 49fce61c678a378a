//! Physical and regulatory limits for the vehicle under test.
//!
//! These are fixed constants rather than loaded rules. Note that the
//! advisory speed limit and the hard cap are enforced independently:
//! the reasoner flags anything above [`SPEED_MAX_LIMIT`] as an issue,
//! while the vehicle model accepts anything up to [`SPEED_HARD_CAP`].
//! The two thresholds are deliberately not unified.

/// Minimum speed (km/h) at which adaptive cruise control may engage.
pub const ACC_MIN_SPEED: i64 = 30;

/// Advisory maximum speed (km/h). Exceeding it raises an error issue
/// but does not block the step.
pub const SPEED_MAX_LIMIT: i64 = 180;

/// Hard vehicle capability cap (km/h). The model rejects any speed
/// above it.
pub const SPEED_HARD_CAP: i64 = 250;
