//! Detection constants shared across systems.
//!
//! The defaults are the prototype's tuning values, used both by
//! [`crate::guard::Guard`]'s `Default` implementation and by the
//! configuration layer when a field is omitted.

/// Smallest radius a guard may be given. Radii are clamped here rather than
/// rejected so a zero or negative input can never produce a degenerate
/// detection circle.
pub const MIN_DETECTION_RADIUS: f32 = 0.01;
/// Detection radius used when none is configured.
pub const DEFAULT_DETECTION_RADIUS: f32 = 3.5;
/// Tag carried by the player entity.
pub const DEFAULT_PLAYER_TAG: &str = "Player";
/// Outer cone angle of the detection light, in degrees.
pub const DEFAULT_OUTER_ANGLE: f32 = 90.0;
/// Inner cone angle of the detection light, in degrees. The applied value is
/// capped at the outer angle.
pub const DEFAULT_INNER_ANGLE: f32 = 60.0;
/// Fraction of the detection radius covered by the light's inner radius.
pub const DEFAULT_INNER_RADIUS_FACTOR: f32 = 0.6;
/// Upper bound for cone angles, in degrees.
pub const MAX_CONE_ANGLE: f32 = 360.0;
