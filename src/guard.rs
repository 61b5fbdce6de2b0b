//! Guard detection rig: authoritative radius state and its propagation.
//!
//! This module provides the [`GuardPlugin`] that wires guard entities into
//! the app. Each [`Guard`] spawns a small rig of child entities exactly once
//! at construction: a [`PointLight2d`] visualising the detection range, a
//! trigger-shaped [`DetectorRegion`](crate::detector::DetectorRegion), and a
//! [`DetectionIndicator`]. The [`GuardRig`] component records those handles
//! so later radius changes go straight to the right entities instead of
//! re-discovering them each time. The underlying systems are also exposed
//! for tests.

use bevy::prelude::*;
use log::debug;
use serde::Serialize;

use crate::components::{DetectionIndicator, PointLight2d};
use crate::constants::{
    DEFAULT_DETECTION_RADIUS, DEFAULT_INNER_ANGLE, DEFAULT_INNER_RADIUS_FACTOR,
    DEFAULT_OUTER_ANGLE, DEFAULT_PLAYER_TAG, MIN_DETECTION_RADIUS,
};
use crate::detector::{
    relay_detector_events_system, sweep_detector_regions_system, DetectorOwner, DetectorRegion,
    RegionContacts, RegionEnter, RegionExit,
};

/// Bevy plugin that wires guard detection into the app.
///
/// Adding this plugin registers the region enter/exit events and the
/// `Update` chain: rig construction, radius sync, region sweep, and the
/// relay that drives the detection latch.
#[derive(Default)]
pub struct GuardPlugin;

impl Plugin for GuardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RegionEnter>()
            .add_event::<RegionExit>()
            .add_systems(
                Update,
                (
                    init_guard_rigs_system,
                    apply_guard_radius_system,
                    sweep_detector_regions_system,
                    relay_detector_events_system,
                )
                    .chain(),
            );
    }
}

/// A guard watching for the player within a circular detection range.
///
/// The radius is the single authoritative value; the light and the trigger
/// region are derived from it by [`apply_guard_radius_system`] whenever the
/// component changes. All numeric inputs are clamped, never rejected.
#[derive(Component, Debug, Clone, Serialize)]
pub struct Guard {
    /// Detection radius, kept at or above [`MIN_DETECTION_RADIUS`].
    radius: f32,
    /// Tag that identifies the player among entities entering the region.
    pub player_tag: String,
    /// Fraction of the radius covered by the light's inner radius.
    /// Clamped to `[0, 1]` when the inner radius is derived.
    pub inner_radius_factor: f32,
    /// Outer cone angle of the detection light, in degrees.
    pub outer_angle: f32,
    /// Configured inner cone angle, in degrees. The applied value is capped
    /// at [`Self::outer_angle`].
    pub inner_angle: f32,
    /// One-way detection latch. Set by the relay on the first matching
    /// region entry and never cleared automatically.
    pub(crate) detected: bool,
}

impl Guard {
    /// Creates a guard with the given detection radius and prototype
    /// defaults for everything else. The radius is clamped to
    /// [`MIN_DETECTION_RADIUS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use skulk::Guard;
    /// let guard = Guard::new(0.0);
    /// assert!((guard.radius() - 0.01).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(MIN_DETECTION_RADIUS),
            player_tag: DEFAULT_PLAYER_TAG.to_owned(),
            inner_radius_factor: DEFAULT_INNER_RADIUS_FACTOR,
            outer_angle: DEFAULT_OUTER_ANGLE,
            inner_angle: DEFAULT_INNER_ANGLE,
            detected: false,
        }
    }

    /// Returns the authoritative detection radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Sets the detection radius, clamping to [`MIN_DETECTION_RADIUS`].
    ///
    /// Derived state (light radii and the trigger region) is recomputed by
    /// [`apply_guard_radius_system`] on the next update. Applying the same
    /// radius twice yields identical derived state.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(MIN_DETECTION_RADIUS);
    }

    /// Inner light radius: the inner-radius factor clamped to `[0, 1]`
    /// multiplied by the detection radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use skulk::Guard;
    /// let guard = Guard::new(3.5);
    /// assert!((guard.inner_radius() - 2.1).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius_factor.clamp(0.0, 1.0) * self.radius
    }

    /// Inner cone angle as applied to the light: the configured inner angle
    /// capped at the outer angle.
    #[must_use]
    pub fn applied_inner_angle(&self) -> f32 {
        self.inner_angle.min(self.outer_angle)
    }

    /// Whether this guard has spotted the player. Sticky: once `true` it is
    /// never reset automatically.
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        self.detected
    }

    /// Writes the derived radius and angle values into `light`.
    pub fn apply_to_light(&self, light: &mut PointLight2d) {
        light.outer_radius = self.radius;
        light.inner_radius = self.inner_radius();
        light.outer_angle = self.outer_angle;
        light.inner_angle = self.applied_inner_angle();
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTION_RADIUS)
    }
}

/// Handles to the child entities spawned for a guard.
///
/// Inserted by [`init_guard_rigs_system`] exactly once per guard. Storing
/// the entities here means later radius updates address the children
/// directly instead of re-discovering them with per-frame lookups.
#[derive(Component, Debug, Clone, Copy)]
pub struct GuardRig {
    /// Child entity carrying the [`PointLight2d`].
    pub light: Entity,
    /// Child entity carrying the trigger region and owner back-reference.
    pub detector: Entity,
    /// Child entity carrying the [`DetectionIndicator`].
    pub indicator: Entity,
}

/// Spawns the light, detector, and indicator children for newly added
/// guards and records their handles in a [`GuardRig`].
///
/// The detector child receives a [`DetectorOwner`] back-reference because
/// region events are delivered against the entity owning the trigger shape,
/// not its parent. Runs before [`apply_guard_radius_system`] in the plugin
/// chain so the derived state is filled in the same frame.
pub fn init_guard_rigs_system(
    mut commands: Commands,
    guards: Query<(Entity, &Guard), (Added<Guard>, Without<GuardRig>)>,
) {
    for (entity, guard) in &guards {
        let light = commands
            .spawn((PointLight2d::default(), TransformBundle::default()))
            .set_parent(entity)
            .id();
        let detector = commands
            .spawn((
                DetectorRegion::new(guard.radius()),
                DetectorOwner(entity),
                RegionContacts::default(),
                TransformBundle::default(),
            ))
            .set_parent(entity)
            .id();
        let indicator = commands
            .spawn(DetectionIndicator::default())
            .set_parent(entity)
            .id();
        debug!("wired guard rig for {entity:?} (radius {})", guard.radius());
        commands.entity(entity).insert(GuardRig {
            light,
            detector,
            indicator,
        });
    }
}

/// Propagates a guard's radius and angles to its light and trigger region.
///
/// Runs when the [`Guard`] component changes (including insertion) or when
/// the rig has just been wired, so construction, runtime setter calls, and
/// reloaded configuration all funnel through the same derivation: outer
/// light radius = radius, inner light radius = clamp01(factor) x radius,
/// applied inner angle = min(inner, outer), region radius = radius.
pub fn apply_guard_radius_system(
    guards: Query<(&Guard, &GuardRig), Or<(Changed<Guard>, Added<GuardRig>)>>,
    mut lights: Query<&mut PointLight2d>,
    mut regions: Query<&mut DetectorRegion>,
) {
    for (guard, rig) in &guards {
        if let Ok(mut light) = lights.get_mut(rig.light) {
            guard.apply_to_light(&mut light);
        }
        if let Ok(mut region) = regions.get_mut(rig.detector) {
            region.radius = guard.radius();
        }
        debug!(
            "synced guard radius {} (inner {})",
            guard.radius(),
            guard.inner_radius()
        );
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.01)]
    #[case(-5.0, 0.01)]
    #[case(0.005, 0.01)]
    #[case(0.5, 0.5)]
    #[case(3.5, 3.5)]
    fn set_radius_clamps_to_minimum(#[case] input: f32, #[case] stored: f32) {
        let mut guard = Guard::new(1.0);
        guard.set_radius(input);
        assert_relative_eq!(guard.radius(), stored);
    }

    #[test]
    fn new_clamps_like_the_setter() {
        assert_relative_eq!(Guard::new(-1.0).radius(), MIN_DETECTION_RADIUS);
    }

    #[test]
    fn inner_radius_is_factor_times_radius() {
        let mut guard = Guard::new(3.5);
        guard.inner_radius_factor = 0.6;
        assert_relative_eq!(guard.inner_radius(), 2.1, epsilon = 1e-6);
    }

    #[rstest]
    #[case(-0.5, 0.0)]
    #[case(1.5, 1.0)]
    fn inner_radius_factor_is_clamped_on_use(#[case] factor: f32, #[case] effective: f32) {
        let mut guard = Guard::new(2.0);
        guard.inner_radius_factor = factor;
        assert_relative_eq!(guard.inner_radius(), effective * 2.0);
    }

    #[test]
    fn applied_inner_angle_never_exceeds_outer() {
        let mut guard = Guard::new(1.0);
        guard.outer_angle = 90.0;
        guard.inner_angle = 120.0;
        assert_relative_eq!(guard.applied_inner_angle(), 90.0);

        guard.inner_angle = 45.0;
        assert_relative_eq!(guard.applied_inner_angle(), 45.0);
    }

    #[test]
    fn apply_to_light_is_idempotent() {
        let guard = Guard::new(3.5);
        let mut once = PointLight2d::default();
        guard.apply_to_light(&mut once);
        let mut twice = once.clone();
        guard.apply_to_light(&mut twice);
        assert_eq!(once, twice);
        assert_relative_eq!(once.outer_radius, 3.5);
        assert_relative_eq!(once.inner_radius, 2.1, epsilon = 1e-6);
        assert_relative_eq!(once.inner_angle, 60.0);
        assert_relative_eq!(once.outer_angle, 90.0);
    }

    #[test]
    fn guards_start_undetected() {
        assert!(!Guard::default().is_detected());
    }
}
