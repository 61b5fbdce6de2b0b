//! ECS component types shared between systems.
//! Includes entity tags, the 2D point-light primitive, and the detection
//! indicator toggled when a guard spots the player.
use bevy::prelude::*;
use serde::Serialize;

/// String tag identifying what kind of actor an entity is.
///
/// Guards compare this against their configured player tag when a region
/// event arrives.
#[derive(Component, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorTag(pub String);

impl ActorTag {
    /// Returns `true` when the tag equals `other`.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A 2D point light with inner/outer radius and cone angles.
///
/// Used purely as a visual detection-range indicator; any render layer that
/// understands these fields can draw it, and headless runs simply carry the
/// values. The guard's radius sync keeps it consistent with the trigger
/// region.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct PointLight2d {
    /// Outer radius of the lit area, equal to the guard's detection radius.
    pub outer_radius: f32,
    /// Inner fully-lit radius, derived from the guard's inner-radius factor.
    pub inner_radius: f32,
    /// Outer cone angle in degrees.
    pub outer_angle: f32,
    /// Inner cone angle in degrees, never exceeding [`Self::outer_angle`].
    pub inner_angle: f32,
    /// Light intensity.
    pub intensity: f32,
}

impl Default for PointLight2d {
    fn default() -> Self {
        Self {
            outer_radius: 0.0,
            inner_radius: 0.0,
            outer_angle: 0.0,
            inner_angle: 0.0,
            intensity: 1.0,
        }
    }
}

/// Boolean-activatable stand-in for the "player detected" UI element.
///
/// Starts hidden; the detector relay flips `visible` on the first matching
/// region entry and never hides it again (the latch is one-way).
#[derive(Component, Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionIndicator {
    /// Whether the indicator is currently shown.
    pub visible: bool,
}
