//! Trigger regions, the overlap sweep, and the relay to owning guards.
//!
//! A guard's circular trigger shape lives on a child entity, so region
//! events are raised against that child rather than the guard itself. Each
//! detector therefore carries a [`DetectorOwner`] back-reference, and
//! [`relay_detector_events_system`] forwards events to the owner. The
//! [`sweep_detector_regions_system`] stands in for an external 2D physics
//! engine: it tests tagged entities against each region and emits
//! [`RegionEnter`]/[`RegionExit`] once per crossing.

use std::collections::HashSet;

use bevy::prelude::*;
use log::{debug, info};

use crate::components::{ActorTag, DetectionIndicator};
use crate::constants::MIN_DETECTION_RADIUS;
use crate::guard::{Guard, GuardRig};

/// Circular trigger shape mirroring the owning guard's detection radius.
///
/// Reports overlap events without producing any physical collision
/// response.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DetectorRegion {
    /// Radius of the trigger circle, kept in sync with the guard.
    pub radius: f32,
}

impl DetectorRegion {
    /// Creates a region with the given radius, clamped to the minimum.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(MIN_DETECTION_RADIUS),
        }
    }
}

/// Non-owning back-reference from a detector child to its guard.
///
/// The child never outlives its guard in normal play; if the guard is gone
/// by the time an event is relayed (teardown ordering), the relay is a
/// no-op.
#[derive(Component, Debug, Clone, Copy)]
pub struct DetectorOwner(pub Entity);

/// Entities currently inside a detector region.
///
/// Maintained by the sweep so that each boundary crossing raises exactly
/// one enter or exit event.
#[derive(Component, Debug, Default)]
pub struct RegionContacts(pub HashSet<Entity>);

/// A tagged entity entered a detector region this frame.
#[derive(Event, Debug, Clone)]
pub struct RegionEnter {
    /// The detector child whose region was entered.
    pub detector: Entity,
    /// The entity that entered.
    pub other: Entity,
    /// The entering entity's tag.
    pub tag: String,
}

/// A tagged entity left a detector region this frame.
#[derive(Event, Debug, Clone)]
pub struct RegionExit {
    /// The detector child whose region was left.
    pub detector: Entity,
    /// The entity that left.
    pub other: Entity,
    /// The leaving entity's tag.
    pub tag: String,
}

/// Tests tagged entities against every detector region and emits enter and
/// exit events for boundary crossings.
///
/// Overlap is a circle-vs-point test in world space. Entities that despawn
/// while inside a region simply drop out of the contact set without an exit
/// event, matching how trigger callbacks vanish with their collider.
pub fn sweep_detector_regions_system(
    mut regions: Query<(Entity, &GlobalTransform, &DetectorRegion, &mut RegionContacts)>,
    actors: Query<(Entity, &GlobalTransform, &ActorTag)>,
    mut enters: EventWriter<RegionEnter>,
    mut exits: EventWriter<RegionExit>,
) {
    for (detector, region_transform, region, mut contacts) in &mut regions {
        let centre = region_transform.translation().truncate();
        let radius_sq = region.radius * region.radius;

        let mut inside: HashSet<Entity> = HashSet::new();
        for (other, transform, tag) in &actors {
            let offset = transform.translation().truncate() - centre;
            if offset.length_squared() > radius_sq {
                continue;
            }
            inside.insert(other);
            if !contacts.0.contains(&other) {
                debug!("{other:?} ({}) entered region of {detector:?}", tag.0);
                enters.send(RegionEnter {
                    detector,
                    other,
                    tag: tag.0.clone(),
                });
            }
        }

        for &other in &contacts.0 {
            if inside.contains(&other) {
                continue;
            }
            if let Ok((_, _, tag)) = actors.get(other) {
                debug!("{other:?} ({}) left region of {detector:?}", tag.0);
                exits.send(RegionExit {
                    detector,
                    other,
                    tag: tag.0.clone(),
                });
            }
        }

        contacts.0 = inside;
    }
}

/// Forwards region events from detector children to their owning guards and
/// drives the detection latch.
///
/// An enter event whose tag matches the guard's player tag latches the
/// guard as detected and shows its indicator. Exit events are deliberately
/// ignored: once detected, a guard stays detected. Events whose detector or
/// owner no longer exists are dropped silently, which only happens during
/// entity teardown.
pub fn relay_detector_events_system(
    mut enters: EventReader<RegionEnter>,
    mut exits: EventReader<RegionExit>,
    owners: Query<&DetectorOwner>,
    mut guards: Query<(&mut Guard, &GuardRig)>,
    mut indicators: Query<&mut DetectionIndicator>,
) {
    for event in enters.read() {
        let Ok(owner) = owners.get(event.detector) else {
            continue;
        };
        let Ok((mut guard, rig)) = guards.get_mut(owner.0) else {
            continue;
        };
        if event.tag != guard.player_tag {
            continue;
        }
        if guard.detected {
            continue;
        }
        guard.detected = true;
        info!("guard {:?} detected the player", owner.0);
        if let Ok(mut indicator) = indicators.get_mut(rig.indicator) {
            indicator.visible = true;
        }
    }

    // One-way latch: exits never clear the detected state.
    for event in exits.read() {
        if let Ok(owner) = owners.get(event.detector) {
            debug!(
                "{:?} left guard {:?}'s region; detection state unchanged",
                event.other, owner.0
            );
        }
    }
}
