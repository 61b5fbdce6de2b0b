//! Demo scene spawning for the headless binary and integration tests.
use bevy::prelude::*;

use crate::components::ActorTag;
use crate::config::GuardConfig;
use crate::guard::Guard;

/// Marks a demo entity that ambles toward the origin each frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct DemoWalker {
    /// Movement speed in world units per second.
    pub speed: f32,
}

/// Spawns a minimal demo scene: a guard at the origin, a player-tagged
/// walker approaching it, and a non-player prop already inside the radius
/// (which must never trip the latch).
///
/// Uses the [`GuardConfig`] resource when present, otherwise the prototype
/// defaults.
pub fn spawn_world_system(mut commands: Commands, config: Option<Res<GuardConfig>>) {
    let guard = config
        .as_deref()
        .map_or_else(Guard::default, GuardConfig::to_guard);
    let player_tag = guard.player_tag.clone();

    commands.spawn((guard, TransformBundle::default()));

    commands.spawn((
        ActorTag(player_tag),
        DemoWalker { speed: 1.5 },
        placed(10.0, 0.0),
    ));

    // A crate sitting inside the detection circle from the start.
    commands.spawn((ActorTag("Crate".to_owned()), placed(1.0, 0.5)));
}

/// Moves demo walkers toward the origin, stopping there.
pub fn drive_walkers_system(
    time: Res<Time>,
    mut walkers: Query<(&mut Transform, &DemoWalker)>,
) {
    for (mut transform, walker) in &mut walkers {
        let to_origin = -transform.translation.truncate();
        let distance = to_origin.length();
        if distance <= f32::EPSILON {
            continue;
        }
        let step = (walker.speed * time.delta_seconds()).min(distance);
        let motion = (to_origin / distance) * step;
        transform.translation += motion.extend(0.0);
    }
}

/// Transform bundle with the global transform already derived, so positions
/// are correct on the very first sweep rather than after the first
/// propagation pass.
fn placed(x: f32, y: f32) -> TransformBundle {
    let local = Transform::from_xyz(x, y, 0.0);
    TransformBundle {
        local,
        global: GlobalTransform::from(local),
    }
}
