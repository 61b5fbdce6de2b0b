//! The relay must ignore events whose detector or owner is gone. This only
//! arises during entity teardown ordering and is a silent no-op, never a
//! fault.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use skulk::{
    ActorTag, DetectorOwner, DetectorRegion, GuardPlugin, RegionContacts, RegionEnter,
    DEFAULT_PLAYER_TAG,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransformPlugin)
        .add_plugins(GuardPlugin);
    app
}

fn placed(x: f32, y: f32) -> TransformBundle {
    let local = Transform::from_xyz(x, y, 0.0);
    TransformBundle {
        local,
        global: GlobalTransform::from(local),
    }
}

#[test]
fn detector_with_dead_owner_is_a_no_op() {
    let mut app = test_app();

    let ghost = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(ghost);

    app.world_mut().spawn((
        DetectorRegion::new(3.5),
        DetectorOwner(ghost),
        RegionContacts::default(),
        TransformBundle::default(),
    ));
    app.world_mut()
        .spawn((ActorTag(DEFAULT_PLAYER_TAG.to_owned()), placed(1.0, 0.0)));

    // The sweep raises an enter event; relaying it must not panic.
    app.update();
    app.update();
}

#[test]
fn event_for_dead_detector_is_a_no_op() {
    let mut app = test_app();

    let detector = app.world_mut().spawn_empty().id();
    let other = app.world_mut().spawn_empty().id();
    app.world_mut().despawn(detector);

    app.world_mut()
        .resource_mut::<Events<RegionEnter>>()
        .send(RegionEnter {
            detector,
            other,
            tag: DEFAULT_PLAYER_TAG.to_owned(),
        });
    app.update();
}
