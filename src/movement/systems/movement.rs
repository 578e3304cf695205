//! Movement domain: frame and physics tick drivers.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::components::AvianBody;
use crate::movement::events::ClipMessages;
use crate::movement::{FootOffset, Locomotion, PadInput, PlayClipEvent, Player};

type BodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Locomotion,
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut GravityScale,
        &'static FootOffset,
    ),
    With<Player>,
>;

/// A locomotion entity without a rigid body cannot be driven at all.
pub(crate) fn require_rigid_body(query: Query<(Entity, Has<RigidBody>), Added<Locomotion>>) {
    for (entity, has_body) in &query {
        assert!(has_body, "Locomotion on {entity} has no RigidBody to drive");
    }
}

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<PadInput>,
    mut clip_events: MessageWriter<PlayClipEvent>,
    mut query: BodyQuery,
) {
    let dt = time.delta_secs();

    for (entity, mut locomotion, mut transform, mut velocity, mut gravity, foot) in &mut query {
        let mut body = AvianBody {
            transform: &mut transform,
            velocity: &mut velocity,
            gravity: &mut gravity,
            foot_offset: foot.0,
        };
        let mut clips = ClipMessages {
            entity,
            writer: &mut clip_events,
        };
        locomotion.0.on_tick(dt, &*input, &mut body, &mut clips);
    }
}

/// Runs in `FixedUpdate`, before contact resolution.
pub(crate) fn apply_locomotion_forces(time: Res<Time>, mut query: BodyQuery) {
    let dt = time.delta_secs();

    for (_, mut locomotion, mut transform, mut velocity, mut gravity, foot) in &mut query {
        let mut body = AvianBody {
            transform: &mut transform,
            velocity: &mut velocity,
            gravity: &mut gravity,
            foot_offset: foot.0,
        };
        locomotion.0.on_physics_tick(dt, &mut body);
    }
}
