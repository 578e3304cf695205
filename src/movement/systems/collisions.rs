//! Movement domain: routing collision notifications into locomotion.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::components::AvianBody;
use crate::movement::{Block, Contact, FootOffset, Ground, Locomotion, Player};

type SurfaceQuery<'w, 's> = Query<'w, 's, (&'static ColliderAabb, Has<Ground>, Has<Block>)>;

type ContactBodyQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Locomotion,
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut GravityScale,
        &'static FootOffset,
    ),
    With<Player>,
>;

/// Describe the other side of a collision, if it is something we stand on.
fn contact_for(entity: Entity, surfaces: &SurfaceQuery) -> Option<Contact> {
    let (aabb, is_ground, is_block) = surfaces.get(entity).ok()?;
    if is_block {
        Some(Contact::block(aabb.max.y))
    } else if is_ground {
        Some(Contact::ground(aabb.max.y))
    } else {
        None
    }
}

pub(crate) fn handle_collision_starts(
    mut collision_events: MessageReader<CollisionStart>,
    surfaces: SurfaceQuery,
    mut players: ContactBodyQuery,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok((mut locomotion, mut transform, mut velocity, mut gravity, foot)) =
                players.get_mut(player_entity)
            else {
                continue;
            };
            let Some(contact) = contact_for(other, &surfaces) else {
                continue;
            };

            let mut body = AvianBody {
                transform: &mut transform,
                velocity: &mut velocity,
                gravity: &mut gravity,
                foot_offset: foot.0,
            };
            locomotion.0.on_collision_begin(contact, &mut body);
        }
    }
}

pub(crate) fn handle_collision_ends(
    mut collision_events: MessageReader<CollisionEnd>,
    surfaces: SurfaceQuery,
    mut players: ContactBodyQuery,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok((mut locomotion, mut transform, mut velocity, mut gravity, foot)) =
                players.get_mut(player_entity)
            else {
                continue;
            };
            let Some(contact) = contact_for(other, &surfaces) else {
                continue;
            };

            let mut body = AvianBody {
                transform: &mut transform,
                velocity: &mut velocity,
                gravity: &mut gravity,
                foot_offset: foot.0,
            };
            locomotion.0.on_collision_end(contact, &mut body);
        }
    }
}

/// Ongoing block contacts, checked every physics tick after forces are applied.
pub(crate) fn resolve_block_contacts(
    time: Res<Time>,
    surfaces: SurfaceQuery,
    mut players: Query<
        (
            &CollidingEntities,
            &mut Locomotion,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &FootOffset,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (colliding, mut locomotion, mut transform, mut velocity, mut gravity, foot) in &mut players
    {
        let mut body = AvianBody {
            transform: &mut transform,
            velocity: &mut velocity,
            gravity: &mut gravity,
            foot_offset: foot.0,
        };

        for other in colliding.iter() {
            let Some(contact) = contact_for(*other, &surfaces) else {
                continue;
            };
            locomotion.0.on_collision_stay(dt, contact, &mut body);
        }
    }
}
