//! Movement domain: test room and player spawning for the demo binary.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::ClipPlayback;
use crate::movement::{
    Block, FootOffset, Ground, Locomotion, LocomotionController, LocomotionTuning, Player,
};

const PLAYER_SIZE: Vec3 = Vec3::new(0.6, 1.6, 0.6);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let foot_offset = PLAYER_SIZE.y * 0.5;

    info!(
        "Spawning player: limits fwd={} run={} back={}, jump_power={}",
        tuning.forward_speed_limit,
        tuning.run_speed_limit,
        tuning.backward_speed_limit,
        tuning.jump_power
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            Locomotion(LocomotionController::new(tuning.clone())),
            FootOffset(foot_offset),
            ClipPlayback::default(),
        ),
        // Rendering
        Mesh3d(meshes.add(Cuboid::from_size(PLAYER_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_xyz(0.0, foot_offset, 3.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::cuboid(PLAYER_SIZE.x, PLAYER_SIZE.y, PLAYER_SIZE.z),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            CollisionEventsEnabled,
            CollidingEntities::default(),
        ),
    ));
}

pub(crate) fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let block_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground, top face at y = 0
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(24.0, 1.0, 24.0))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(24.0, 1.0, 24.0),
    ));

    // Unit blocks on the grid: a single step, a two-high wall and a stair
    let block_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let block_material = materials.add(block_color);
    let cells = [
        IVec3::new(0, 0, 0),
        IVec3::new(3, 0, -2),
        IVec3::new(3, 1, -2),
        IVec3::new(4, 0, -2),
        IVec3::new(4, 1, -2),
        IVec3::new(-3, 0, -1),
        IVec3::new(-3, 0, -2),
        IVec3::new(-3, 1, -2),
        IVec3::new(-3, 0, -3),
        IVec3::new(-3, 1, -3),
        IVec3::new(-3, 2, -3),
    ];

    for cell in cells {
        commands.spawn((
            Block,
            Mesh3d(block_mesh.clone()),
            MeshMaterial3d(block_material.clone()),
            Transform::from_translation(cell.as_vec3() + Vec3::splat(0.5)),
            RigidBody::Static,
            Collider::cuboid(1.0, 1.0, 1.0),
        ));
    }
}

/// Dump locomotion state for every player on F3.
#[cfg(feature = "dev-tools")]
pub(crate) fn log_locomotion_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(&Locomotion, &Transform), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (locomotion, transform) in &query {
        let controller = &locomotion.0;
        let gate = controller.speed_gate();
        info!(
            "Locomotion: pos={:.2?} grounded={} speed={:.3} prev={:.3} frozen={} \
             intent={:?} clip={:?}",
            transform.translation,
            controller.is_grounded(),
            gate.current(),
            gate.previous(),
            gate.is_frozen(),
            controller.intent(),
            controller.current_clip()
        );
    }
}
