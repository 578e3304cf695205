//! Movement domain: components and the avian body adapter.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::capabilities::CharacterBody;
use super::driver::LocomotionController;

/// Player character
#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for climbable grid blocks
#[derive(Component, Debug)]
pub struct Block;

/// Locomotion state driven by the frame and physics ticks.
#[derive(Component, Debug)]
pub struct Locomotion(pub LocomotionController);

/// Distance from the body origin down to the feet.
#[derive(Component, Debug, Clone, Copy)]
pub struct FootOffset(pub f32);

/// One character's rigid body, borrowed for a single driver call.
pub(crate) struct AvianBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    pub gravity: &'a mut GravityScale,
    pub foot_offset: f32,
}

impl CharacterBody for AvianBody<'_> {
    fn speed(&self) -> f32 {
        self.velocity.0.length()
    }

    fn forward(&self) -> Vec3 {
        *self.transform.forward()
    }

    fn up(&self) -> Vec3 {
        *self.transform.up()
    }

    fn add_acceleration(&mut self, acceleration: Vec3, dt: f32) {
        self.velocity.0 += acceleration * dt;
    }

    fn set_gravity(&mut self, enabled: bool) {
        self.gravity.0 = if enabled { 1.0 } else { 0.0 };
    }

    fn position(&self) -> Vec3 {
        self.transform.translation - Vec3::Y * self.foot_offset
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position + Vec3::Y * self.foot_offset;
    }

    fn yaw_by(&mut self, degrees: f32) {
        self.transform.rotate_y(degrees.to_radians());
    }
}
