//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use super::capabilities::{ActionButtons, ButtonState, DirectionalInput};

/// Locomotion tunables. All speed limits must be positive.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub jump_power: f32,
    pub rotational_speed: f32,
    /// Walk forces are admitted only below this speed.
    pub forward_speed_limit: f32,
    /// Run forces are admitted only below this speed.
    pub run_speed_limit: f32,
    /// Backward forces are admitted only below this speed.
    pub backward_speed_limit: f32,
    pub walk_acceleration: f32,
    pub run_acceleration: f32,
    pub backward_acceleration: f32,
    /// Units per second lifted while climbing a ledge.
    pub climb_speed: f32,
    /// Units per second slid sideways off a wall.
    pub slide_speed: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            jump_power: 5.0,
            rotational_speed: 10.0,
            forward_speed_limit: 2.0,
            run_speed_limit: 4.0,
            backward_speed_limit: 1.0,
            walk_acceleration: 12.0,
            run_acceleration: 18.0,
            backward_acceleration: 8.0,
            climb_speed: 1.6,
            slide_speed: 0.6,
        }
    }
}

/// Pad state sampled once per frame from keyboard and gamepads.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PadInput {
    pub up: ButtonState,
    pub down: ButtonState,
    pub left: ButtonState,
    pub right: ButtonState,
    pub jump: ButtonState,
    pub run: ButtonState,
}

impl DirectionalInput for PadInput {
    fn up(&self) -> ButtonState {
        self.up
    }

    fn down(&self) -> ButtonState {
        self.down
    }

    fn left(&self) -> ButtonState {
        self.left
    }

    fn right(&self) -> ButtonState {
        self.right
    }
}

impl ActionButtons for PadInput {
    fn jump(&self) -> ButtonState {
        self.jump
    }

    fn run_modifier(&self) -> ButtonState {
        self.run
    }
}
