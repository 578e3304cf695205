//! Movement domain: the locomotion driver.
//!
//! The host calls [`LocomotionController::on_tick`] once per rendered frame
//! and [`LocomotionController::on_physics_tick`] once per fixed physics step.
//! Frame ticks only record intent; physics ticks turn admitted intent into at
//! most one force each and then clear it. Collision notifications are routed
//! through the `on_collision_*` methods.

use bevy::prelude::*;

use super::capabilities::{
    ActionButtons, CharacterBody, ClipPlayer, Contact, DirectionalInput, LocomotionClip,
    SurfaceKind,
};
use super::climb::{self, ClimbMove};
use super::grounded::GroundedState;
use super::intent::{IntentState, Motion};
use super::resources::LocomotionTuning;
use super::speed_gate::SpeedGate;

/// Degrees turned per unit of `rotational_speed` per second.
pub const ROTATION_SCALE: f32 = 12.0;
/// Jump acceleration per unit of `jump_power`.
pub const JUMP_SCALE: f32 = 50.0;

/// Level state of the forward/backward buttons from the latest frame tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldAxis {
    forward: bool,
    backward: bool,
}

/// Locomotion state for one character.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    intent: IntentState,
    gate: SpeedGate,
    grounded: GroundedState,
    held: HeldAxis,
    clip: Option<LocomotionClip>,
    /// Top of the block being climbed, until the climb settles.
    climb_top: Option<f32>,
    /// Displacement already applied during the current physics tick.
    tick_move: ClimbMove,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning) -> Self {
        let gate = SpeedGate::new(
            tuning.forward_speed_limit,
            tuning.run_speed_limit,
            tuning.backward_speed_limit,
        );
        Self {
            tuning,
            intent: IntentState::new(),
            gate,
            grounded: GroundedState::default(),
            held: HeldAxis::default(),
            clip: None,
            climb_top: None,
            tick_move: ClimbMove::None,
        }
    }

    pub fn intent(&self) -> &IntentState {
        &self.intent
    }

    pub fn speed_gate(&self) -> &SpeedGate {
        &self.gate
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded.is_grounded()
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded.set(grounded);
    }

    /// Last clip requested from the clip player.
    pub fn current_clip(&self) -> Option<LocomotionClip> {
        self.clip
    }

    /// Frame tick: sample input, update intent, rotate, pick a clip.
    pub fn on_tick<I, B, C>(&mut self, dt: f32, input: &I, body: &mut B, clips: &mut C)
    where
        I: DirectionalInput + ActionButtons,
        B: CharacterBody,
        C: ClipPlayer,
    {
        let up = input.up().pressed;
        let down = input.down().pressed;
        let run = input.run_modifier().pressed;
        self.held = HeldAxis {
            forward: up,
            backward: down,
        };

        if self.grounded.is_grounded() && !up && !down {
            self.intent.apply_idle();
        } else if up && !run {
            self.intent.apply_walk();
        } else if up && run {
            self.intent.apply_run();
        } else if down {
            self.intent.apply_backward();
        }

        if input.jump().just_pressed && self.grounded.is_grounded() {
            self.intent.apply_jump();
            self.grounded.set(false);
            debug!("Jump requested, leaving ground");
            self.request_clip(LocomotionClip::Jump, clips);
        }

        let turn = self.tuning.rotational_speed * dt * ROTATION_SCALE;
        if input.left().pressed {
            body.yaw_by(turn);
        }
        if input.right().pressed {
            body.yaw_by(-turn);
        }

        let grounded = self.grounded.is_grounded();
        if let Some(motion) = self.intent.motion().filter(|_| grounded) {
            self.request_clip(ground_clip(motion), clips);
        }
    }

    /// Physics tick: resample speed, apply at most one force per admitted
    /// intent, then clear all intent.
    pub fn on_physics_tick<B: CharacterBody>(&mut self, dt: f32, body: &mut B) {
        self.settle_climb(body);
        self.gate.sample(body.speed());
        let forward = body.forward();

        match self.intent.motion() {
            Some(Motion::Walk) => {
                if self.gate.may_walk() {
                    body.add_acceleration(forward * self.tuning.walk_acceleration, dt);
                }
                self.intent.cancel_walk();
            }
            Some(Motion::Run) => {
                if self.gate.may_run() {
                    body.add_acceleration(forward * self.tuning.run_acceleration, dt);
                }
                self.intent.cancel_run();
            }
            Some(Motion::Backward) => {
                if self.gate.may_backward() {
                    body.add_acceleration(-forward * self.tuning.backward_acceleration, dt);
                }
                self.intent.cancel_backward();
            }
            Some(Motion::Idle) => self.intent.cancel_idle(),
            None => {}
        }

        if self.intent.is_jump() {
            let up = body.up();
            body.set_gravity(true);
            body.add_acceleration(up * self.tuning.jump_power * JUMP_SCALE, dt);
            self.intent.cancel_jump();
        }
    }

    /// A collision began. Ground and the top of a block land the character.
    pub fn on_collision_begin<B: CharacterBody>(&mut self, contact: Contact, body: &mut B) {
        let feet_y = body.position().y;
        if contact.surface == SurfaceKind::Block && climb::is_side_hit(feet_y, contact.top) {
            debug!(
                "Side hit on block (feet={:.2}, top={:.2}), grounded unchanged",
                feet_y, contact.top
            );
            return;
        }

        if !self.grounded.is_grounded() {
            debug!("Landed on {:?} at y={:.2}", contact.surface, feet_y);
        }
        self.grounded.set(true);
        body.set_gravity(true);
    }

    /// A collision is ongoing. A block rising above the feet may push or
    /// lift a blocked character, at most once per physics tick.
    pub fn on_collision_stay<B: CharacterBody>(
        &mut self,
        dt: f32,
        contact: Contact,
        body: &mut B,
    ) -> ClimbMove {
        if contact.surface != SurfaceKind::Block || self.tick_move != ClimbMove::None {
            return ClimbMove::None;
        }
        if !(self.held.forward || self.held.backward) || !self.gate.is_frozen() {
            return ClimbMove::None;
        }
        if !climb::is_blocking(body.position().y, contact.top) {
            return ClimbMove::None;
        }

        let applied = climb::resolve(
            body,
            self.grounded.is_grounded(),
            self.tuning.climb_speed,
            self.tuning.slide_speed,
            dt,
        );
        if let ClimbMove::Vertical(_) = applied {
            self.climb_top = Some(contact.top);
        }
        if applied != ClimbMove::None {
            debug!("Blocked by block, resolved with {:?}", applied);
        }
        self.tick_move = applied;
        applied
    }

    /// A collision ended. Leaving a block restores gravity a climb may have
    /// switched off.
    pub fn on_collision_end<B: CharacterBody>(&mut self, contact: Contact, body: &mut B) {
        if contact.surface == SurfaceKind::Block {
            body.set_gravity(true);
        }
    }

    /// Close out a climb that made no vertical progress last tick: gravity
    /// comes back, and feet at the block top count as a landing.
    fn settle_climb<B: CharacterBody>(&mut self, body: &mut B) {
        let last = std::mem::replace(&mut self.tick_move, ClimbMove::None);
        if let ClimbMove::Vertical(_) = last {
            return;
        }
        let Some(top) = self.climb_top.take() else {
            return;
        };

        body.set_gravity(true);
        let feet_y = body.position().y;
        if climb::is_side_hit(feet_y, top) {
            debug!("Climb stopped below the ledge at y={:.2}", feet_y);
        } else {
            debug!("Climbed onto block at y={:.2}", feet_y);
            self.grounded.set(true);
        }
    }

    /// Looping clips are only requested on a change; one-shot clips replay.
    fn request_clip<C: ClipPlayer>(&mut self, clip: LocomotionClip, clips: &mut C) {
        if self.clip == Some(clip) && clip.is_looping() {
            return;
        }
        self.clip = Some(clip);
        clips.play(clip);
    }
}

fn ground_clip(motion: Motion) -> LocomotionClip {
    match motion {
        Motion::Idle => LocomotionClip::Default,
        Motion::Walk | Motion::Backward => LocomotionClip::Walk,
        Motion::Run => LocomotionClip::Run,
    }
}
