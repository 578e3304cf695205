//! Movement domain: host capabilities the locomotion driver depends on.
//!
//! The driver never talks to the engine directly. The host hands it an input
//! snapshot, a handle to the character's rigid body and a clip player each
//! time it calls one of the driver entry points.

use bevy::prelude::*;

/// Level and edge state of one digital button for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool,
    pub just_pressed: bool,
}

impl ButtonState {
    pub const RELEASED: Self = Self {
        pressed: false,
        just_pressed: false,
    };

    /// Held since an earlier frame.
    pub const HELD: Self = Self {
        pressed: true,
        just_pressed: false,
    };

    /// Went down this frame.
    pub const PRESSED: Self = Self {
        pressed: true,
        just_pressed: true,
    };
}

/// Four-way digital pad.
pub trait DirectionalInput {
    fn up(&self) -> ButtonState;
    fn down(&self) -> ButtonState;
    fn left(&self) -> ButtonState;
    fn right(&self) -> ButtonState;
}

/// Action buttons used by locomotion.
pub trait ActionButtons {
    fn jump(&self) -> ButtonState;
    fn run_modifier(&self) -> ButtonState;
}

/// The character's rigid body as seen by the driver.
///
/// `position` is the character's feet. `set_position` is a kinematic
/// override: it moves the body without going through force integration and
/// is only used by the climb resolver.
pub trait CharacterBody {
    /// Magnitude of the linear velocity.
    fn speed(&self) -> f32;
    fn forward(&self) -> Vec3;
    /// The body's local up axis in world space.
    fn up(&self) -> Vec3;
    /// Acceleration-mode force, integrated over `dt`.
    fn add_acceleration(&mut self, acceleration: Vec3, dt: f32);
    fn set_gravity(&mut self, enabled: bool);
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Turn about the vertical axis. Positive turns left.
    fn yaw_by(&mut self, degrees: f32);
}

/// Animation clips the driver can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionClip {
    Default,
    Walk,
    Run,
    Jump,
}

impl LocomotionClip {
    pub fn name(self) -> &'static str {
        match self {
            LocomotionClip::Default => "Default",
            LocomotionClip::Walk => "Walk",
            LocomotionClip::Run => "Run",
            LocomotionClip::Jump => "Jump",
        }
    }

    /// Ground clips loop; `Jump` plays once per request.
    pub fn is_looping(self) -> bool {
        !matches!(self, LocomotionClip::Jump)
    }
}

/// Fire-and-forget clip playback.
pub trait ClipPlayer {
    fn play(&mut self, clip: LocomotionClip);
}

/// What the other side of a collision is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Block,
}

/// Collision notification payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub surface: SurfaceKind,
    /// World height of the other object's top face.
    pub top: f32,
}

impl Contact {
    pub fn ground(top: f32) -> Self {
        Self {
            surface: SurfaceKind::Ground,
            top,
        }
    }

    pub fn block(top: f32) -> Self {
        Self {
            surface: SurfaceKind::Block,
            top,
        }
    }
}
