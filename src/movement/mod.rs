//! Movement domain: locomotion plugin wiring and public exports.

mod capabilities;
mod climb;
mod components;
pub(crate) mod dev;
mod driver;
mod events;
mod grounded;
mod intent;
mod resources;
mod speed_gate;
mod systems;


pub use capabilities::{
    ActionButtons, ButtonState, CharacterBody, ClipPlayer, Contact, DirectionalInput,
    LocomotionClip, SurfaceKind,
};
pub use climb::{ClimbMove, ClimbPath, Direction};
pub use components::{Block, FootOffset, Ground, Locomotion, Player};
pub use driver::LocomotionController;
pub use events::PlayClipEvent;
pub use intent::{IntentState, Motion};
pub use resources::{LocomotionTuning, PadInput};
pub use speed_gate::SpeedGate;

use bevy::prelude::*;

use crate::movement::dev::{spawn_player, spawn_test_room};
use crate::movement::systems::{
    apply_locomotion_forces, drive_locomotion, handle_collision_ends, handle_collision_starts,
    read_input, require_rigid_body, resolve_block_contacts,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<PadInput>()
            .add_message::<PlayClipEvent>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (
                    require_rigid_body,
                    read_input,
                    handle_collision_starts,
                    handle_collision_ends,
                    drive_locomotion,
                )
                    .chain(),
            )
            // Speed must be resampled before any block contact is judged frozen
            .add_systems(
                FixedUpdate,
                (apply_locomotion_forces, resolve_block_contacts).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::log_locomotion_state);
    }
}
