//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{
    handle_collision_ends, handle_collision_starts, resolve_block_contacts,
};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_locomotion_forces, drive_locomotion, require_rigid_body};
