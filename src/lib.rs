//! Physics-driven character locomotion for unit-grid block worlds.
//!
//! Each domain is a Bevy plugin; the locomotion core in [`movement`] is plain
//! Rust driven through the capability traits it defines.

pub mod animation;
pub mod content;
pub mod core;
pub mod movement;
