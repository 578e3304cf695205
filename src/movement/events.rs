//! Movement domain: messages emitted by locomotion.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::capabilities::{ClipPlayer, LocomotionClip};

/// Request to play a locomotion clip on an entity.
#[derive(Debug, Clone, Copy)]
pub struct PlayClipEvent {
    pub entity: Entity,
    pub clip: LocomotionClip,
}

impl Message for PlayClipEvent {}

/// Clip player that forwards requests as [`PlayClipEvent`] messages.
pub(crate) struct ClipMessages<'a, 'w> {
    pub entity: Entity,
    pub writer: &'a mut MessageWriter<'w, PlayClipEvent>,
}

impl ClipPlayer for ClipMessages<'_, '_> {
    fn play(&mut self, clip: LocomotionClip) {
        self.writer.write(PlayClipEvent {
            entity: self.entity,
            clip,
        });
    }
}
