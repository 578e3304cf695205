//! Clip playback driven by locomotion clip requests.
//!
//! Locomotion only decides which clip to ask for. This module records what is
//! playing on each entity and for how long; a renderer hooks in from here.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{LocomotionClip, PlayClipEvent};

/// Clip currently playing on an entity.
#[derive(Component, Debug, Default)]
pub struct ClipPlayback {
    pub clip: Option<LocomotionClip>,
    /// Previous clip (for detecting transitions).
    pub previous: Option<LocomotionClip>,
    /// Seconds since the current clip started.
    pub elapsed: f32,
}

impl ClipPlayback {
    /// Switch clips. A looping clip that is already playing keeps going;
    /// anything else restarts from the beginning.
    pub fn play(&mut self, clip: LocomotionClip) -> bool {
        if self.clip == Some(clip) && clip.is_looping() {
            return false;
        }
        self.previous = self.clip;
        self.clip = Some(clip);
        self.elapsed = 0.0;
        true
    }
}

pub(crate) fn apply_clip_requests(
    mut clip_events: MessageReader<PlayClipEvent>,
    mut query: Query<&mut ClipPlayback>,
) {
    for event in clip_events.read() {
        let Ok(mut playback) = query.get_mut(event.entity) else {
            warn!(
                "Clip {} requested for {} without ClipPlayback",
                event.clip.name(),
                event.entity
            );
            continue;
        };

        if playback.play(event.clip) {
            debug!(
                "Playing clip {} on {} (was {:?})",
                event.clip.name(),
                event.entity,
                playback.previous.map(LocomotionClip::name)
            );
        }
    }
}

pub(crate) fn advance_clip_playback(time: Res<Time>, mut query: Query<&mut ClipPlayback>) {
    let dt = time.delta_secs();
    for mut playback in &mut query {
        if playback.clip.is_some() {
            playback.elapsed += dt;
        }
    }
}

pub struct ClipPlaybackPlugin;

impl Plugin for ClipPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (apply_clip_requests, advance_clip_playback).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looping_clip_keeps_playing() {
        let mut playback = ClipPlayback::default();
        assert!(playback.play(LocomotionClip::Walk));
        playback.elapsed = 1.5;

        assert!(!playback.play(LocomotionClip::Walk));
        assert_eq!(playback.elapsed, 1.5);

        assert!(playback.play(LocomotionClip::Jump));
        assert_eq!(playback.previous, Some(LocomotionClip::Walk));
        assert_eq!(playback.elapsed, 0.0);
    }

    #[test]
    fn test_jump_restarts_when_requested_again() {
        let mut playback = ClipPlayback::default();
        assert!(playback.play(LocomotionClip::Jump));
        playback.elapsed = 0.4;

        assert!(playback.play(LocomotionClip::Jump));
        assert_eq!(playback.clip, Some(LocomotionClip::Jump));
        assert_eq!(playback.elapsed, 0.0);
    }

    #[test]
    fn test_only_ground_clips_loop() {
        assert!(LocomotionClip::Default.is_looping());
        assert!(LocomotionClip::Walk.is_looping());
        assert!(LocomotionClip::Run.is_looping());
        assert!(!LocomotionClip::Jump.is_looping());
    }
}
