use avian3d::prelude::*;
use bevy::prelude::*;

use cubeclimb::{animation, content, core, movement};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cubeclimb".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            animation::ClipPlaybackPlugin,
        ))
        .run();
}
