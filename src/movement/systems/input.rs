//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ButtonState, PadInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<PadInput>,
) {
    // Keyboard and every connected pad feed the same logical buttons
    let sample = |keys: [KeyCode; 2], button: GamepadButton| ButtonState {
        pressed: keyboard.any_pressed(keys) || gamepads.iter().any(|pad| pad.pressed(button)),
        just_pressed: keyboard.any_just_pressed(keys)
            || gamepads.iter().any(|pad| pad.just_pressed(button)),
    };

    input.up = sample([KeyCode::ArrowUp, KeyCode::KeyW], GamepadButton::DPadUp);
    input.down = sample([KeyCode::ArrowDown, KeyCode::KeyS], GamepadButton::DPadDown);
    input.left = sample([KeyCode::ArrowLeft, KeyCode::KeyA], GamepadButton::DPadLeft);
    input.right = sample([KeyCode::ArrowRight, KeyCode::KeyD], GamepadButton::DPadRight);
    input.jump = sample([KeyCode::Space, KeyCode::KeyK], GamepadButton::South);
    input.run = sample([KeyCode::ShiftLeft, KeyCode::ShiftRight], GamepadButton::East);
}
