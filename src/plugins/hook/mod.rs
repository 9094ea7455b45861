//! Hook plugin.
//!
//! Pipeline (Update, GameState::Fishing only):
//! - producer: keyboard presses -> `HookCommand` messages
//! - consumer: `HookCommand` -> `Session::press`
//!
//! Input is independent of the fixed tick. Every press event counts, including
//! the host's auto-repeat presses.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::session::OceanSession;
use crate::sim::HookCommand;

pub fn plugin(app: &mut App) {
    app.add_message::<KeyboardInput>()
        .add_message::<HookCommand>()
        .add_systems(
            Update,
            (gather_hook_commands, apply_hook_commands)
                .chain()
                .run_if(in_state(GameState::Fishing)),
        );
}

#[inline]
fn command_for(key: KeyCode) -> Option<HookCommand> {
    match key {
        KeyCode::ArrowUp => Some(HookCommand::Up),
        KeyCode::ArrowDown => Some(HookCommand::Down),
        _ => None,
    }
}

pub fn gather_hook_commands(
    mut keys: MessageReader<KeyboardInput>,
    mut commands: MessageWriter<HookCommand>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        if let Some(command) = command_for(key.key_code) {
            commands.write(command);
        }
    }
}

/// Only touches the session when a command arrived, so idle frames do not
/// trigger a redraw.
pub fn apply_hook_commands(
    mut commands: MessageReader<HookCommand>,
    mut session: ResMut<OceanSession>,
) {
    for command in commands.read() {
        if !session.press(*command) {
            trace!(?command, y = session.hook().y(), "hook at travel limit");
        }
    }
}

#[cfg(test)]
mod tests;
