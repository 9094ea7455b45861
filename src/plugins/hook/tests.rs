use bevy::ecs::message::Messages;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::sim::Session;

fn key(key_code: KeyCode, logical_key: Key, state: ButtonState) -> KeyboardInput {
    KeyboardInput {
        key_code,
        logical_key,
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    }
}

fn world() -> World {
    let mut world = World::new();
    world.insert_resource(OceanSession(Session::new(&Tunables::default())));
    world.init_resource::<Messages<KeyboardInput>>();
    world.init_resource::<Messages<HookCommand>>();
    world
}

#[test]
fn arrow_presses_become_commands() {
    let mut world = world();
    world.write_message(key(KeyCode::ArrowDown, Key::ArrowDown, ButtonState::Pressed));
    world.write_message(key(KeyCode::ArrowDown, Key::ArrowDown, ButtonState::Released));
    world.write_message(key(KeyCode::KeyW, Key::Character("w".into()), ButtonState::Pressed));
    world.write_message(key(KeyCode::ArrowUp, Key::ArrowUp, ButtonState::Pressed));

    run_system_once(&mut world, gather_hook_commands);

    let commands: Vec<HookCommand> = world
        .resource_mut::<Messages<HookCommand>>()
        .drain()
        .collect();
    assert_eq!(commands, vec![HookCommand::Down, HookCommand::Up]);
}

#[test]
fn commands_move_the_hook() {
    let mut world = world();
    for _ in 0..3 {
        world.write_message(HookCommand::Down);
    }
    world.write_message(HookCommand::Up);

    run_system_once(&mut world, apply_hook_commands);

    assert_eq!(world.resource::<OceanSession>().hook().y(), 120);
}

#[test]
fn commands_at_travel_limit_are_ignored() {
    let mut world = world();
    for _ in 0..15 {
        world.write_message(HookCommand::Up);
    }

    run_system_once(&mut world, apply_hook_commands);

    assert_eq!(world.resource::<OceanSession>().hook().y(), 0);
}
