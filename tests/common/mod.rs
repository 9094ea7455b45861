//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `go_fishing::game::configure_headless` to install gameplay plugins.
//!
//! Virtual time is paused, so `FixedUpdate` never fires on its own. Tests step
//! the simulation explicitly with `run_tick`.

#![allow(dead_code)]

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use go_fishing::common::state::GameState;
use go_fishing::plugins::session::OceanSession;
use go_fishing::sim::Session;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    go_fishing::game::configure_headless(&mut app);
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app
}

/// Swap in a custom session, then run one frame so states are initialized.
pub fn app_with_session(session: Session) -> App {
    let mut app = app_headless();
    app.world_mut().insert_resource(OceanSession(session));
    app.update();
    app
}

pub fn run_tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn session(app: &App) -> &Session {
    &app.world().resource::<OceanSession>().0
}

pub fn press(app: &mut App, key_code: KeyCode, logical_key: Key) {
    app.world_mut().write_message(KeyboardInput {
        key_code,
        logical_key,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}
