mod common;

use bevy::prelude::*;
use go_fishing::common::state::GameState;
use go_fishing::plugins::session::OceanSession;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(common::state(&app), GameState::Fishing);
    assert!(app.world().get_resource::<OceanSession>().is_some());
}

#[test]
fn reference_ocean_runs_without_catches_at_start_depth() {
    let mut app = common::app_headless();
    app.update();

    for _ in 0..200 {
        common::run_tick(&mut app);
    }
    app.update();

    let session = common::session(&app);
    assert_eq!(session.ticks(), 200);
    assert_eq!(session.score().get(), 0);
    assert_eq!(common::state(&app), GameState::Fishing);
}
