use bevy::ecs::message::Messages;
use bevy::math::IVec2;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;
use crate::sim::{Creature, CreatureKind, Roster, Score};

fn fish_on_hook() -> Creature {
    Creature::with_motion(
        CreatureKind::Harmless,
        IVec2::new(290, 110),
        IVec2::new(10, 10),
        IVec2::ZERO,
    )
}

fn world_with(session: Session) -> World {
    let mut world = World::new();
    world.insert_resource(OceanSession(session));
    world.init_resource::<NextState<GameState>>();
    world.init_resource::<Messages<SessionWon>>();
    world
}

fn drain_won(world: &mut World) -> Vec<SessionWon> {
    world.resource_mut::<Messages<SessionWon>>().drain().collect()
}

#[test]
fn plugin_inserts_reference_session() {
    let mut app = App::new();
    crate::plugins::core::plugin(&mut app);
    super::plugin(&mut app);

    let session = app.world().resource::<OceanSession>();
    assert_eq!(session.roster().iter().count(), 6);
    assert_eq!(session.hook().y(), 100);
    assert_eq!(session.score().get(), 0);
}

#[test]
fn tick_without_catch_stays_in_fishing() {
    let mut world = world_with(Session::new(&Tunables::default()));

    run_system_once(&mut world, drive_tick);

    assert_eq!(world.resource::<OceanSession>().ticks(), 1);
    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
    assert!(drain_won(&mut world).is_empty());
}

#[test]
fn catch_below_threshold_keeps_ticking() {
    let roster = Roster::new(vec![fish_on_hook()]);
    let mut world = world_with(Session::with_roster(&Tunables::default(), roster));

    run_system_once(&mut world, drive_tick);
    run_system_once(&mut world, drive_tick);

    let session = world.resource::<OceanSession>();
    assert_eq!(session.score().get(), 1);
    assert_eq!(session.ticks(), 2);
    assert!(drain_won(&mut world).is_empty());
}

#[test]
fn win_sets_next_state_and_writes_message() {
    let roster = Roster::new(vec![fish_on_hook()]);
    let mut session = Session::with_roster(&Tunables::default(), roster);
    session.set_score(Score::new(4));
    let mut world = world_with(session);

    run_system_once(&mut world, drive_tick);

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::Won)
    ));

    let won = drain_won(&mut world);
    assert_eq!(won.len(), 1);
    assert_eq!(won[0].score, 5);
    assert_eq!(won[0].ticks, 1);
    assert_eq!(won[0].title, WIN_TITLE);
    assert_eq!(won[0].message, WIN_MESSAGE);
}

#[test]
fn ticks_after_win_are_not_counted() {
    let roster = Roster::new(vec![fish_on_hook()]);
    let mut session = Session::with_roster(&Tunables::default(), roster);
    session.set_score(Score::new(4));
    let mut world = world_with(session);

    run_system_once(&mut world, drive_tick);
    drain_won(&mut world);

    // Even if the driver were invoked again, the session refuses to advance.
    run_system_once(&mut world, drive_tick);
    assert_eq!(world.resource::<OceanSession>().ticks(), 1);
    assert!(drain_won(&mut world).is_empty());
}
