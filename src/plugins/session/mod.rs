//! Session plugin: owns the simulation and drives it at a fixed cadence.
//!
//! ```text
//! FixedUpdate (50 ms, GameState::Fishing only)
//!   drive_tick
//!     - Session::tick: advance all creatures, then resolve catches
//!     - ResMut<OceanSession> write marks the resource changed (redraw request)
//!     - on win: NextState(Won) + SessionWon message
//! ```
//!
//! Leaving `Fishing` stops the driver for good: nothing transitions back.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::sim::{Session, TickOutcome};

pub const WIN_TITLE: &str = "Game Over";
pub const WIN_MESSAGE: &str = "Congrats! You've reached the max points!";

/// The one live session. Presentation reads it through `Res`.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct OceanSession(pub Session);

/// Terminal notification: the session is over and should be closed.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct SessionWon {
    pub score: u32,
    pub ticks: u64,
    pub title: &'static str,
    pub message: &'static str,
}

pub fn plugin(app: &mut App) {
    let session = Session::new(app.world().resource::<Tunables>());
    app.insert_resource(OceanSession(session))
        .add_message::<SessionWon>()
        .add_systems(
            FixedUpdate,
            drive_tick.run_if(in_state(GameState::Fishing)),
        );
}

pub fn drive_tick(
    mut session: ResMut<OceanSession>,
    mut next_state: ResMut<NextState<GameState>>,
    mut won: MessageWriter<SessionWon>,
) {
    let report = session.tick();

    for catch in &report.catches {
        debug!(
            index = catch.index,
            kind = ?catch.kind,
            delta = catch.delta,
            score = catch.score.get(),
            "creature caught"
        );
    }

    if report.outcome != TickOutcome::Won {
        return;
    }

    let score = session.score().get();
    let ticks = session.ticks();
    let remaining = session.roster().live().count();
    info!(score, ticks, remaining, "win threshold reached, halting session");

    next_state.set(GameState::Won);
    won.write(SessionWon {
        score,
        ticks,
        title: WIN_TITLE,
        message: WIN_MESSAGE,
    });
}

#[cfg(test)]
mod tests;
