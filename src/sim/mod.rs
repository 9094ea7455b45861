//! Deterministic simulation module.
//!
//! Everything that decides the outcome of a session lives here:
//! - creature motion (wrap + bounce)
//! - hook movement
//! - collision & scoring, win detection
//!
//! No ECS systems, assets or rendering. Integer screen coordinates only, so a
//! session replays identically from the same initial state and command order.

pub mod creature;
pub mod hook;
pub mod roster;
pub mod scoring;
pub mod session;

pub use creature::{Creature, CreatureKind, KindProfile, OFFSTAGE_Y};
pub use hook::{Hook, HookCommand};
pub use roster::{OCEAN_SPAWNS, Roster};
pub use scoring::{Catch, CatchOutcome, Score, overlaps, resolve_catches};
pub use session::{Session, TickOutcome, TickReport};
