//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod hook;
pub mod session;
pub mod victory;

// Render-only
pub mod scene;

/// Register gameplay plugins that work in headless tests.
///
/// `core` goes first: later plugins read `Tunables` while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    session::plugin(app);
    hook::plugin(app);
    victory::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    scene::plugin(app);
}
