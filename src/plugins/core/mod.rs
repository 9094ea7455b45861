//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Fill shown wherever the background image does not cover.
pub const OCEAN_BLUE: Color = Color::srgb(0.0, 100.0 / 255.0, 200.0 / 255.0);

pub fn plugin(app: &mut App) {
    let tunables = Tunables::default();
    app.insert_resource(Time::<Fixed>::from_duration(tunables.tick_interval));
    app.insert_resource(tunables);
    app.insert_resource(ClearColor(OCEAN_BLUE));
}
