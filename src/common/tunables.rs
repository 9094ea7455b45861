//! Tunable gameplay constants.
//!
//! The rules are fixed: `Default` carries the reference values and nothing
//! overrides them at runtime.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Drawing surface in pixels. Simulation bounds are the same size.
    pub window_size: IVec2,
    pub tick_interval: Duration,
    pub hook_x: i32,
    pub hook_size: IVec2,
    pub hook_start_y: i32,
    pub hook_step: i32,
    pub win_threshold: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            window_size: IVec2::new(600, 600),
            tick_interval: Duration::from_millis(50),
            hook_x: 290,
            hook_size: IVec2::new(20, 40),
            hook_start_y: 100,
            hook_step: 10,
            win_threshold: 5,
        }
    }
}
