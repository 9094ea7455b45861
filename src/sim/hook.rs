//! Hook controller.
//!
//! Only discrete commands move the hook. The guards compare against the
//! current position before stepping, so a step that does not divide the travel
//! range evenly can overshoot `0` by less than one step.

use bevy::math::{IRect, IVec2};
use bevy::prelude::Message;

use crate::common::tunables::Tunables;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookCommand {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hook {
    x: i32,
    y: i32,
    size: IVec2,
    step: i32,
    max_y: i32,
}

impl Hook {
    pub fn new(tunables: &Tunables) -> Self {
        Self {
            x: tunables.hook_x,
            y: tunables.hook_start_y,
            size: tunables.hook_size,
            step: tunables.hook_step,
            max_y: tunables.window_size.y - tunables.hook_size.y,
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Apply one command. Returns whether the hook moved.
    pub fn press(&mut self, command: HookCommand) -> bool {
        match command {
            HookCommand::Up if self.y > 0 => {
                self.y -= self.step;
                true
            }
            HookCommand::Down if self.y < self.max_y => {
                self.y += self.step;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> IRect {
        let min = IVec2::new(self.x, self.y);
        IRect {
            min,
            max: min + self.size,
        }
    }
}
