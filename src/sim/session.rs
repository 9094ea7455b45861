//! Session: the single owner of simulation state.

use bevy::math::IVec2;

use super::hook::{Hook, HookCommand};
use super::roster::Roster;
use super::scoring::{self, Catch, CatchOutcome, Score};
use crate::common::tunables::Tunables;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Fishing,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick processed, play continues.
    Running,
    /// Tick processed and the threshold was reached during it.
    Won,
    /// Session already won; nothing was simulated.
    Halted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub catches: Vec<Catch>,
}

impl TickReport {
    fn halted() -> Self {
        Self {
            outcome: TickOutcome::Halted,
            catches: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    roster: Roster,
    hook: Hook,
    score: Score,
    bounds: IVec2,
    win_threshold: u32,
    phase: Phase,
    ticks: u64,
}

impl Session {
    /// Fresh session with the reference ocean roster.
    pub fn new(tunables: &Tunables) -> Self {
        Self::with_roster(tunables, Roster::ocean())
    }

    pub fn with_roster(tunables: &Tunables, roster: Roster) -> Self {
        Self {
            roster,
            hook: Hook::new(tunables),
            score: Score::ZERO,
            bounds: tunables.window_size,
            win_threshold: tunables.win_threshold,
            phase: Phase::Fishing,
            ticks: 0,
        }
    }

    /// Advance every creature, then resolve catches against the hook.
    pub fn tick(&mut self) -> TickReport {
        if self.phase == Phase::Won {
            return TickReport::halted();
        }

        self.ticks += 1;
        self.roster.advance_all(self.bounds);

        let mut catches = Vec::new();
        let outcome = match scoring::resolve_catches(
            self.hook.bounding_box(),
            &mut self.roster,
            &mut self.score,
            self.win_threshold,
            &mut catches,
        ) {
            CatchOutcome::Continue => TickOutcome::Running,
            CatchOutcome::Won => {
                self.phase = Phase::Won;
                TickOutcome::Won
            }
        };

        TickReport { outcome, catches }
    }

    /// Route one hook command. Returns whether the hook moved.
    ///
    /// A won session ignores commands, even ones handled in the frame the
    /// win happened in, before the game state has switched.
    pub fn press(&mut self, command: HookCommand) -> bool {
        if self.is_won() {
            return false;
        }
        self.hook.press(command)
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn hook(&self) -> &Hook {
        &self.hook
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Ticks actually simulated. Halted calls after a win are not counted.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn bounds(&self) -> IVec2 {
        self.bounds
    }

    #[inline]
    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}
