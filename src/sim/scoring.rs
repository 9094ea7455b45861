//! Collision & scoring pass.
//!
//! One pass per tick, in registry order. A catch applies the kind's delta,
//! parks the creature off-screen, then checks the threshold. Reaching it ends
//! the pass immediately: later creatures are not examined.

use bevy::math::IRect;

use super::creature::CreatureKind;
use super::roster::Roster;

/// Score that floors at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    #[inline]
    pub fn new(points: u32) -> Self {
        Self(points)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Add a signed delta. Decrements below zero stop at zero.
    #[inline]
    pub fn apply(&mut self, delta: i32) {
        self.0 = self.0.saturating_add_signed(delta);
    }

    #[inline]
    pub fn reached(self, threshold: u32) -> bool {
        self.0 >= threshold
    }
}

/// One creature caught by the hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catch {
    pub index: usize,
    pub kind: CreatureKind,
    pub delta: i32,
    pub score: Score,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatchOutcome {
    Continue,
    Won,
}

#[inline]
pub fn overlaps(a: IRect, b: IRect) -> bool {
    !a.intersect(b).is_empty()
}

/// Resolve every live creature against the hook box.
///
/// Caught creatures are appended to `catches` in the order they were resolved.
pub fn resolve_catches(
    hook: IRect,
    roster: &mut Roster,
    score: &mut Score,
    win_threshold: u32,
    catches: &mut Vec<Catch>,
) -> CatchOutcome {
    for (index, creature) in roster.iter_mut().enumerate() {
        if creature.is_retired() || !overlaps(creature.bounding_box(), hook) {
            continue;
        }

        let kind = creature.kind();
        let delta = kind.score_delta();
        score.apply(delta);
        creature.retire();

        catches.push(Catch {
            index,
            kind,
            delta,
            score: *score,
        });

        if score.reached(win_threshold) {
            return CatchOutcome::Won;
        }
    }

    CatchOutcome::Continue
}
