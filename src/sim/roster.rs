//! Ordered creature registry.
//!
//! Registry order is significant: catches inside one tick are resolved in it.

use bevy::math::IVec2;

use super::creature::{Creature, CreatureKind};

/// Reference spawn list: kind and top-left position.
pub const OCEAN_SPAWNS: [(CreatureKind, IVec2); 6] = [
    (CreatureKind::Harmless, IVec2::new(100, 200)),
    (CreatureKind::Harmless, IVec2::new(500, 420)),
    (CreatureKind::MinorPenalty, IVec2::new(400, 170)),
    (CreatureKind::MinorPenalty, IVec2::new(400, 400)),
    (CreatureKind::MajorPenalty, IVec2::new(250, 300)),
    (CreatureKind::Decorative, IVec2::new(250, 300)),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    pub fn ocean() -> Self {
        OCEAN_SPAWNS
            .into_iter()
            .map(|(kind, pos)| Creature::new(kind, pos))
            .collect()
    }

    pub fn advance_all(&mut self, bounds: IVec2) {
        for creature in &mut self.creatures {
            creature.advance(bounds);
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.creatures.iter_mut()
    }

    /// Creatures still in play, with their registry index.
    pub fn live(&self) -> impl Iterator<Item = (usize, &Creature)> {
        self.creatures.iter().enumerate().filter(|(_, c)| !c.is_retired())
    }
}

impl FromIterator<Creature> for Roster {
    fn from_iter<I: IntoIterator<Item = Creature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
