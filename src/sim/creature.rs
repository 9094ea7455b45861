//! Sea creatures and their per-kind constants.
//!
//! Coordinates are screen space: origin at the window's top-left, y grows down.

use bevy::math::{IRect, IVec2};

/// Where caught creatures are parked. Far enough above the window that no box
/// anchored there can reach `y = 0`.
pub const OFFSTAGE_Y: i32 = -10_000;

/// Gameplay role of a creature. Scoring reads this directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    Harmless,
    MinorPenalty,
    MajorPenalty,
    Decorative,
}

/// Static data shared by every creature of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindProfile {
    pub species: &'static str,
    pub sprite: &'static str,
    pub size: IVec2,
    pub velocity: IVec2,
    pub score_delta: i32,
}

const PROFILES: [KindProfile; 4] = [
    KindProfile {
        species: "Fish",
        sprite: "sprites/fish.png",
        size: IVec2::new(60, 40),
        velocity: IVec2::new(-10, 0),
        score_delta: 1,
    },
    KindProfile {
        species: "Jellyfish",
        sprite: "sprites/jellyfish.png",
        size: IVec2::new(100, 60),
        velocity: IVec2::new(6, 0),
        score_delta: -1,
    },
    KindProfile {
        species: "Shark",
        sprite: "sprites/shark.png",
        size: IVec2::new(400, 100),
        velocity: IVec2::new(-5, 0),
        score_delta: -1,
    },
    KindProfile {
        species: "Oscar fish",
        sprite: "sprites/oscar_fish.png",
        size: IVec2::new(800, 100),
        velocity: IVec2::new(-1, 0),
        score_delta: 0,
    },
];

impl CreatureKind {
    pub const ALL: [CreatureKind; 4] = [
        CreatureKind::Harmless,
        CreatureKind::MinorPenalty,
        CreatureKind::MajorPenalty,
        CreatureKind::Decorative,
    ];

    #[inline]
    pub fn profile(self) -> &'static KindProfile {
        match self {
            CreatureKind::Harmless => &PROFILES[0],
            CreatureKind::MinorPenalty => &PROFILES[1],
            CreatureKind::MajorPenalty => &PROFILES[2],
            CreatureKind::Decorative => &PROFILES[3],
        }
    }

    #[inline]
    pub fn score_delta(self) -> i32 {
        self.profile().score_delta
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    kind: CreatureKind,
    position: IVec2,
    size: IVec2,
    velocity: IVec2,
    retired: bool,
}

impl Creature {
    /// A creature with its kind's size and speed.
    pub fn new(kind: CreatureKind, position: IVec2) -> Self {
        let profile = kind.profile();
        Self::with_motion(kind, position, profile.size, profile.velocity)
    }

    /// A creature with an explicit size and velocity.
    pub fn with_motion(kind: CreatureKind, position: IVec2, size: IVec2, velocity: IVec2) -> Self {
        Self {
            kind,
            position,
            size,
            velocity,
            retired: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> CreatureKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.size
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    #[inline]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// One motion step inside `bounds` (width, height).
    ///
    /// Horizontal travel loops: leaving past the right edge re-enters from the
    /// left and vice versa. Vertical travel reflects `dy` at either bound.
    pub fn advance(&mut self, bounds: IVec2) {
        self.position += self.velocity;

        if self.position.x > bounds.x {
            self.position.x = -self.size.x;
        }
        if self.position.x < -self.size.x {
            self.position.x = bounds.x;
        }

        let floor = bounds.y - self.size.y;
        if self.position.y < 0 || self.position.y > floor {
            self.velocity.y = -self.velocity.y;
            // Parked creatures oscillate around OFFSTAGE_Y instead.
            if !self.retired {
                self.position.y = self.position.y.clamp(0, floor.max(0));
            }
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> IRect {
        IRect {
            min: self.position,
            max: self.position + self.size,
        }
    }

    /// Take the creature out of play. It keeps moving, parked off-screen.
    pub fn retire(&mut self) {
        self.position.y = OFFSTAGE_Y;
        self.retired = true;
    }
}
