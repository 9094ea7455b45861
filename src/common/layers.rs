//! Draw layers.
//!
//! Sprites share one camera, so painter order is encoded as translation `z`.
//! Sea life is painted over the hook and line.

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Background,
    Hook,
    Line,
    Fisherman,
    SeaLife,
}

impl Layer {
    #[inline]
    pub fn z(self) -> f32 {
        match self {
            Layer::Background => 0.0,
            Layer::Hook => 1.0,
            Layer::Line => 2.0,
            Layer::Fisherman => 3.0,
            Layer::SeaLife => 4.0,
        }
    }
}
