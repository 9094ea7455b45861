//! Session -> sprite sync.
//!
//! The session works in screen space (top-left origin, y down). Bevy's 2D
//! camera is centered with y up, so every box is converted here.

use bevy::prelude::*;

use super::{FishingLine, HookSprite, LINE_TOP, ScoreText, SeaLifeSprite};
use crate::common::layers::Layer;
use crate::plugins::session::OceanSession;

/// Center of a screen-space box, in world space.
pub fn screen_to_world(top_left: IVec2, size: IVec2, window: IVec2, layer: Layer) -> Vec3 {
    let center = top_left.as_vec2() + size.as_vec2() * 0.5;
    let half = window.as_vec2() * 0.5;
    Vec3::new(center.x - half.x, half.y - center.y, layer.z())
}

/// Top y and length of the line between the rod tip and the hook.
pub fn line_span(hook_y: i32) -> (i32, i32) {
    (LINE_TOP.y.min(hook_y), (hook_y - LINE_TOP.y).abs())
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

#[inline]
pub fn visibility_for(retired: bool) -> Visibility {
    if retired {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    }
}

pub fn sync_sea_life(
    session: Res<OceanSession>,
    mut q: Query<(&SeaLifeSprite, &mut Transform, &mut Visibility)>,
) {
    let window = session.bounds();
    for (tag, mut tf, mut vis) in &mut q {
        let Some(creature) = session.roster().get(tag.0) else {
            continue;
        };
        tf.translation = screen_to_world(creature.position(), creature.size(), window, Layer::SeaLife);
        *vis = visibility_for(creature.is_retired());
    }
}

pub fn sync_hook(
    session: Res<OceanSession>,
    mut q_hook: Query<&mut Transform, (With<HookSprite>, Without<FishingLine>)>,
    mut q_line: Query<(&mut Transform, &mut Sprite), (With<FishingLine>, Without<HookSprite>)>,
) {
    let window = session.bounds();
    let hook = session.hook();

    if let Ok(mut tf) = q_hook.single_mut() {
        tf.translation = screen_to_world(IVec2::new(hook.x(), hook.y()), hook.size(), window, Layer::Hook);
    }

    let Ok((mut tf, mut sprite)) = q_line.single_mut() else {
        return;
    };
    let (top, len) = line_span(hook.y());
    let size = IVec2::new(1, len);
    sprite.custom_size = Some(size.as_vec2());
    tf.translation = screen_to_world(IVec2::new(LINE_TOP.x, top), size, window, Layer::Line);
}

pub fn sync_score_text(session: Res<OceanSession>, mut q: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut q {
        text.0 = score_label(session.score().get());
    }
}
