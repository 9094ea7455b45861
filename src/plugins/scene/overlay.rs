//! Modal win overlay.

use bevy::prelude::*;

use super::WinOverlay;
use crate::plugins::victory::{DISMISS_HINT, WinNotice};

pub(super) fn final_score_label(score: u32) -> String {
    format!("Final score: {score}")
}

pub(super) fn spawn_win_overlay(mut commands: Commands, notice: Res<WinNotice>) {
    commands
        .spawn((
            Name::new("WinOverlay"),
            WinOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(notice.title),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(notice.message),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(12.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(final_score_label(notice.score)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(DISMISS_HINT),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}
