//! Scene plugin (render-only): draws the session and nothing else.
//!
//! The scene never owns gameplay state. It reads `OceanSession`, and its sync
//! systems run only when that resource changed (a tick or a hook move), which
//! is how the simulation requests a redraw.
//!
//! ```text
//! Startup:  camera, backdrop, fisherman, sea life, hook + line, score text
//! Update:   resolve_backdrop        (solid fill if the image failed to load)
//!           sync_* systems          (run_if resource_changed::<OceanSession>)
//!           spawn_win_overlay       (run_if resource_added::<WinNotice>)
//! ```

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::core::OCEAN_BLUE;
use crate::plugins::session::OceanSession;
use crate::plugins::victory::WinNotice;

mod overlay;
pub mod sync;

pub use sync::screen_to_world;

pub const BACKGROUND_SPRITE: &str = "sprites/beach_bg.png";
pub const FISHERMAN_SPRITE: &str = "sprites/fisherman.png";
pub const FISHERMAN_SIZE: IVec2 = IVec2::new(180, 160);
/// Fisherman's rod tip; the fisherman is centered on it horizontally.
pub const ROD_TIP_X: i32 = 229;
/// The fishing line hangs from here down to the hook.
pub const LINE_TOP: IVec2 = IVec2::new(300, 20);

pub const HOOK_COLOR: Color = Color::srgb(0.627, 0.627, 0.643);
pub const LINE_COLOR: Color = Color::BLACK;

#[derive(Component, Debug)]
pub struct Backdrop;

/// Backdrop whose image has not finished loading yet.
#[derive(Component, Debug)]
struct PendingBackdrop(Handle<Image>);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeaLifeSprite(pub usize);

#[derive(Component, Debug)]
pub struct HookSprite;

#[derive(Component, Debug)]
pub struct FishingLine;

#[derive(Component, Debug)]
pub struct ScoreText;

#[derive(Component, Debug)]
pub struct WinOverlay;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Startup,
        (
            spawn_camera,
            spawn_backdrop,
            spawn_fisherman,
            spawn_sea_life,
            spawn_hook,
            spawn_score_text,
        ),
    )
    .add_systems(
        Update,
        (
            resolve_backdrop,
            (sync::sync_sea_life, sync::sync_hook, sync::sync_score_text)
                .run_if(resource_changed::<OceanSession>),
            overlay::spawn_win_overlay.run_if(resource_added::<WinNotice>),
        ),
    );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2d));
}

fn spawn_backdrop(mut commands: Commands, assets: Res<AssetServer>, tunables: Res<Tunables>) {
    let window = tunables.window_size;
    let image: Handle<Image> = assets.load(BACKGROUND_SPRITE);

    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        PendingBackdrop(image.clone()),
        Sprite {
            image,
            custom_size: Some(window.as_vec2()),
            ..default()
        },
        Transform::from_translation(screen_to_world(IVec2::ZERO, window, window, Layer::Background)),
    ));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackdropResolution {
    Waiting,
    Image,
    SolidFill,
}

fn backdrop_resolution(state: &LoadState) -> BackdropResolution {
    match state {
        LoadState::Loaded => BackdropResolution::Image,
        LoadState::Failed(_) => BackdropResolution::SolidFill,
        _ => BackdropResolution::Waiting,
    }
}

/// Swap a background that failed to load for a solid ocean fill.
fn resolve_backdrop(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut q: Query<(Entity, &PendingBackdrop, &mut Sprite)>,
) {
    for (e, pending, mut sprite) in &mut q {
        let state = assets.load_state(pending.0.id());
        match backdrop_resolution(&state) {
            BackdropResolution::Waiting => continue,
            BackdropResolution::Image => {}
            BackdropResolution::SolidFill => {
                warn!(path = BACKGROUND_SPRITE, "background image unavailable, using solid fill");
                sprite.image = Handle::default();
                sprite.color = OCEAN_BLUE;
            }
        }
        commands.entity(e).remove::<PendingBackdrop>();
    }
}

fn spawn_fisherman(mut commands: Commands, assets: Res<AssetServer>, tunables: Res<Tunables>) {
    let top_left = IVec2::new(ROD_TIP_X - FISHERMAN_SIZE.x / 2, 0);

    commands.spawn((
        Name::new("Fisherman"),
        Sprite {
            image: assets.load(FISHERMAN_SPRITE),
            custom_size: Some(FISHERMAN_SIZE.as_vec2()),
            ..default()
        },
        Transform::from_translation(screen_to_world(
            top_left,
            FISHERMAN_SIZE,
            tunables.window_size,
            Layer::Fisherman,
        )),
    ));
}

fn spawn_sea_life(mut commands: Commands, assets: Res<AssetServer>, session: Res<OceanSession>) {
    let window = session.bounds();

    for (index, creature) in session.roster().iter().enumerate() {
        let profile = creature.kind().profile();
        commands.spawn((
            Name::new(format!("{}{index}", profile.species)),
            SeaLifeSprite(index),
            Sprite {
                image: assets.load(profile.sprite),
                custom_size: Some(creature.size().as_vec2()),
                ..default()
            },
            Transform::from_translation(screen_to_world(
                creature.position(),
                creature.size(),
                window,
                Layer::SeaLife,
            )),
            sync::visibility_for(creature.is_retired()),
        ));
    }
}

fn spawn_hook(mut commands: Commands, session: Res<OceanSession>) {
    let window = session.bounds();
    let hook = session.hook();
    let (line_top, line_len) = sync::line_span(hook.y());

    commands.spawn((
        Name::new("Hook"),
        HookSprite,
        Sprite::from_color(HOOK_COLOR, hook.size().as_vec2()),
        Transform::from_translation(screen_to_world(
            IVec2::new(hook.x(), hook.y()),
            hook.size(),
            window,
            Layer::Hook,
        )),
    ));

    let line_size = IVec2::new(1, line_len);
    commands.spawn((
        Name::new("FishingLine"),
        FishingLine,
        Sprite::from_color(LINE_COLOR, line_size.as_vec2()),
        Transform::from_translation(screen_to_world(
            IVec2::new(LINE_TOP.x, line_top),
            line_size,
            window,
            Layer::Line,
        )),
    ));
}

fn spawn_score_text(mut commands: Commands, session: Res<OceanSession>) {
    commands.spawn((
        Name::new("ScoreText"),
        ScoreText,
        Text::new(sync::score_label(session.score().get())),
        TextFont {
            font_size: 19.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}
