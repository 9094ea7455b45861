//! Victory plugin: turns the terminal `SessionWon` message into a notice the
//! player must acknowledge, then closes the app.
//!
//! The notice is a resource, not UI: the scene plugin draws it when present,
//! and headless apps can still drive the acknowledge -> exit path.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::plugins::session::SessionWon;

pub const DISMISS_HINT: &str = "Press Enter to close";

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WinNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub score: u32,
}

pub fn plugin(app: &mut App) {
    app.add_message::<KeyboardInput>().add_systems(
        Update,
        (
            post_notice,
            dismiss_notice.run_if(resource_exists::<WinNotice>),
        )
            .chain(),
    );
}

pub fn post_notice(mut commands: Commands, mut won: MessageReader<SessionWon>) {
    let Some(won) = won.read().last() else {
        return;
    };
    info!(score = won.score, ticks = won.ticks, "posting win notice");
    commands.insert_resource(WinNotice {
        title: won.title,
        message: won.message,
        score: won.score,
    });
}

#[inline]
fn is_dismiss_key(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space | KeyCode::Escape
    )
}

/// Close the app once the notice is acknowledged.
///
/// Presses buffered before the notice appeared are discarded, so the notice is
/// shown for at least one frame.
pub fn dismiss_notice(
    notice: Res<WinNotice>,
    mut keys: MessageReader<KeyboardInput>,
    mut exit: MessageWriter<AppExit>,
) {
    if notice.is_added() {
        keys.clear();
        return;
    }

    let acknowledged = keys
        .read()
        .any(|k| k.state == ButtonState::Pressed && is_dismiss_key(k.key_code));
    if acknowledged {
        info!("win notice acknowledged, closing");
        exit.write(AppExit::Success);
    }
}
