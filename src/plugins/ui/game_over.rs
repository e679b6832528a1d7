use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;

pub fn spawn_game_over_screen(mut commands: Commands) {
    commands.spawn((
        Name::new("GameOver"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        DespawnOnExit(GameState::GameOver),
        children![(
            Text::new("You died. Press R to try again."),
            TextFont {
                font_size: 32.0,
                ..default()
            },
        )],
    ));
}

pub fn restart_on_key(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };

    if keys.just_pressed(KeyCode::KeyR) {
        info!("restarting session");
        next_state.set(GameState::InGame);
    }
}
