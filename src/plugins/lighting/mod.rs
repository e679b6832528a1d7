//! Lighting plugin (Firefly) (render-only).
//!
//! One point light rides on the player and takes a tint from the selected spell.
//! Monsters carry `Occluder2d` and cast shadows from it.

use bevy::color::Mix;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Player;
use crate::plugins::spells::{SpellBook, SpellSelection};

const BASE_LIGHT: Color = Color::srgb(1.0, 0.9, 0.75);
const SPELL_TINT: f32 = 0.35;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(
            Update,
            (follow_player_light, tint_player_light).run_if(in_state(GameState::InGame)),
        );
}

pub fn light_tint(spell_color: Color) -> Color {
    BASE_LIGHT.mix(&spell_color, SPELL_TINT)
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: BASE_LIGHT,
            radius: 450.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

fn tint_player_light(
    book: Res<SpellBook>,
    selection: Res<SpellSelection>,
    mut q_light: Query<&mut PointLight2d, With<PlayerLight>>,
) {
    let Some(spell) = book.get(selection.index) else {
        return;
    };

    for mut light in &mut q_light {
        let tint = light_tint(spell.color);
        if light.color != tint {
            light.color = tint;
        }
    }
}
