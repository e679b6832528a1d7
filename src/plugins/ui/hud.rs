use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::combat::Health;
use crate::plugins::player::Player;
use crate::plugins::spells::{SpellBook, SpellSelection};

use super::{update_health, update_spell_icon};

#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerHealthFill;

#[derive(Component, Debug, Clone, Copy)]
pub struct SpellIcon;

#[derive(Component, Debug, Clone, Copy)]
pub struct SpellLabel;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hud"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::FlexStart,
            padding: UiRect::all(Val::Px(12.0)),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
        children![
            (
                Name::new("PlayerHealthBar"),
                Node {
                    width: Val::Px(200.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.15, 0.15, 0.18)),
                children![(
                    PlayerHealthFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                )],
            ),
            (
                Name::new("SpellSlot"),
                Node {
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    ..default()
                },
                children![
                    (
                        SpellLabel,
                        Text::new(""),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                    ),
                    (
                        SpellIcon,
                        Node {
                            width: Val::Px(32.0),
                            height: Val::Px(32.0),
                            ..default()
                        },
                        BackgroundColor(Color::NONE),
                    ),
                ],
            ),
        ],
    ));
}

pub fn refresh_player_health_bar(
    q_player: Query<&Health, (With<Player>, Changed<Health>)>,
    mut q_fill: Query<&mut Node, With<PlayerHealthFill>>,
) {
    let Ok(health) = q_player.single() else {
        return;
    };

    for mut node in &mut q_fill {
        update_health(&mut node, health.current(), health.max());
    }
}

pub fn refresh_spell_icon(
    book: Res<SpellBook>,
    selection: Res<SpellSelection>,
    mut q_icon: Query<&mut BackgroundColor, With<SpellIcon>>,
    mut q_label: Query<&mut Text, With<SpellLabel>>,
) {
    if !selection.is_changed() && !book.is_changed() {
        return;
    }

    let Some(spell) = book.get(selection.index) else {
        return;
    };

    let (Ok(mut icon), Ok(mut label)) = (q_icon.single_mut(), q_label.single_mut()) else {
        return;
    };

    update_spell_icon(&mut icon, &mut label, spell);
}
