//! UI plugin: a health bar and a spell icon on the HUD, floating health bars over
//! monsters, and the game over screen.
//!
//! Widgets are plain value sinks. `update_health` and `update_spell_icon` are the only
//! functions that write widget values; systems decide *when* to call them.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::spells::{request, SpellData};

pub mod game_over;
pub mod health_bars;
pub mod hud;

/// Bar fill for `current / max`, clamped to `[0, 1]`.
pub fn bar_fill(current: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    (current / max).clamp(0.0, 1.0)
}

/// Set a UI bar's fill to `current / max`.
pub fn update_health(bar: &mut Node, current: f32, max: f32) {
    bar.width = Val::Percent(bar_fill(current, max) * 100.0);
}

/// Show `spell` in the HUD spell slot.
pub fn update_spell_icon(icon: &mut BackgroundColor, label: &mut Text, spell: &SpellData) {
    icon.0 = spell.color;
    label.0.clone_from(&spell.name);
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), hud::spawn_hud)
        .add_systems(
            Update,
            (
                hud::refresh_player_health_bar,
                hud::refresh_spell_icon.after(request::cycle_spells),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            PostUpdate,
            health_bars::sync_world_health_bars
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnEnter(GameState::GameOver), game_over::spawn_game_over_screen)
        .add_systems(
            Update,
            game_over::restart_on_key.run_if(in_state(GameState::GameOver)),
        );
}
