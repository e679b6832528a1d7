//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::spells::SpellsPlugin;

pub mod combat;
pub mod core;
pub mod monsters;
pub mod physics;
pub mod player;
pub mod spells;
pub mod ui;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    combat::plugin(app);
    player::plugin(app);
    monsters::plugin(app);
    ui::plugin(app);
    app.add_plugins(SpellsPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
