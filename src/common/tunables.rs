//! Tunable gameplay constants.
//!
//! Distances are in pixels, times in seconds, angles in degrees.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,

    pub player_move_speed: f32,
    pub player_rotation_speed: f32,
    pub player_radius: f32,
    pub player_max_health: f32,
    pub player_defense: f32,
    /// Distance in front of the player where spells appear.
    pub weapon_offset: f32,
    /// Seconds between two casts while fire is held.
    pub fire_rate: f32,

    pub monster_speed: f32,
    pub monster_radius: f32,
    pub monster_damage: f32,
    pub monster_attack_radius: f32,
    pub monster_attack_interval: f32,
    pub monster_max_health: f32,
    pub monster_defense: f32,
    pub max_monsters: usize,
    pub spawn_radius: f32,

    pub spell_pool_size: usize,
    pub camera_responsiveness: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,

            player_move_speed: 200.0,
            player_rotation_speed: 200.0,
            player_radius: 13.0,
            player_max_health: 100.0,
            player_defense: 0.5,
            weapon_offset: 20.0,
            fire_rate: 0.2,

            monster_speed: 40.0,
            monster_radius: 14.0,
            monster_damage: 10.0,
            monster_attack_radius: 20.0,
            monster_attack_interval: 1.0,
            monster_max_health: 30.0,
            monster_defense: 0.0,
            max_monsters: 10,
            spawn_radius: 200.0,

            spell_pool_size: 10,
            camera_responsiveness: 5.0,
        }
    }
}
