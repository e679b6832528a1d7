//! World plugin: the arena floor and the boundary walls around it.
//!
//! Walls are static bodies on the `World` layer. They block the player and monsters;
//! spells do not list `World` in their filters and fly through.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

pub const TILE: f32 = 64.0;
/// Half size of the playable area, in pixels.
pub const ARENA_HALF_EXTENTS: Vec2 = Vec2::new(TILE * 16.0, TILE * 9.0);
pub const WALL_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_boundaries, spawn_floor));
}

pub fn wall_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy])
}

/// `(name, centre, size)` for the four boundary walls.
fn boundary_walls() -> [(&'static str, Vec2, Vec2); 4] {
    let half = ARENA_HALF_EXTENTS;
    let t = WALL_THICKNESS;
    let horizontal = Vec2::new(half.x * 2.0 + t * 2.0, t);
    let vertical = Vec2::new(t, half.y * 2.0);

    [
        ("BoundaryTop", Vec2::new(0.0, half.y + t * 0.5), horizontal),
        ("BoundaryBottom", Vec2::new(0.0, -half.y - t * 0.5), horizontal),
        ("BoundaryLeft", Vec2::new(-half.x - t * 0.5, 0.0), vertical),
        ("BoundaryRight", Vec2::new(half.x + t * 0.5, 0.0), vertical),
    ]
}

fn spawn_boundaries(mut commands: Commands) {
    let color = Color::srgb(0.22, 0.2, 0.3);

    for (name, centre, size) in boundary_walls() {
        commands.spawn((
            Name::new(name),
            Sprite::from_color(color, size),
            Transform::from_translation(centre.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Checkerboard of flat sprites; the project ships no assets.
fn spawn_floor(mut commands: Commands) {
    let cols = (ARENA_HALF_EXTENTS.x / TILE) as i32;
    let rows = (ARENA_HALF_EXTENTS.y / TILE) as i32;

    (-rows..=rows)
        .flat_map(|y| (-cols..=cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let color = if (x + y).rem_euclid(2) == 0 {
                Color::srgb(0.11, 0.1, 0.14)
            } else {
                Color::srgb(0.09, 0.08, 0.12)
            };

            commands.spawn((
                Name::new("Floor"),
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_xyz(x as f32 * TILE, y as f32 * TILE, -1.0),
                DespawnOnExit(GameState::InGame),
            ));
        });
}

#[cfg(test)]
mod tests;
