use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::monsters::spawner::SPAWN_POINTS;

use super::*;

#[test]
fn spawns_four_static_boundaries() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_boundaries);

    let walls = world
        .query::<(&Name, &RigidBody)>()
        .iter(&world)
        .filter(|(n, rb)| n.as_str().starts_with("Boundary") && matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(walls, 4);
}

#[test]
fn walls_block_bodies_but_not_spells() {
    let layers = wall_layers();
    assert!(layers.filters.has_all([Layer::Player, Layer::Enemy]));
    assert!(!layers.filters.has_all(Layer::PlayerSpell));
}

#[test]
fn spawn_areas_fit_inside_the_arena() {
    let radius = Tunables::default().spawn_radius;
    for p in SPAWN_POINTS {
        assert!(p.x.abs() + radius < ARENA_HALF_EXTENTS.x);
        assert!(p.y.abs() + radius < ARENA_HALF_EXTENTS.y);
    }
}

#[test]
fn floor_covers_the_arena() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_floor);

    let tiles = world
        .query::<&Name>()
        .iter(&world)
        .filter(|n| n.as_str() == "Floor")
        .count();
    assert_eq!(tiles, 33 * 19);
}
