use bevy::prelude::*;

use crate::common::rng::GameRng;

/// Where monsters appear: a uniformly random point within `radius` of `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub radius: f32,
}

impl SpawnPoint {
    pub fn random_position(&self, rng: &mut GameRng) -> Vec2 {
        self.position + rng.point_in_circle(self.radius)
    }
}

/// Population bookkeeping for one session.
///
/// `active` holds every monster that was spawned and has not died yet.
#[derive(Resource, Debug, Default)]
pub struct MonsterManager {
    max_monsters: usize,
    spawners: Vec<SpawnPoint>,
    active: Vec<Entity>,
}

impl MonsterManager {
    pub fn new(max_monsters: usize) -> Self {
        Self {
            max_monsters,
            ..default()
        }
    }

    /// Start a fresh session: no spawners, no monsters.
    pub fn reset(&mut self, max_monsters: usize) {
        *self = Self::new(max_monsters);
    }

    pub fn add_spawner(&mut self, point: SpawnPoint) -> usize {
        self.spawners.push(point);
        self.spawners.len() - 1
    }

    pub fn spawner(&self, index: usize) -> Option<SpawnPoint> {
        self.spawners.get(index).copied()
    }

    pub fn spawner_count(&self) -> usize {
        self.spawners.len()
    }

    /// Uniformly random spawner slot. With no spawners this is slot 0, which is invalid.
    pub fn pick_spawner(&self, rng: &mut GameRng) -> usize {
        rng.index(self.spawners.len()).unwrap_or(0)
    }

    pub fn register_monster(&mut self, monster: Entity) {
        self.active.push(monster);
    }

    /// Drop a dead monster. Returns `false` if it was not registered.
    pub fn on_monster_death(&mut self, monster: Entity) -> bool {
        let Some(i) = self.active.iter().position(|&e| e == monster) else {
            return false;
        };
        self.active.remove(i);
        true
    }

    #[inline]
    pub fn max_monsters(&self) -> usize {
        self.max_monsters
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    #[inline]
    pub fn is_below_target(&self) -> bool {
        self.active.len() < self.max_monsters
    }
}
