//! Object pools keyed by prefab name.
//!
//! A pool is a FIFO queue of pre-spawned, deactivated entities. `acquire` hands out the
//! oldest free entity and grows by one when the queue is empty; pools never shrink.
//! Activation/deactivation is done by value writes (state, visibility, velocity,
//! collision filters), never by adding or removing components.
//!
//! The pool itself only does bookkeeping. Spawning is passed in as a closure so the
//! same code runs against `Commands` in systems and a bare `World` in tests.

use std::collections::VecDeque;

use avian2d::prelude::*;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{PooledSpell, Spell, SpellLifetime, SpellState};
use super::data::{SpellBook, SpellData, SpellSelection};

/// Something a pool can instantiate. The key identifies the pool.
pub trait PoolPrefab: Send + Sync + 'static {
    fn key(&self) -> &str;
}

#[derive(Debug)]
pub struct ObjectPool<P> {
    prefab: P,
    free: VecDeque<Entity>,
    total: usize,
}

impl<P: PoolPrefab> ObjectPool<P> {
    /// Pre-spawn `initial` instances.
    pub fn new(prefab: P, initial: usize, mut spawn: impl FnMut(&P) -> Entity) -> Self {
        let free = (0..initial).map(|_| spawn(&prefab)).collect::<VecDeque<_>>();
        Self {
            prefab,
            total: free.len(),
            free,
        }
    }

    pub fn prefab(&self) -> &P {
        &self.prefab
    }

    /// Oldest free instance, or a fresh one when the queue is empty.
    pub fn acquire(&mut self, spawn: impl FnOnce(&P) -> Entity) -> Entity {
        if let Some(e) = self.free.pop_front() {
            return e;
        }
        self.total += 1;
        spawn(&self.prefab)
    }

    pub fn release(&mut self, e: Entity) {
        debug_assert!(!self.free.contains(&e), "{e:?} released twice");
        self.free.push_back(e);
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn in_use(&self) -> usize {
        self.total - self.free.len()
    }
}

#[derive(Resource, Debug)]
pub struct ObjectPoolManager<P: PoolPrefab> {
    pools: HashMap<String, ObjectPool<P>>,
}

impl<P: PoolPrefab> Default for ObjectPoolManager<P> {
    fn default() -> Self {
        Self { pools: HashMap::default() }
    }
}

impl<P: PoolPrefab> ObjectPoolManager<P> {
    /// Pool for `prefab`'s key, created with `initial` instances if it does not exist yet.
    /// An existing pool is returned untouched.
    pub fn create_pool(
        &mut self,
        prefab: P,
        initial: usize,
        spawn: impl FnMut(&P) -> Entity,
    ) -> &mut ObjectPool<P> {
        self.pools
            .entry(prefab.key().to_owned())
            .or_insert_with(|| ObjectPool::new(prefab, initial, spawn))
    }

    pub fn get_pool(&self, key: &str) -> Option<&ObjectPool<P>> {
        self.pools.get(key)
    }

    pub fn get_pool_mut(&mut self, key: &str) -> Option<&mut ObjectPool<P>> {
        self.pools.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Forget every pool. Callers must make sure the pooled entities are gone too.
    pub fn clear(&mut self) {
        self.pools.clear();
    }
}

// -----------------------------------------------------------------------------
// Spell prefab
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SpellPrefab {
    pub name: String,
    pub color: Color,
    pub radius: f32,
}

impl PoolPrefab for SpellPrefab {
    fn key(&self) -> &str {
        &self.name
    }
}

impl From<&SpellData> for SpellPrefab {
    fn from(data: &SpellData) -> Self {
        Self {
            name: data.name.clone(),
            color: data.color,
            radius: data.radius,
        }
    }
}

#[inline]
pub fn active_spell_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerSpell, [Layer::Enemy])
}

/// Inactive spells keep their physics components but collide with nothing.
#[inline]
pub fn inactive_spell_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerSpell, [] as [Layer; 0])
}

impl SpellPrefab {
    /// Components of a parked spell.
    pub fn inactive_bundle(&self) -> impl Bundle + use<> {
        (
            Name::new(format!("Spell({})", self.name)),
            PooledSpell { pool: self.name.clone() },
            SpellState::Inactive,
            Spell::default(),
            SpellLifetime::default(),
            Sprite {
                color: self.color,
                custom_size: Some(Vec2::splat(self.radius * 2.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 2.0),
            Visibility::Hidden,
            (
                RigidBody::Dynamic,
                Collider::circle(self.radius),
                // Trigger only: spells pass through walls and are never pushed.
                Sensor,
                LockedAxes::ROTATION_LOCKED,
                inactive_spell_layers(),
                LinearVelocity::ZERO,
                CollisionEventsEnabled,
            ),
            DespawnOnExit(GameState::InGame),
        )
    }
}

// -----------------------------------------------------------------------------
// Session setup
// -----------------------------------------------------------------------------

/// One pool per spell in the book, pre-spawned with `Tunables::spell_pool_size`.
///
/// Runs on every entry into `InGame`; the previous session's pooled entities were
/// despawned on exit, so the registry starts over.
pub fn create_spell_pools(
    mut commands: Commands,
    tunables: Res<Tunables>,
    book: Res<SpellBook>,
    mut pools: ResMut<ObjectPoolManager<SpellPrefab>>,
    mut selection: ResMut<SpellSelection>,
) {
    pools.clear();
    *selection = SpellSelection::default();

    if book.is_empty() {
        error!("spell book is empty; casting is disabled");
        return;
    }

    for data in &book.spells {
        pools.create_pool(SpellPrefab::from(data), tunables.spell_pool_size, |prefab| {
            commands.spawn(prefab.inactive_bundle()).id()
        });
    }

    info!(pools = pools.len(), size = tunables.spell_pool_size, "spell pools ready");
}

/// Drop pool bookkeeping when the session ends.
pub fn clear_spell_pools(mut pools: ResMut<ObjectPoolManager<SpellPrefab>>) {
    pools.clear();
}
