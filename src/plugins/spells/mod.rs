//! Spells plugin: message-based casting on top of per-spell object pools.
//!
//! # Data flow
//! ```text
//!   OnEnter(InGame)
//!     create_spell_pools        one pool per SpellBook entry, pre-spawned inactive
//!
//!   Update (variable dt)
//!     cycle_spells              PlayerInput.cycle      -> SpellSelection
//!     request_spell_casts       PlayerInput.fire_held  -> CastSpellRequest
//!     allocate_spells_from_pool CastSpellRequest       -> pool.acquire + activate
//!
//!   FixedUpdate
//!     expire_spells             lifetime over          -> PendingReturn
//!
//!   FixedPostUpdate (after Avian collision messages)
//!     process_spell_collisions  CollisionStart         -> DamageRequest + PendingReturn
//!     return_to_pool_commit     PendingReturn          -> Inactive + pool.release
//! ```
//!
//! Producers never borrow the pools. The allocator and the commit are the only
//! systems that touch `ObjectPoolManager<SpellPrefab>`.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod data;
pub mod lifetime;
pub mod messages;
pub mod pool;
pub mod request;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::combat::ApplyDamage;
use crate::plugins::player;

pub use components::{PooledSpell, Spell, SpellLifetime, SpellState};
pub use data::{SpellBook, SpellData, SpellSelection};
pub use messages::CastSpellRequest;
pub use pool::{ObjectPool, ObjectPoolManager, PoolPrefab, SpellPrefab};

pub struct SpellsPlugin;

impl Plugin for SpellsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpellBook>()
            .init_resource::<SpellSelection>()
            .init_resource::<request::FireCadence>()
            .init_resource::<ObjectPoolManager<SpellPrefab>>()
            .add_message::<CastSpellRequest>();

        app.add_systems(OnEnter(GameState::InGame), pool::create_spell_pools)
            .add_systems(OnExit(GameState::InGame), pool::clear_spell_pools);

        app.add_systems(
            Update,
            (
                request::cycle_spells,
                request::request_spell_casts,
                allocator::allocate_spells_from_pool,
            )
                .chain()
                .after(player::gather_input)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            lifetime::expire_spells.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                collision::process_spell_collisions
                    .after(CollisionEventSystems)
                    .before(ApplyDamage),
                commit::return_to_pool_commit.after(collision::process_spell_collisions),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
