use bevy::prelude::*;

/// Marks an entity owned by a spell pool. `pool` is the prefab key it returns to.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PooledSpell {
    pub pool: String,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// Per-cast values, rewritten every time the spell leaves the pool.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Spell {
    pub damage: f32,
    pub speed: f32,
    pub direction: Vec2,
}

#[derive(Component, Debug, Clone, Default, Deref, DerefMut)]
pub struct SpellLifetime(pub Timer);
