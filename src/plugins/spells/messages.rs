//! Buffered cast requests.
//!
//! The producer (player cadence) only states intent; the allocator is the single
//! writer of the spell pools.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct CastSpellRequest {
    /// Index into the spell book.
    pub spell: usize,
    pub origin: Vec2,
    pub direction: Vec2,
}
