//! Spell definitions and the player's current pick.

use bevy::prelude::*;

/// Static description of a castable spell. The icon is a flat colour swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellData {
    pub name: String,
    pub color: Color,
    pub speed: f32,
    pub damage: f32,
    pub lifetime: f32,
    pub radius: f32,
}

/// Every spell the player can cycle through, in cycling order.
#[derive(Resource, Debug, Clone)]
pub struct SpellBook {
    pub spells: Vec<SpellData>,
}

impl SpellBook {
    pub fn get(&self, index: usize) -> Option<&SpellData> {
        self.spells.get(index)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl Default for SpellBook {
    fn default() -> Self {
        Self {
            spells: vec![
                SpellData {
                    name: "Firebolt".into(),
                    color: Color::srgb(1.0, 0.45, 0.1),
                    speed: 600.0,
                    damage: 10.0,
                    lifetime: 1.5,
                    radius: 5.0,
                },
                SpellData {
                    name: "Frost Shard".into(),
                    color: Color::srgb(0.55, 0.85, 1.0),
                    speed: 450.0,
                    damage: 6.0,
                    lifetime: 2.0,
                    radius: 4.0,
                },
                SpellData {
                    name: "Arcane Orb".into(),
                    color: Color::srgb(0.7, 0.35, 1.0),
                    speed: 300.0,
                    damage: 20.0,
                    lifetime: 3.0,
                    radius: 8.0,
                },
            ],
        }
    }
}

/// Index into `SpellBook::spells`.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpellSelection {
    pub index: usize,
}

impl SpellSelection {
    /// Step `dir` entries through a book of `len` spells, wrapping both ways.
    /// Returns the new index, or `None` for an empty book.
    pub fn cycle(&mut self, dir: i32, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = (self.index as i64 + dir as i64).rem_euclid(len as i64);
        self.index = next as usize;
        Some(self.index)
    }
}
