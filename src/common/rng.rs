//! Seedable randomness for gameplay decisions.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform index in `0..len`. `None` when `len == 0`.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }

    /// Uniform point inside a circle of `radius` centred on the origin.
    pub fn point_in_circle(&mut self, radius: f32) -> Vec2 {
        let angle = self.0.gen_range(0.0..TAU);
        // sqrt keeps the density uniform over the disc area.
        let r = self.0.r#gen::<f32>().sqrt() * radius.max(0.0);
        Vec2::from_angle(angle) * r
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}
