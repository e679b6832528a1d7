use bevy::prelude::*;

/// Hit points with a multiplicative defense.
///
/// `current` always stays in `[0, max]` and `defense` in `[0, 1]`; the setters are the
/// only writers so the clamps live here and nowhere else.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
    defense: f32,
}

impl Health {
    /// Full health. `max` below zero is treated as zero.
    pub fn new(max: f32, defense: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            defense: defense.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn defense(&self) -> f32 {
        self.defense
    }

    /// Bar fill in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Apply `raw` damage scaled by `1 - defense`. Returns the hit points actually lost.
    pub fn take_damage(&mut self, raw: f32) -> f32 {
        let actual = raw * (1.0 - self.defense);
        let before = self.current;
        self.current = (self.current - actual).clamp(0.0, self.max);
        before - self.current
    }
}
