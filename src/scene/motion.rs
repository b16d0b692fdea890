//! Random per-tick wander of node positions.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::NodeStore;

/// Unseeded, bounded random walk applied to every entity once per tick.
///
/// Each axis moves by `u * s * amplitude` with `u` uniform in `[0, 1)` and
/// `s` a fair random sign.
pub struct Wander {
    rng: StdRng,
    amplitude: f32,
}

impl Wander {
    /// Wander seeded from the thread-local generator.
    #[must_use]
    pub fn new(amplitude: f32) -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            amplitude,
        }
    }

    /// Reproducible wander.
    #[must_use]
    pub fn seeded(amplitude: f32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amplitude,
        }
    }

    /// Per-axis bound of a single step.
    #[must_use]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    fn axis_step(&mut self) -> f32 {
        let magnitude: f32 = self.rng.random();
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        magnitude * sign * self.amplitude
    }

    /// One random displacement vector.
    pub fn step(&mut self) -> Vec3 {
        let x = self.axis_step();
        let y = self.axis_step();
        let z = self.axis_step();
        Vec3::new(x, y, z)
    }

    /// Displace every entity in the store by an independent step.
    pub fn apply(&mut self, store: &mut NodeStore) {
        if self.amplitude == 0.0 {
            return;
        }
        for entity in store.iter_mut() {
            entity.position += self.step();
        }
    }
}
