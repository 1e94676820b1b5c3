//! Background starfield: uniformly scattered distant points, uniform color,
//! deterministic per seed.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform white used for every background star.
pub const STARFIELD_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Half-extent of the scatter volume along X and Z.
const EXTENT_XZ: f32 = 200.0;

/// Half-extent of the scatter volume along Y.
const EXTENT_Y: f32 = 150.0;

/// Generates a deterministic set of background star positions from a seed.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
}

impl StarfieldGenerator {
    /// Create a new generator with the given seed and star count.
    pub fn new(seed: u64, star_count: u32) -> Self {
        Self { seed, star_count }
    }

    /// Generate the star positions, scattered uniformly in
    /// `[-200, 200] × [-150, 150] × [-200, 200]`.
    pub fn generate(&self) -> Vec<Vec3> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            stars.push(Vec3::new(
                rng.random_range(-EXTENT_XZ..=EXTENT_XZ),
                rng.random_range(-EXTENT_Y..=EXTENT_Y),
                rng.random_range(-EXTENT_XZ..=EXTENT_XZ),
            ));
        }

        stars
    }
}
