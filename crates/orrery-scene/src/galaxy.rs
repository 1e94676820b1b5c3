//! Procedural spiral galaxy generation: deterministic point clouds scattered
//! through deep space with random orientation, scale, and color bias.

use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How tightly the arms wind: radians of arm angle per unit radial distance.
pub const ARM_WINDING: f32 = 5.0;

/// Maximum positional jitter applied per axis to each star.
pub const STAR_JITTER: f32 = 0.1;

/// Parameters for a single spiral galaxy point cloud.
#[derive(Clone, Debug)]
pub struct SpiralGalaxyParams {
    /// Number of stars in the cloud.
    pub star_count: u32,
    /// Number of spiral arms.
    pub arms: u32,
    /// Disc radius in local units before instance scaling.
    pub radius: f32,
    /// Per-channel color offset added to the base tint (0.5, 0.3, 0.6).
    pub color_bias: [f32; 3],
}

/// A generated galaxy point cloud: parallel position and color arrays.
#[derive(Clone, Debug)]
pub struct GalaxyPointCloud {
    /// Star positions in galaxy-local space.
    pub positions: Vec<Vec3>,
    /// Star colors, dimming with radial distance from the core.
    pub colors: Vec<[f32; 3]>,
}

/// Generate a spiral galaxy point cloud.
///
/// Star `i` sits on arm `i mod arms` at radial distance `(i / n) · radius`,
/// with arm angle `distance · ARM_WINDING` plus the arm's phase offset, then
/// jittered per axis by up to ±[`STAR_JITTER`]. Color intensity falls off
/// linearly from the core. Deterministic for a given RNG state.
///
/// An arm count of 0 is treated as 1 so stray parameter values cannot
/// divide by zero.
pub fn generate_spiral(params: &SpiralGalaxyParams, rng: &mut ChaCha8Rng) -> GalaxyPointCloud {
    let n = params.star_count as usize;
    let arms = params.arms.max(1);
    let mut positions = Vec::with_capacity(n);
    let mut colors = Vec::with_capacity(n);

    for i in 0..n {
        let arm_offset = (i as u32 % arms) as f32 * std::f32::consts::TAU / arms as f32;
        let distance = (i as f32 / params.star_count as f32) * params.radius;
        let angle = distance * ARM_WINDING + arm_offset;

        positions.push(Vec3::new(
            angle.cos() * distance + rng.random_range(-STAR_JITTER..=STAR_JITTER),
            rng.random_range(-STAR_JITTER..=STAR_JITTER),
            angle.sin() * distance + rng.random_range(-STAR_JITTER..=STAR_JITTER),
        ));

        let intensity = 1.0 - distance / params.radius;
        colors.push([
            intensity * (0.5 + params.color_bias[0]),
            intensity * (0.3 + params.color_bias[1]),
            intensity * (0.6 + params.color_bias[2]),
        ]);
    }

    GalaxyPointCloud { positions, colors }
}

/// One placed galaxy: an immutable point cloud plus its world placement.
///
/// Galaxies are rendered camera-relative (see
/// [`crate::transform::galaxy_model_matrix`]) to fake large-scale depth.
#[derive(Clone, Debug)]
pub struct GalaxyInstance {
    /// The generated point cloud, shared read-only across frames.
    pub cloud: GalaxyPointCloud,
    /// World-space offset of the galaxy center.
    pub offset: Vec3,
    /// Uniform scale relative to the largest disc radius.
    pub scale: f32,
    /// Fixed random orientation.
    pub rotation: Mat4,
}

/// Generates a deterministic field of spiral galaxies from a seed.
pub struct GalaxyField {
    seed: u64,
    galaxy_count: u32,
    stars_per_galaxy: u32,
    arms: u32,
}

/// Largest disc radius drawn by [`GalaxyField::generate`].
const FIELD_MAX_RADIUS: f32 = 5.0;

/// Smallest disc radius drawn by [`GalaxyField::generate`].
const FIELD_MIN_RADIUS: f32 = 2.0;

impl GalaxyField {
    /// Create a new field generator.
    pub fn new(seed: u64, galaxy_count: u32, stars_per_galaxy: u32, arms: u32) -> Self {
        Self {
            seed,
            galaxy_count,
            stars_per_galaxy,
            arms,
        }
    }

    /// Generate the galaxy instances. Deterministic for a given seed.
    ///
    /// Each instance gets a disc radius in `[2, 5]`, a per-channel color
    /// bias in `[0.3, 0.7]`, a world offset in
    /// `[-150, 150] × [-100, 100] × [-150, 150]`, a random Euler
    /// orientation, and a scale of `radius / 5`.
    pub fn generate(&self) -> Vec<GalaxyInstance> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut instances = Vec::with_capacity(self.galaxy_count as usize);

        for _ in 0..self.galaxy_count {
            let radius = rng.random_range(FIELD_MIN_RADIUS..=FIELD_MAX_RADIUS);
            let color_bias = [
                rng.random_range(0.3..=0.7),
                rng.random_range(0.3..=0.7),
                rng.random_range(0.3..=0.7),
            ];

            let params = SpiralGalaxyParams {
                star_count: self.stars_per_galaxy,
                arms: self.arms,
                radius,
                color_bias,
            };
            let cloud = generate_spiral(&params, &mut rng);

            let offset = Vec3::new(
                rng.random_range(-150.0..=150.0),
                rng.random_range(-100.0..=100.0),
                rng.random_range(-150.0..=150.0),
            );
            let rotation = Mat4::from_euler(
                EulerRot::XYZ,
                rng.random_range(0.0..std::f32::consts::TAU),
                rng.random_range(0.0..std::f32::consts::TAU),
                rng.random_range(0.0..std::f32::consts::TAU),
            );

            instances.push(GalaxyInstance {
                cloud,
                offset,
                scale: radius / FIELD_MAX_RADIUS,
                rotation,
            });
        }

        log::debug!(
            "generated {} galaxies ({} stars each) from seed {}",
            self.galaxy_count,
            self.stars_per_galaxy,
            self.seed
        );

        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> SpiralGalaxyParams {
        SpiralGalaxyParams {
            star_count: 1000,
            arms: 4,
            radius: 5.0,
            color_bias: [0.5, 0.5, 0.5],
        }
    }

    #[test]
    fn test_spiral_star_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cloud = generate_spiral(&test_params(), &mut rng);
        assert_eq!(cloud.positions.len(), 1000);
        assert_eq!(cloud.colors.len(), 1000);
    }

    #[test]
    fn test_spiral_radial_distance_monotone() {
        let params = test_params();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cloud = generate_spiral(&params, &mut rng);

        // The undisplaced radial distance of star i is (i/n)·radius; jitter
        // can move a star by at most STAR_JITTER per axis, so measured radii
        // must track the ideal ramp within that envelope.
        for (i, p) in cloud.positions.iter().enumerate() {
            let ideal = (i as f32 / params.star_count as f32) * params.radius;
            let measured = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                (measured - ideal).abs() <= STAR_JITTER * 2.0_f32.sqrt() + 1e-5,
                "star {i}: measured {measured}, ideal {ideal}"
            );
            assert!(p.y.abs() <= STAR_JITTER + 1e-6);
        }
    }

    #[test]
    fn test_spiral_color_dims_outward() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cloud = generate_spiral(&test_params(), &mut rng);

        // Core stars are brightest; the outermost star is nearly black.
        let core = cloud.colors[0];
        let rim = cloud.colors[999];
        for ch in 0..3 {
            assert!(core[ch] > rim[ch]);
        }
        assert!(rim.iter().all(|&c| c < 0.01));
    }

    #[test]
    fn test_spiral_arm_count_phases() {
        // With jitter bounded by STAR_JITTER, consecutive same-arm stars stay
        // near the ideal spiral; stars on different arms near the rim are far
        // apart. Spot-check that the four arm phase offsets are distinct.
        let params = test_params();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let cloud = generate_spiral(&params, &mut rng);

        let i = 996; // rim stars, one per arm: 996..1000
        let mut rim_positions = Vec::new();
        for k in 0..4 {
            rim_positions.push(cloud.positions[i + k]);
        }
        for a in 0..4 {
            for b in (a + 1)..4 {
                let gap = (rim_positions[a] - rim_positions[b]).length();
                assert!(gap > 1.0, "rim stars on arms {a} and {b} overlap");
            }
        }
    }

    #[test]
    fn test_zero_arms_treated_as_single_arm() {
        // An armless galaxy makes no geometric sense; the generator must
        // not abort on a stray arms value of 0.
        let field = GalaxyField::new(42, 1, 10, 0).generate();
        assert_eq!(field.len(), 1);
        assert_eq!(field[0].cloud.positions.len(), 10);

        let zero = GalaxyField::new(42, 1, 10, 0).generate();
        let one = GalaxyField::new(42, 1, 10, 1).generate();
        assert_eq!(zero[0].cloud.positions, one[0].cloud.positions);
    }

    #[test]
    fn test_field_same_seed_reproduces() {
        let a = GalaxyField::new(42, 10, 100, 4).generate();
        let b = GalaxyField::new(42, 10, 100, 4).generate();
        assert_eq!(a.len(), b.len());
        for (ga, gb) in a.iter().zip(b.iter()) {
            assert_eq!(ga.offset, gb.offset);
            assert_eq!(ga.scale, gb.scale);
            assert_eq!(ga.cloud.positions, gb.cloud.positions);
        }
    }

    #[test]
    fn test_field_different_seed_differs() {
        let a = GalaxyField::new(1, 5, 100, 4).generate();
        let b = GalaxyField::new(2, 5, 100, 4).generate();
        let moved = a
            .iter()
            .zip(b.iter())
            .filter(|(ga, gb)| (ga.offset - gb.offset).length() > 1.0)
            .count();
        assert!(moved >= 4, "only {moved}/5 galaxy offsets differed");
    }

    #[test]
    fn test_field_instance_bounds() {
        let field = GalaxyField::new(9, 50, 10, 4).generate();
        assert_eq!(field.len(), 50);
        for g in &field {
            assert!(g.offset.x.abs() <= 150.0);
            assert!(g.offset.y.abs() <= 100.0);
            assert!(g.offset.z.abs() <= 150.0);
            assert!(g.scale >= FIELD_MIN_RADIUS / FIELD_MAX_RADIUS && g.scale <= 1.0);
        }
    }
}
