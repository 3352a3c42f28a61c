use glam::Vec3;
use rand::Rng;

use super::shapes::OBJECT_COLOR;

pub const PARTICLE_SIZE: f32 = 0.03;

/// Background star field; generated once, immutable afterwards
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    pub color: [f32; 3],
    pub size: f32,
}

/// Sample `count` points: x and z uniform in [-5, 5], y spread over the
/// whole object column so particles fill every scroll section
pub fn generate<R: Rng>(count: usize, spacing: f32, object_count: usize, rng: &mut R) -> ParticleCloud {
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 10.0,
                spacing * 0.5 - rng.gen::<f32>() * spacing * object_count as f32,
                (rng.gen::<f32>() - 0.5) * 10.0,
            )
        })
        .collect();

    ParticleCloud {
        positions,
        color: OBJECT_COLOR,
        size: PARTICLE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generates_requested_count() {
        let mut rng = Pcg32::seed_from_u64(7);
        let cloud = generate(200, 4.0, 3, &mut rng);
        assert_eq!(cloud.positions.len(), 200);
    }

    #[test]
    fn test_all_points_within_bounds() {
        // spacing 4, 3 objects: y in [4/2 - 4*3, 4/2] = [-10, 2]
        for seed in 0..1000 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let cloud = generate(10, 4.0, 3, &mut rng);

            for p in &cloud.positions {
                assert!(p.x >= -5.0 && p.x <= 5.0, "x out of bounds: {}", p.x);
                assert!(p.z >= -5.0 && p.z <= 5.0, "z out of bounds: {}", p.z);
                assert!(p.y >= -10.0 && p.y <= 2.0, "y out of bounds: {}", p.y);
            }
        }
    }

    #[test]
    fn test_vertical_spread_follows_object_count() {
        let mut rng = Pcg32::seed_from_u64(42);
        let cloud = generate(5000, 4.0, 5, &mut rng);

        let min_y = cloud.positions.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        for p in &cloud.positions {
            assert!(p.y <= 2.0 && p.y >= 2.0 - 4.0 * 5.0);
        }
        // With 5000 samples the low end of a 5-object column gets populated
        assert!(min_y < -14.0);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = Pcg32::seed_from_u64(11);
        let mut b = Pcg32::seed_from_u64(11);
        let cloud_a = generate(50, 4.0, 3, &mut a);
        let cloud_b = generate(50, 4.0, 3, &mut b);
        assert_eq!(cloud_a.positions, cloud_b.positions);
    }
}
