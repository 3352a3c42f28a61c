use backdrop::scene::{SceneAssembly, SceneConfig};
use backdrop::types::{LayoutMode, Viewport};
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[cfg(test)]
mod layout_tests {
    use super::*;

    fn scene(viewport: Viewport, layout_mode: LayoutMode) -> SceneAssembly {
        let config = SceneConfig {
            layout_mode,
            ..SceneConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(99);
        SceneAssembly::new(viewport, config, &mut rng)
    }

    fn offsets(scene: &SceneAssembly) -> Vec<f32> {
        scene.shapes.iter().map(|s| s.position.x).collect()
    }

    #[test]
    fn test_narrow_viewport_stacks_objects_on_center() {
        let scene = scene(Viewport::new(800.0, 600.0), LayoutMode::HeightScaled);
        assert_eq!(offsets(&scene), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_wide_low_viewport_uses_inverse_height_magnitude() {
        let scene = scene(Viewport::new(1200.0, 400.0), LayoutMode::HeightScaled);
        assert_eq!(offsets(&scene), vec![5.0, -5.0, 5.0]);
    }

    #[test]
    fn test_very_short_viewport_caps_magnitude() {
        let scene = scene(Viewport::new(1200.0, 150.0), LayoutMode::HeightScaled);
        assert_eq!(offsets(&scene), vec![10.0, -10.0, 10.0]);
    }

    #[test]
    fn test_alternating_signs_for_any_wide_viewport() {
        for height in [250.0, 500.0, 768.0, 1080.0, 1440.0] {
            let scene = scene(Viewport::new(1600.0, height), LayoutMode::HeightScaled);
            let xs = offsets(&scene);
            assert!(xs[0] > 0.0);
            assert!(xs[1] < 0.0);
            assert!(xs[2] > 0.0);
            assert_eq!(xs[0], -xs[1]);
            assert_eq!(xs[0], xs[2]);
        }
    }

    #[test]
    fn test_fixed_offset_mode_ignores_height() {
        for height in [150.0, 400.0, 1080.0] {
            let scene = scene(Viewport::new(1600.0, height), LayoutMode::FixedOffset);
            assert_eq!(offsets(&scene), vec![2.0, -2.0, 2.0]);
        }
    }

    #[test]
    fn test_resize_round_trip_is_exact() {
        let wide = Viewport::new(1200.0, 400.0);
        let narrow = Viewport::new(800.0, 600.0);

        let mut assembly = scene(wide, LayoutMode::HeightScaled);
        let original = offsets(&assembly);

        assembly.adjust_positions(narrow);
        assembly.adjust_positions(wide);

        assert_eq!(offsets(&assembly), original);
    }

    #[test]
    fn test_vertical_slots_survive_reflow() {
        let mut assembly = scene(Viewport::new(1200.0, 400.0), LayoutMode::HeightScaled);
        assembly.adjust_positions(Viewport::new(800.0, 600.0));

        let ys: Vec<f32> = assembly.shapes.iter().map(|s| s.position.y).collect();
        assert_eq!(ys, vec![0.0, -4.0, -8.0]);
    }
}
