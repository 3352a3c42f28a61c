use glam::Vec3;

/// Uniform Catmull-Rom spline through a fixed set of control points.
///
/// Endpoint tangents use clamped (duplicated) neighbors, so the curve starts
/// at the first control point and ends at the last one.
pub struct CatmullRom {
    points: Vec<Vec3>,
}

impl CatmullRom {
    /// Requires at least two control points
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 2, "spline needs at least two control points");
        Self { points }
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Evaluate the curve at `t` in [0, 1]; values outside are clamped
    pub fn point_at(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        let segments = (n - 1) as f32;
        let s = t.clamp(0.0, 1.0) * segments;
        let i = (s.floor() as usize).min(n - 2);
        let u = s - i as f32;

        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p3 = self.points[(i + 2).min(n - 1)];

        let u2 = u * u;
        let u3 = u2 * u;

        0.5 * ((2.0 * p1)
            + (p2 - p0) * u
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, -1.0),
            Vec3::new(2.0, -1.0, 3.0),
            Vec3::new(3.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_curve_passes_through_control_points() {
        let spline = CatmullRom::new(zigzag());
        let n = spline.control_points().len();
        for (i, &p) in zigzag().iter().enumerate() {
            let t = i as f32 / (n - 1) as f32;
            let sampled = spline.point_at(t);
            assert!((sampled - p).length() < 1e-5, "t={} sampled={:?}", t, sampled);
        }
    }

    #[test]
    fn test_curve_is_deterministic() {
        let a = CatmullRom::new(zigzag());
        let b = CatmullRom::new(zigzag());
        for i in 0..=50 {
            let t = i as f32 / 50.0;
            assert_eq!(a.point_at(t), b.point_at(t));
        }
    }

    #[test]
    fn test_out_of_range_t_clamps_to_endpoints() {
        let spline = CatmullRom::new(zigzag());
        assert_eq!(spline.point_at(-0.5), spline.point_at(0.0));
        assert_eq!(spline.point_at(1.5), spline.point_at(1.0));
    }

    #[test]
    fn test_two_point_spline_is_a_segment() {
        let spline = CatmullRom::new(vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)]);
        let mid = spline.point_at(0.5);
        assert!((mid - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }
}
