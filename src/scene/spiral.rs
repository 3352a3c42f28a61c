use glam::Vec3;

use crate::math::{hsl_to_rgb, CatmullRom};

/// Integer parameter range for the control points, scaled by 1/3
const PARAM_START: i32 = -50;
const PARAM_END: i32 = 50;
const PARAM_DIVISOR: f32 = 3.0;

/// Resample at 3x the control-point count
const RESAMPLE_FACTOR: f32 = 3.0;

/// Rainbow polyline fit through a parametric point set
pub struct Spiral {
    /// Resampled polyline points in local space
    pub points: Vec<Vec3>,
    /// Per-point color, hue cycled 0 -> 1 along the line
    pub colors: Vec<[f32; 3]>,
    /// Cumulative distance along the polyline, one entry per point
    pub distances: Vec<f32>,
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation_y: f32,
}

/// Sample `(t sin 3t, t, t cos 3t)` into control points, fit a Catmull-Rom
/// curve through them, and resample it into a hue-cycled polyline
pub fn generate() -> Spiral {
    let control_points: Vec<Vec3> = (PARAM_START..PARAM_END)
        .map(|i| {
            let t = i as f32 / PARAM_DIVISOR;
            Vec3::new(t * (3.0 * t).sin(), t, t * (3.0 * t).cos())
        })
        .collect();

    let spline = CatmullRom::new(control_points);
    let divisions = (RESAMPLE_FACTOR * spline.control_points().len() as f32).round() as usize;

    let mut points = Vec::with_capacity(divisions);
    let mut colors = Vec::with_capacity(divisions);

    for i in 0..divisions {
        let t = i as f32 / divisions as f32;
        points.push(spline.point_at(t));
        colors.push(hsl_to_rgb(t, 1.0, 0.5));
    }

    let distances = compute_line_distances(&points);

    Spiral {
        points,
        colors,
        distances,
        position: Vec3::new(0.0, -5.0, -20.0),
        scale: Vec3::ONE,
        rotation_y: 0.0,
    }
}

/// Cumulative polyline distances; required by any dashed or threshold
/// line rendering, so recompute whenever the geometry is rebuilt
fn compute_line_distances(points: &[Vec3]) -> Vec<f32> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total = 0.0;

    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += point.distance(points[i - 1]);
        }
        distances.push(total);
    }

    distances
}
