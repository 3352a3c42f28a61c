mod particles;
mod shapes;
mod spiral;

pub use particles::ParticleCloud;
pub use shapes::{ShapedObject, OBJECT_COLOR};
pub use spiral::Spiral;

use rand::Rng;

use crate::types::{LayoutMode, MaterialKind, Viewport};

pub const OBJECT_SPACING: f32 = 4.0;
pub const PARTICLE_COUNT: usize = 200;

const ROTATION_SPEED_X: f32 = 0.1;
const ROTATION_SPEED_Y: f32 = 0.12;
const SPIRAL_ROTATION_SPEED: f32 = 0.15;

/// Scene construction parameters
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    pub spacing: f32,
    pub layout_mode: LayoutMode,
    pub material: MaterialKind,
    pub particle_count: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spacing: OBJECT_SPACING,
            layout_mode: LayoutMode::HeightScaled,
            material: MaterialKind::Toon,
            particle_count: PARTICLE_COUNT,
        }
    }
}

/// Owns the decorative scene content: three shaped meshes, the particle
/// cloud, and the spiral polyline
pub struct SceneAssembly {
    config: SceneConfig,
    pub shapes: Vec<ShapedObject>,
    pub particles: ParticleCloud,
    pub spiral: Spiral,
}

impl SceneAssembly {
    pub fn new<R: Rng>(viewport: Viewport, config: SceneConfig, rng: &mut R) -> Self {
        let shapes = shapes::create_shaped_objects(config.spacing, config.material);
        // Particle spread is a function of the shaped-object count, so the
        // cloud is generated after the shapes and from their length
        let particles = particles::generate(config.particle_count, config.spacing, shapes.len(), rng);
        let spiral = spiral::generate();

        let mut assembly = Self {
            config,
            shapes,
            particles,
            spiral,
        };
        assembly.adjust_positions(viewport);
        assembly
    }

    pub fn spacing(&self) -> f32 {
        self.config.spacing
    }

    /// Advance all rotations by one frame's delta time
    pub fn rotate(&mut self, delta: f32) {
        for shape in &mut self.shapes {
            shape.rotation.x += delta * ROTATION_SPEED_X;
            shape.rotation.y += delta * ROTATION_SPEED_Y;
        }

        self.spiral.rotation_y += delta * SPIRAL_ROTATION_SPEED;
    }

    /// Feed elapsed time to any time-varying shader material
    pub fn animate(&mut self, elapsed: f32) {
        for shape in &mut self.shapes {
            shape.material.set_time(elapsed);
        }
    }

    /// Recompute horizontal offsets from the viewport. Narrow viewports
    /// stack everything on the center line; wide ones alternate sides by
    /// object index. Idempotent for a given viewport.
    pub fn adjust_positions(&mut self, viewport: Viewport) {
        for (index, shape) in self.shapes.iter_mut().enumerate() {
            shape.position.x = if viewport.is_narrow() {
                0.0
            } else {
                let magnitude = offset_magnitude(self.config.layout_mode, viewport.height);
                if index % 2 == 0 {
                    magnitude
                } else {
                    -magnitude
                }
            };
        }
    }
}

fn offset_magnitude(mode: LayoutMode, height: f32) -> f32 {
    match mode {
        LayoutMode::HeightScaled => {
            if height <= 200.0 {
                10.0
            } else {
                2000.0 / height
            }
        }
        LayoutMode::FixedOffset => 2.0,
    }
}
