use clap::ValueEnum;

/// Logical viewport dimensions, updated only by resize events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Stacked, centered layout below this width (mobile breakpoint)
    pub fn is_narrow(&self) -> bool {
        self.width < 1024.0
    }
}

/// Closed set of decorative mesh primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Octahedron,
    Cone,
    Sphere,
    Torus,
    Cuboid,
}

/// Material selection, resolved once at scene construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaterialKind {
    /// Stepped toon lighting
    Toon,
    /// Scanline shader driven by elapsed time
    Hologram,
    /// Color-cycling shader driven by elapsed time
    TimeShader,
}

/// Shader material with its animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Toon,
    Hologram { time: f32 },
    TimeShader { time: f32 },
}

impl Material {
    pub fn from_kind(kind: MaterialKind) -> Self {
        match kind {
            MaterialKind::Toon => Material::Toon,
            MaterialKind::Hologram => Material::Hologram { time: 0.0 },
            MaterialKind::TimeShader => Material::TimeShader { time: 0.0 },
        }
    }

    /// Write elapsed time into the shader's time parameter, if it has one
    pub fn set_time(&mut self, elapsed: f32) {
        match self {
            Material::Toon => {}
            Material::Hologram { time } | Material::TimeShader { time } => *time = elapsed,
        }
    }

    pub fn time(&self) -> Option<f32> {
        match self {
            Material::Toon => None,
            Material::Hologram { time } | Material::TimeShader { time } => Some(*time),
        }
    }
}

/// Horizontal layout rule for wide viewports
///
/// The two historical site variants disagreed on wide-viewport placement,
/// so both are kept as configuration instead of hardcoding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutMode {
    /// Magnitude 10 for heights <= 200, otherwise 2000 / height
    HeightScaled,
    /// Constant magnitude 2
    FixedOffset,
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub right: [f32; 3],
    pub _pad1: f32,
    pub up: [f32; 3],
    pub _pad2: f32,
    pub position: [f32; 3],
    pub _pad3: f32,
}

/// Per-object uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub time: f32,
    pub material: u32,
    pub _pad: [u32; 3],
}

/// Polyline uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniform {
    pub model: [[f32; 4]; 4],
    pub width: f32,
    pub _pad: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_aspect_ratio() {
        let viewport = Viewport::new(1280.0, 720.0);
        assert!((viewport.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_narrow_breakpoint() {
        assert!(Viewport::new(800.0, 600.0).is_narrow());
        assert!(Viewport::new(1023.9, 600.0).is_narrow());
        assert!(!Viewport::new(1024.0, 600.0).is_narrow());
        assert!(!Viewport::new(1920.0, 1080.0).is_narrow());
    }

    #[test]
    fn test_toon_material_ignores_time() {
        let mut material = Material::from_kind(MaterialKind::Toon);
        material.set_time(3.5);
        assert_eq!(material.time(), None);
    }

    #[test]
    fn test_shader_materials_track_time() {
        for kind in [MaterialKind::Hologram, MaterialKind::TimeShader] {
            let mut material = Material::from_kind(kind);
            assert_eq!(material.time(), Some(0.0));
            material.set_time(1.25);
            assert_eq!(material.time(), Some(1.25));
        }
    }

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ObjectUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<LineUniform>() % 16, 0);
    }
}
