// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::scene::{SceneConfig, OBJECT_SPACING, PARTICLE_COUNT};
use crate::types::{LayoutMode, MaterialKind};

#[derive(Parser, Debug, Clone)]
#[command(name = "backdrop")]
#[command(about = "Portfolio backdrop renderer", long_about = None)]
pub struct Cli {
    /// Wide-viewport horizontal layout rule
    #[arg(long, value_enum, default_value_t = LayoutMode::HeightScaled)]
    pub layout: LayoutMode,

    /// Material applied to the shaped objects
    #[arg(long, value_enum, default_value_t = MaterialKind::Toon)]
    pub material: MaterialKind,

    /// Number of background particles
    #[arg(long, default_value_t = PARTICLE_COUNT)]
    pub particles: usize,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Cli {
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            spacing: OBJECT_SPACING,
            layout_mode: self.layout,
            material: self.material,
            particle_count: self.particles,
        }
    }
}
