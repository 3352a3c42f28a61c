pub mod camera;
pub mod cli;
pub mod clock;
pub mod geometry;
pub mod math;
pub mod orchestrator;
pub mod renderer;
pub mod scene;
pub mod types;

pub use camera::Camera;
pub use clock::Clock;
pub use orchestrator::Orchestrator;
pub use renderer::Renderer;
pub use scene::{SceneAssembly, SceneConfig};
pub use types::{LayoutMode, MaterialKind, Viewport};
