use log::debug;
use rand::Rng;

use crate::camera::Camera;
use crate::clock::{Clock, Tick};
use crate::scene::{SceneAssembly, SceneConfig};
use crate::types::Viewport;

/// Owns the camera, clock, and input state, and drives the scene through
/// the per-frame update cycle
///
/// All mutation happens on the event-loop thread, from `tick`, `resize`,
/// or the input setters. The loop itself lives with the window event
/// handler; `start`/`stop` control whether further frames get scheduled.
pub struct Orchestrator {
    pub scene: SceneAssembly,
    pub camera: Camera,
    clock: Clock,
    viewport: Viewport,
    scroll_offset: f32,
    pointer: (f32, f32),
    running: bool,
}

impl Orchestrator {
    pub fn new<R: Rng>(viewport: Viewport, config: SceneConfig, rng: &mut R) -> Self {
        Self {
            scene: SceneAssembly::new(viewport, config, rng),
            camera: Camera::new(viewport.aspect_ratio()),
            clock: Clock::new(),
            viewport,
            scroll_offset: 0.0,
            pointer: (0.0, 0.0),
            running: false,
        }
    }

    /// Begin the animation from a fresh clock
    pub fn start(&mut self) {
        self.clock.reset();
        self.running = true;
    }

    /// Stop scheduling further frames; the next `about_to_wait` sees this
    /// and leaves the redraw unrequested
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest vertical scroll position; clamped so the column cannot be
    /// scrolled above its first section
    pub fn add_scroll(&mut self, delta: f32) {
        self.scroll_offset = (self.scroll_offset + delta).max(0.0);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        debug!("pointer: ({}, {})", x, y);
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// One update cycle: read the clock, move the camera to the scrolled
    /// section, and advance the scene's rotations and shader time
    pub fn tick(&mut self) -> Tick {
        let tick = self.clock.tick();

        self.camera
            .follow_scroll(self.scroll_offset, self.viewport, self.scene.spacing());
        self.scene.rotate(tick.delta);
        self.scene.animate(tick.elapsed);

        tick
    }

    /// Apply a viewport change: reflow object positions and update the
    /// camera projection. Renderer surface sizing is the caller's side.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scene.adjust_positions(viewport);
        self.camera.set_aspect_ratio(viewport.aspect_ratio());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn orchestrator(viewport: Viewport) -> Orchestrator {
        let mut rng = Pcg32::seed_from_u64(3);
        Orchestrator::new(viewport, SceneConfig::default(), &mut rng)
    }

    #[test]
    fn test_lifecycle_flags() {
        let mut orc = orchestrator(Viewport::new(1280.0, 720.0));
        assert!(!orc.is_running());
        orc.start();
        assert!(orc.is_running());
        orc.stop();
        assert!(!orc.is_running());
    }

    #[test]
    fn test_tick_advances_rotations() {
        let mut orc = orchestrator(Viewport::new(1280.0, 720.0));
        orc.start();

        let before = orc.scene.spiral.rotation_y;
        std::thread::sleep(std::time::Duration::from_millis(5));
        let tick = orc.tick();

        assert!(tick.delta > 0.0);
        assert!(orc.scene.spiral.rotation_y > before);
    }

    #[test]
    fn test_scroll_moves_camera_down_one_slot_per_viewport_height() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut orc = orchestrator(viewport);
        orc.start();

        orc.add_scroll(720.0);
        orc.tick();
        assert!((orc.camera.position.y + orc.scene.spacing()).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_clamped_at_top() {
        let mut orc = orchestrator(Viewport::new(1280.0, 720.0));
        orc.add_scroll(-500.0);
        assert_eq!(orc.scroll_offset(), 0.0);

        orc.add_scroll(300.0);
        orc.add_scroll(-1000.0);
        assert_eq!(orc.scroll_offset(), 0.0);
    }

    #[test]
    fn test_resize_reflows_scene_and_camera() {
        let mut orc = orchestrator(Viewport::new(1200.0, 400.0));
        assert_eq!(orc.scene.shapes[0].position.x, 5.0);

        let narrow = Viewport::new(800.0, 600.0);
        orc.resize(narrow);
        assert_eq!(orc.viewport(), narrow);
        assert_eq!(orc.scene.shapes[0].position.x, 0.0);
        assert!((orc.camera.aspect_ratio - narrow.aspect_ratio()).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_latest_value_wins() {
        let mut orc = orchestrator(Viewport::new(1280.0, 720.0));
        orc.set_pointer(10.0, 20.0);
        orc.set_pointer(30.0, 40.0);
        assert_eq!(orc.pointer(), (30.0, 40.0));
    }
}
