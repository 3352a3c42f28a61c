use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use backdrop::cli::Cli;
use backdrop::{Orchestrator, Renderer, Viewport};

/// One wheel "line" of scroll in logical pixels
const SCROLL_LINE_HEIGHT: f32 = 60.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    orchestrator: Option<Orchestrator>,
    renderer: Option<Renderer>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            orchestrator: None,
            renderer: None,
        }
    }

    fn logical_viewport(&self, window: &Window) -> Viewport {
        let size = window.inner_size().to_logical::<f32>(window.scale_factor());
        Viewport::new(size.width, size.height)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Backdrop")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = self.logical_viewport(&window);
        let mut rng = Pcg64Mcg::from_entropy();
        let mut orchestrator = Orchestrator::new(viewport, self.cli.scene_config(), &mut rng);

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            &orchestrator.scene,
        )) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        info!(
            "scene ready: {} shapes, {} particles, viewport {}x{}",
            orchestrator.scene.shapes.len(),
            orchestrator.scene.particles.positions.len(),
            viewport.width,
            viewport.height
        );

        orchestrator.start();
        self.window = Some(window);
        self.orchestrator = Some(orchestrator);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(orchestrator) = &mut self.orchestrator {
                    orchestrator.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let (Some(window), Some(orchestrator), Some(renderer)) =
                    (&self.window, &mut self.orchestrator, &mut self.renderer)
                {
                    let scale_factor = window.scale_factor();
                    let logical = size.to_logical::<f32>(scale_factor);
                    orchestrator.resize(Viewport::new(logical.width, logical.height));
                    renderer.resize(size, scale_factor);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(orchestrator) = &mut self.orchestrator {
                    let scrolled = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE_HEIGHT,
                        MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => y as f32,
                    };
                    // Wheel-down means scrolling further down the page
                    orchestrator.add_scroll(-scrolled);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(orchestrator) = &mut self.orchestrator {
                    orchestrator.set_pointer(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(orchestrator), Some(renderer)) =
                    (&mut self.orchestrator, &mut self.renderer)
                {
                    orchestrator.tick();
                    if let Err(e) = renderer.render(&orchestrator.scene, &orchestrator.camera) {
                        error!("Render error: {e:#}");
                        orchestrator.stop();
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The running flag is the loop's cancellation point: once stop()
        // has been called no further redraws get scheduled
        let running = self
            .orchestrator
            .as_ref()
            .is_some_and(|orchestrator| orchestrator.is_running());
        if running {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
