//! Backdrop builder and event-loop host.
//!
//! [`Backdrop`] wires the particle field to a winit window and a wgpu
//! surface, then redraws continuously until the window is closed. Resize
//! and scale-factor events keep both the surface and the field's spawn
//! bounds matched to the window.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::BackdropError;
use crate::field::Field;
use crate::gpu::{GpuState, SurfaceGeometry};

const DEFAULT_TITLE: &str = "driftfield";

/// An ambient particle backdrop.
///
/// ```ignore
/// driftfield::Backdrop::new().run()?;
/// ```
///
/// `run` opens a window and blocks until it is closed.
pub struct Backdrop {
    seed: Option<u64>,
    title: String,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            seed: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Fix the random seed so every run spawns the same sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the backdrop. This blocks until the window is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.seed, self.title);
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: Option<Field>,
    seed: Option<u64>,
    title: String,
    started_at: Instant,
    init_error: Option<BackdropError>,
}

impl App {
    fn new(seed: Option<u64>, title: String) -> Self {
        Self {
            window: None,
            gpu_state: None,
            field: None,
            seed,
            title,
            started_at: Instant::now(),
            init_error: None,
        }
    }

    fn apply_geometry(&mut self, geometry: SurfaceGeometry) {
        if let Some(field) = &mut self.field {
            field.resize(geometry.logical_width, geometry.logical_height);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let geometry = SurfaceGeometry::from_window(size.width, size.height, window.scale_factor());
        let field = match self.seed {
            Some(seed) => Field::seeded(geometry.logical_width, geometry.logical_height, seed),
            None => Field::new(geometry.logical_width, geometry.logical_height),
        };

        match pollster::block_on(GpuState::new(window.clone(), field.visuals())) {
            Ok(gpu_state) => {
                log::info!(
                    "backdrop started: {:.0}x{:.0} layout px, scale {:.2}",
                    geometry.logical_width,
                    geometry.logical_height,
                    geometry.scale,
                );
                self.gpu_state = Some(gpu_state);
                self.field = Some(field);
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("GPU initialization failed: {e}");
                self.init_error = Some(BackdropError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                let scale_factor = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor())
                    .unwrap_or(1.0);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size, scale_factor);
                    let geometry = gpu_state.geometry();
                    self.apply_geometry(geometry);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let physical_size = self.window.as_ref().map(|w| w.inner_size());
                if let (Some(size), Some(gpu_state)) = (physical_size, &mut self.gpu_state) {
                    gpu_state.resize(size, scale_factor);
                    let geometry = gpu_state.geometry();
                    self.apply_geometry(geometry);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu_state), Some(field)) = (&mut self.gpu_state, &mut self.field) {
                    let timestamp_ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
                    field.tick(timestamp_ms);
                    let instances = field.instances();

                    match gpu_state.render(&instances) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                            if let Some(window) = &self.window {
                                gpu_state.resize(window.inner_size(), window.scale_factor());
                            }
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, shutting down");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("dropped a frame: {e:?}"),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
