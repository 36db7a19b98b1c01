//! Desktop viewer built on winit and wgpu.
//!
//! The window plays the host role for a [`ParticleSystem`]: redraw requests
//! are its frame scheduler, focus and occlusion events pause and resume the
//! loop, and left clicks are mapped into simulation pixels.
//!
//! ```no_run
//! let demo = pixie::presets::by_name("smoke").unwrap();
//! pixie::window::run("smoke", demo).unwrap();
//! ```

use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::emitter::ParticleEmitter;
use crate::error::HostError;
use crate::pool::ParticlePool;
use crate::presets::Demo;
use crate::present::{letterbox, Presenter};
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::sprite::SpriteAtlas;
use crate::surface::{Surface, SurfaceHost};
use crate::system::ParticleSystem;

/// Called with simulation coordinates when the surface is clicked.
pub type PointerHandler = Box<dyn FnMut(&mut ParticleSystem, f32, f32)>;

/// Frames between window title refreshes.
const TITLE_INTERVAL: u64 = 30;

/// Schedules frames as window redraws.
///
/// Only the most recent token is kept; winit coalesces redraw requests
/// into one `RedrawRequested` anyway.
#[derive(Default)]
struct RedrawScheduler {
    pending: Option<FrameToken>,
    window: Option<Arc<Window>>,
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self, token: FrameToken) {
        self.pending = Some(token);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Sizes the window to the surface's natural scale.
struct WindowHost<'a>(&'a Window);

impl SurfaceHost for WindowHost<'_> {
    fn attach(&mut self, surface: &Surface) {
        let bounds = surface.natural_bounds();
        let size = PhysicalSize::new(bounds.width as u32, bounds.height as u32);
        if let Some(applied) = self.0.request_inner_size(size) {
            log::debug!("window sized to {}x{}", applied.width, applied.height);
        }
    }
}

/// A window showing one particle system.
pub struct Viewer {
    system: ParticleSystem,
    title: String,
    on_click: Option<PointerHandler>,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    scheduler: RedrawScheduler,
    cursor: Option<PhysicalPosition<f64>>,
    epoch: Instant,
    error: Option<HostError>,
}

impl Viewer {
    pub fn new(system: ParticleSystem, title: impl Into<String>) -> Self {
        Self {
            system,
            title: title.into(),
            on_click: None,
            window: None,
            presenter: None,
            scheduler: RedrawScheduler::default(),
            cursor: None,
            epoch: Instant::now(),
            error: None,
        }
    }

    /// Handle left clicks on the surface.
    pub fn on_click(mut self, handler: impl FnMut(&mut ParticleSystem, f32, f32) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Run until the window is closed.
    pub fn run(mut self) -> Result<(), HostError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let attrs = Window::default_attributes().with_title(self.title.clone());
        let window = Arc::new(event_loop.create_window(attrs)?);
        self.system.mount(Some(&mut WindowHost(&window)));

        let size = (self.system.width(), self.system.height());
        let presenter = pollster::block_on(Presenter::new(window.clone(), size))?;
        self.system.set_display_bounds(letterbox(presenter.size(), size));

        self.scheduler.window = Some(window.clone());
        self.window = Some(window);
        self.presenter = Some(presenter);
        self.system.start(&mut self.scheduler);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(token) = self.scheduler.pending.take() {
            let now = self.now_ms();
            self.system.frame(token, now, &mut self.scheduler);
        }

        let Some(presenter) = &mut self.presenter else {
            return;
        };
        match presenter.present(self.system.surface()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                presenter.resize(presenter.size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, closing viewer");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }

        let clock = self.system.frame_clock();
        if clock.frame() % TITLE_INTERVAL == 0 {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} fps", self.title, clock.fps()));
            }
        }
    }

    fn click(&mut self) {
        let (Some(cursor), Some(handler)) = (self.cursor, &mut self.on_click) else {
            return;
        };
        let (x, y) = self.system.map_coords(cursor.x as f32, cursor.y as f32);
        log::trace!("click at ({x:.1}, {y:.1})");
        handler(&mut self.system, x, y);
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.system.start(&mut self.scheduler);
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            log::error!("failed to open viewer: {err}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.system.stop();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.system.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(physical_size);
                    let size = (self.system.width(), self.system.height());
                    self.system.set_display_bounds(letterbox(presenter.size(), size));
                }
            }
            WindowEvent::Focused(true) => self.system.regain_focus(),
            WindowEvent::Occluded(hidden) => {
                if hidden {
                    self.system.stop();
                } else {
                    self.system.start(&mut self.scheduler);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.click(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open a window running `demo`.
pub fn run(name: &str, demo: Demo) -> Result<(), HostError> {
    let emitter = ParticleEmitter::new(demo.emitter, ParticlePool::shared())?;
    let system = ParticleSystem::new(demo.system, vec![emitter], Rc::new(SpriteAtlas::builtin()));
    let on_click = demo.on_click;

    log::info!("running demo '{name}'");
    Viewer::new(system, format!("pixie - {name}"))
        .on_click(move |system, x, y| {
            if let Some(emitter) = system.emitters_mut().first_mut() {
                on_click.apply(emitter, x, y);
            }
        })
        .run()
}
