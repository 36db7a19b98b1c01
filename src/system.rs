//! Particle system: emitters, a drawing surface and the frame loop.
//!
//! Each frame the system steps every emitter in order, clears its surface
//! and lets every emitter draw through a closure that blits from the
//! shared sprite atlas.
//!
//! ```text
//! scheduler ─► frame(token, now) ─► update(dt) ─► emitter.update(dt) ...
//!                                 └► render()   ─► emitter.render(draw) ...
//! ```
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pixie::prelude::*;
//!
//! let pool = ParticlePool::shared();
//! let smoke = ParticleEmitter::new(pixie::presets::smoke(), pool).unwrap();
//! let mut system = ParticleSystem::new(
//!     SystemConfig::default(),
//!     vec![smoke],
//!     Rc::new(SpriteAtlas::builtin()),
//! );
//!
//! let mut scheduler = ManualScheduler::new();
//! system.start(&mut scheduler);
//! for i in 0..60 {
//!     let token = scheduler.pop().unwrap();
//!     system.frame(token, i as f64 * 16.0, &mut scheduler);
//! }
//! assert!(!system.emitters()[0].is_empty());
//! ```

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::emitter::{ParticleEmitter, Simulate};
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::sprite::SpriteAtlas;
use crate::surface::{DisplayBounds, Surface, SurfaceHost};
use crate::time::FrameClock;

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Simulation width in pixels.
    pub width: u32,
    /// Simulation height in pixels.
    pub height: u32,
    /// Device pixels per simulation pixel.
    pub scale: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 3,
        }
    }
}

/// A set of emitters drawn onto one surface.
pub struct ParticleSystem<E: Simulate = ParticleEmitter> {
    emitters: Vec<E>,
    surface: Surface,
    /// `None` for headless systems.
    atlas: Option<Rc<SpriteAtlas>>,
    bounds: DisplayBounds,
    clock: FrameClock,
    active: bool,
    /// Bumped on every `start()`; frames from older chains are ignored.
    generation: u64,
}

impl<E: Simulate> ParticleSystem<E> {
    /// Create a system that draws into a raster surface.
    pub fn new(config: SystemConfig, emitters: Vec<E>, atlas: Rc<SpriteAtlas>) -> Self {
        log::debug!(
            "new particle system {}x{} @{}x with {} emitter(s)",
            config.width,
            config.height,
            config.scale,
            emitters.len()
        );
        let surface = Surface::raster(config.width, config.height, config.scale);
        Self::with_surface(surface, emitters, Some(atlas))
    }

    /// Create a system for static renders.
    ///
    /// It still simulates and reports its size, but draws nothing.
    pub fn headless(config: SystemConfig, emitters: Vec<E>) -> Self {
        Self::with_surface(Surface::headless(config.width, config.height), emitters, None)
    }

    fn with_surface(surface: Surface, emitters: Vec<E>, atlas: Option<Rc<SpriteAtlas>>) -> Self {
        Self {
            emitters,
            bounds: surface.natural_bounds(),
            surface,
            atlas,
            clock: FrameClock::new(),
            active: false,
            generation: 0,
        }
    }

    /// Start the frame loop.
    ///
    /// Does nothing if the loop is already running.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.active {
            return;
        }
        self.active = true;
        self.generation += 1;
        self.clock.reset();
        log::debug!("particle system started (generation {})", self.generation);
        scheduler.request_frame(FrameToken(self.generation));
    }

    /// Stop the frame loop. Particles and emitter clocks are kept.
    pub fn stop(&mut self) {
        if self.active {
            log::debug!("particle system stopped");
        }
        self.active = false;
    }

    /// Run one scheduled frame.
    ///
    /// Returns `false` without doing anything if the system is stopped or
    /// `token` belongs to an earlier loop. Otherwise the next frame is
    /// requested before any work is done.
    pub fn frame(
        &mut self,
        token: FrameToken,
        now_ms: f64,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if !self.active || token.0 != self.generation {
            log::trace!("dropping stale frame (generation {})", token.0);
            return false;
        }
        scheduler.request_frame(token);

        let dt = self.clock.tick(now_ms);
        self.update(dt as f32);
        self.render();
        true
    }

    /// The host regained focus; the next frame will have a delta of zero.
    pub fn regain_focus(&mut self) {
        log::debug!("focus regained, resetting frame clock");
        self.clock.reset();
    }

    /// Step every emitter by `dt_ms`, in order.
    pub fn update(&mut self, dt_ms: f32) {
        for emitter in &mut self.emitters {
            emitter.update(dt_ms);
        }
    }

    /// Clear the surface and draw every emitter.
    pub fn render(&mut self) {
        self.surface.clear();
        let Some(atlas) = &self.atlas else {
            return;
        };
        let surface = &mut self.surface;
        for emitter in &self.emitters {
            emitter.render(&mut |sprite, x, y| surface.blit(atlas, sprite, x, y));
        }
    }

    /// Attach the surface to `host`. Does nothing without a host.
    pub fn mount(&self, host: Option<&mut dyn SurfaceHost>) {
        if let Some(host) = host {
            host.attach(&self.surface);
        }
    }

    /// Convert a pointer position in host coordinates to simulation pixels.
    pub fn map_coords(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        self.surface.map_coords(&self.bounds, screen_x, screen_y)
    }

    /// Record where the host currently displays the surface.
    pub fn set_display_bounds(&mut self, bounds: DisplayBounds) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn display_bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Swap in a new emitter list, returning the old one.
    pub fn replace_emitters(&mut self, emitters: Vec<E>) -> Vec<E> {
        std::mem::replace(&mut self.emitters, emitters)
    }

    #[inline]
    pub fn emitters(&self) -> &[E] {
        &self.emitters
    }

    #[inline]
    pub fn emitters_mut(&mut self) -> &mut Vec<E> {
        &mut self.emitters
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frame timing, including the FPS estimate.
    #[inline]
    pub fn frame_clock(&self) -> &FrameClock {
        &self.clock
    }
}
