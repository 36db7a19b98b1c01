//! # pixie - pixel-art particle emitters
//!
//! Small CPU particle simulations drawn as sprites onto a low-resolution
//! surface, meant to be scaled up with nearest filtering.
//!
//! pixie handles the bookkeeping (emission timing, particle recycling, frame
//! scheduling) so a demo only has to describe what its particles look like
//! and how they move.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use pixie::prelude::*;
//! use pixie::sprite::sprites;
//!
//! let pool = ParticlePool::shared();
//! let fountain = EmitterConfig::new()
//!     .position(50.0, 90.0)
//!     .frequency(20.0)
//!     .velocity(Spread::new(40.0, 10.0))
//!     .angle(Spread::new(4.3, 0.8))
//!     .mass(30.0)
//!     .lifetime(2.0)
//!     .variant(vec![sprites::BLUE_CIRCLE]);
//!
//! let emitter = ParticleEmitter::new(fountain, pool).unwrap();
//! let mut system = ParticleSystem::new(
//!     SystemConfig::default(),
//!     vec![emitter],
//!     Rc::new(SpriteAtlas::builtin()),
//! );
//!
//! system.update(500.0);
//! system.render();
//! assert_eq!(system.emitters()[0].len(), 10);
//! ```
//!
//! ## Core Concepts
//!
//! ### Spreads
//!
//! Every random attribute is a [`Spread`]: a base value plus a random
//! offset in `[0, spread)`. Plain numbers and `[base, spread]` pairs convert
//! into one, in code and in JSON.
//!
//! ### Emitters
//!
//! A [`ParticleEmitter`] spawns particles inside a rectangle at a fixed
//! rate, moves them with constant velocity plus gravity (`mass`) and
//! bounces them off an optional floor. Expired particles go back to a
//! [`ParticlePool`] that any number of emitters can share.
//!
//! ### Sprites
//!
//! Each particle follows one *variant*, a list of [`Sprite`] frames played
//! once over its lifetime. Frames are rectangles in a [`SpriteAtlas`].
//!
//! ### Systems
//!
//! A [`ParticleSystem`] owns a [`Surface`] and a list of emitters. Hosts
//! drive it through a [`FrameScheduler`]; frames carry a [`FrameToken`] so
//! a stopped loop can never be revived by a late callback.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `window` | yes | `window` module and the `pixie` demo binary (wgpu + winit) |

pub mod emitter;
pub mod error;
pub mod particle;
pub mod pool;
pub mod presets;
pub mod scheduler;
pub mod spread;
pub mod sprite;
pub mod surface;
pub mod system;
pub mod time;
#[cfg(feature = "window")]
mod present;
#[cfg(feature = "window")]
pub mod window;

pub use emitter::{EmitterConfig, EmitterUpdate, ParticleEmitter, Simulate};
pub use error::{AtlasError, ConfigError};
#[cfg(feature = "window")]
pub use error::HostError;
pub use glam::Vec2;
pub use particle::Particle;
pub use pool::{ParticlePool, PoolHandle};
pub use scheduler::{FrameScheduler, FrameToken, ManualScheduler};
pub use spread::Spread;
pub use sprite::{Sprite, SpriteAtlas};
pub use surface::{DisplayBounds, Surface, SurfaceHost};
pub use system::{ParticleSystem, SystemConfig};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```
/// use pixie::prelude::*;
/// ```
pub mod prelude {
    pub use crate::emitter::{EmitterConfig, EmitterUpdate, ParticleEmitter, Simulate};
    pub use crate::pool::{ParticlePool, PoolHandle};
    pub use crate::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
    pub use crate::spread::Spread;
    pub use crate::sprite::{Sprite, SpriteAtlas};
    pub use crate::surface::{DisplayBounds, Surface};
    pub use crate::system::{ParticleSystem, SystemConfig};
    pub use crate::Vec2;
}
