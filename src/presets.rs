//! Ready-made demo emitters.
//!
//! Each function returns the emitter configuration of one interactive
//! demo; [`by_name`] bundles it with the surface size and click behaviour
//! the viewer needs.
//!
//! ```
//! use pixie::presets;
//!
//! let demo = presets::by_name("burst").unwrap();
//! assert_eq!(demo.emitter.frequency, 0.0);
//! assert_eq!(demo.on_click, presets::OnClick::BurstAt(5));
//! ```

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::emitter::{EmitterConfig, ParticleEmitter};
use crate::spread::Spread;
use crate::sprite::sprites;
use crate::system::SystemConfig;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 9] = [
    "velocity",
    "angle",
    "angles",
    "mass",
    "position",
    "frequency",
    "burst",
    "bouncing",
    "smoke",
];

/// What a click on the surface does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnClick {
    Nothing,
    /// Emit one particle from the configured spawn area.
    Emit,
    /// Move the emitter to the pointer and emit this many particles.
    BurstAt(usize),
}

impl OnClick {
    /// Apply the click at simulation coordinates `(x, y)`.
    pub fn apply(self, emitter: &mut ParticleEmitter, x: f32, y: f32) {
        match self {
            OnClick::Nothing => {}
            OnClick::Emit => emitter.emit(),
            OnClick::BurstAt(count) => {
                emitter.set_origin(x, y);
                for _ in 0..count {
                    emitter.emit();
                }
            }
        }
    }
}

/// A preset bundled with its surface and pointer behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    pub system: SystemConfig,
    pub emitter: EmitterConfig,
    pub on_click: OnClick,
}

/// Look up a demo by name.
pub fn by_name(name: &str) -> Option<Demo> {
    let system = SystemConfig::default();
    let (system, emitter, on_click) = match name {
        "velocity" => (
            SystemConfig { height: 30, ..system },
            velocity(50.0, 0.0),
            OnClick::Nothing,
        ),
        "angle" => (system, angle(), OnClick::Nothing),
        "angles" => (system, angles(), OnClick::Nothing),
        "mass" => (system, mass(30.0, 0.0), OnClick::Emit),
        "position" => (system, position(25.0, 25.0, 50.0, 50.0), OnClick::Emit),
        "frequency" => (system, frequency(), OnClick::Nothing),
        "burst" => (system, burst(), OnClick::BurstAt(5)),
        "bouncing" => (system, bouncing(), OnClick::Nothing),
        "smoke" => (system, smoke(), OnClick::Nothing),
        _ => return None,
    };
    Some(Demo {
        system,
        emitter,
        on_click,
    })
}

/// Particles drifting right at `base + spread` pixels per second.
pub fn velocity(base: f32, spread: f32) -> EmitterConfig {
    EmitterConfig::new()
        .position(10.0, 5.0)
        .frequency(1.0)
        .velocity(Spread::new(base, spread))
        .lifetime(3.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// A quarter-turn fan of directions.
pub fn angle() -> EmitterConfig {
    EmitterConfig::new()
        .position(50.0, 50.0)
        .frequency(5.0)
        .velocity(Spread::new(50.0, 10.0))
        .angle(Spread::new(0.0, FRAC_PI_2))
        .lifetime(5.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// The quarter-turn fan written with range tuples.
pub fn angles() -> EmitterConfig {
    EmitterConfig::new()
        .position(50.0, 50.0)
        .frequency(10.0)
        .velocity([50.0, 10.0])
        .angle([0.0, FRAC_PI_2])
        .lifetime([5.0, 3.0])
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// Particles arcing under `base + spread` gravity.
pub fn mass(base: f32, spread: f32) -> EmitterConfig {
    EmitterConfig::new()
        .position(20.0, 50.0)
        .frequency(5.0)
        .velocity(50.0)
        .mass(Spread::new(base, spread))
        .lifetime(3.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// Slow particles spawned anywhere inside a rectangle.
pub fn position(x: f32, y: f32, width: f32, height: f32) -> EmitterConfig {
    EmitterConfig::new()
        .position(x, y)
        .area(width, height)
        .frequency(5.0)
        .velocity(3.0)
        .angle(Spread::new(0.0, TAU))
        .lifetime(3.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// An omnidirectional fountain at ten particles per second.
pub fn frequency() -> EmitterConfig {
    EmitterConfig::new()
        .position(50.0, 50.0)
        .frequency(10.0)
        .velocity(10.0)
        .angle(Spread::new(0.0, TAU))
        .lifetime(3.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// Emits nothing by itself; the host fires bursts with `emit()`.
pub fn burst() -> EmitterConfig {
    EmitterConfig::new()
        .position(50.0, 50.0)
        .frequency(0.0)
        .velocity(10.0)
        .angle(Spread::new(0.0, TAU))
        .lifetime(3.0)
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// Upward spray falling back onto a floor.
pub fn bouncing() -> EmitterConfig {
    EmitterConfig::new()
        .position(45.0, 80.0)
        .area(10.0, 0.0)
        .floor(90.0)
        .frequency(4.0)
        .velocity(Spread::new(40.0, 20.0))
        .angle(Spread::new(PI * 1.25, FRAC_PI_2))
        .mass(Spread::new(60.0, 20.0))
        .bounce(Spread::new(0.4, 0.4))
        .lifetime(Spread::new(4.0, 2.0))
        .variant(vec![sprites::BLUE_CIRCLE])
}

/// Rising smoke puffs with two animation tracks.
pub fn smoke() -> EmitterConfig {
    EmitterConfig::new()
        .position(50.0, 90.0)
        .frequency(10.0)
        .velocity(Spread::new(20.0, -5.0))
        .mass(5.0)
        .angle(Spread::new(PI * 1.5 - 0.2, 0.4))
        .lifetime(3.0)
        .variant(vec![
            sprites::SMOKE_1,
            sprites::SMOKE_2,
            sprites::SMOKE_3,
            sprites::SMOKE_4,
        ])
        .variant(vec![sprites::SMOKE_3, sprites::SMOKE_4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ParticlePool;

    #[test]
    fn test_every_name_builds() {
        let pool = ParticlePool::shared();
        for name in NAMES {
            let demo = by_name(name).unwrap();
            assert!(ParticleEmitter::new(demo.emitter, pool.clone()).is_ok(), "{name}");
        }
        assert!(by_name("fireworks").is_none());
    }

    #[test]
    fn test_click_actions() {
        let pool = ParticlePool::shared();
        let mut emitter = ParticleEmitter::new(burst(), pool).unwrap();

        OnClick::Nothing.apply(&mut emitter, 10.0, 10.0);
        assert!(emitter.is_empty());

        OnClick::Emit.apply(&mut emitter, 10.0, 10.0);
        assert_eq!(emitter.len(), 1);
        assert_eq!(emitter.particles()[0].position, glam::Vec2::new(50.0, 50.0));

        OnClick::BurstAt(5).apply(&mut emitter, 12.0, 34.0);
        assert_eq!(emitter.len(), 6);
        assert_eq!((emitter.config().x, emitter.config().y), (12.0, 34.0));
        assert!(emitter.particles()[1..]
            .iter()
            .all(|p| p.position == glam::Vec2::new(12.0, 34.0)));
    }

    #[test]
    fn test_tuple_and_spread_forms_agree() {
        let tuples = angles();
        assert_eq!(tuples.velocity, angle().velocity);
        assert_eq!(tuples.angle, angle().angle);
        assert_eq!(tuples.lifetime, Spread::new(5.0, 3.0));
    }

    #[test]
    fn test_velocity_demo_is_short() {
        let demo = by_name("velocity").unwrap();
        assert_eq!(demo.system.height, 30);
        assert_eq!(demo.system.width, 100);
    }

    #[test]
    fn test_smoke_rises() {
        let config = smoke();
        let (lo, hi) = config.angle.bounds();
        // Both ends point upward (negative y)
        assert!(lo.sin() < 0.0 && hi.sin() < 0.0);
        assert_eq!(config.variants.len(), 2);
    }
}
