//! Particle emitters.
//!
//! A [`ParticleEmitter`] owns a configuration and the list of particles it
//! has emitted. Each call to [`update`](ParticleEmitter::update) spawns new
//! particles according to `frequency`, integrates the live ones and
//! returns expired records to the shared [`ParticlePool`](crate::ParticlePool).
//!
//! # Physics
//!
//! Per step of `s` seconds, for every particle:
//!
//! ```text
//! position   += velocity * s
//! velocity.y += mass * s
//! age        += s
//! if y > floor { velocity.y *= -bounce; y = floor }
//! ```
//!
//! Emission happens before integration, so particles born during a step
//! are integrated by that same step.
//!
//! # Example
//!
//! ```
//! use pixie::{EmitterConfig, ParticleEmitter, ParticlePool, Spread};
//! use pixie::sprite::sprites;
//!
//! let config = EmitterConfig::new()
//!     .position(50.0, 50.0)
//!     .frequency(10.0)
//!     .velocity(Spread::new(40.0, 10.0))
//!     .lifetime(2.0)
//!     .variant(vec![sprites::BLUE_CIRCLE]);
//!
//! let mut emitter = ParticleEmitter::new(config, ParticlePool::shared()).unwrap();
//! emitter.update(1000.0);
//! assert_eq!(emitter.len(), 10);
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::particle::Particle;
use crate::pool::PoolHandle;
use crate::spread::Spread;
use crate::sprite::Sprite;

/// Something a [`ParticleSystem`](crate::ParticleSystem) can step and draw.
///
/// Implemented by [`ParticleEmitter`]; hosts can plug in their own types.
pub trait Simulate {
    /// Advance by `dt_ms` milliseconds.
    fn update(&mut self, dt_ms: f32);

    /// Call `draw(sprite, x, y)` once per visible particle.
    fn render(&self, draw: &mut dyn FnMut(&Sprite, f32, f32));
}

/// Emitter configuration.
///
/// Serialized in camelCase so it can be passed straight through as
/// hydration props. `life` is accepted as an alias of `lifetime`, and the
/// flat `velocitySpread`/`angleSpread`/`massSpread`/`lifeSpread`/
/// `bounceSpread` keys override the spread of the matching attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EmitterConfigRepr", rename_all = "camelCase")]
pub struct EmitterConfig {
    /// Left edge of the spawn area.
    pub x: f32,
    /// Top edge of the spawn area.
    pub y: f32,
    /// Width of the spawn area in pixels.
    pub width: f32,
    /// Height of the spawn area in pixels.
    pub height: f32,
    /// Y coordinate particles bounce off. `None` means no floor.
    pub floor: Option<f32>,
    /// Particles emitted per second. Zero or less disables automatic emission.
    pub frequency: f32,
    /// Initial speed in pixels per second.
    pub velocity: Spread,
    /// Initial direction in radians.
    pub angle: Spread,
    /// Downward acceleration multiplier.
    pub mass: Spread,
    /// Seconds each particle lives.
    pub lifetime: Spread,
    /// Restitution factor on floor contact (0–1).
    pub bounce: Spread,
    /// Sprite tracks; each particle picks one at random and animates
    /// through it over its lifetime.
    pub variants: Vec<Vec<Sprite>>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            floor: None,
            frequency: 1.0,
            velocity: Spread::default(),
            angle: Spread::default(),
            mass: Spread::default(),
            lifetime: Spread::default(),
            bounce: Spread::default(),
            variants: Vec::new(),
        }
    }
}

/// Accepts both the nested and the flat base+spread shapes.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EmitterConfigRepr {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    floor: Option<f32>,
    frequency: f32,
    velocity: Spread,
    velocity_spread: Option<f32>,
    angle: Spread,
    angle_spread: Option<f32>,
    mass: Spread,
    mass_spread: Option<f32>,
    #[serde(alias = "life")]
    lifetime: Spread,
    #[serde(alias = "lifeSpread")]
    lifetime_spread: Option<f32>,
    bounce: Spread,
    bounce_spread: Option<f32>,
    variants: Vec<Vec<Sprite>>,
}

impl Default for EmitterConfigRepr {
    fn default() -> Self {
        let config = EmitterConfig::default();
        Self {
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            floor: config.floor,
            frequency: config.frequency,
            velocity: config.velocity,
            velocity_spread: None,
            angle: config.angle,
            angle_spread: None,
            mass: config.mass,
            mass_spread: None,
            lifetime: config.lifetime,
            lifetime_spread: None,
            bounce: config.bounce,
            bounce_spread: None,
            variants: config.variants,
        }
    }
}

impl From<EmitterConfigRepr> for EmitterConfig {
    fn from(repr: EmitterConfigRepr) -> Self {
        let mut config = Self {
            x: repr.x,
            y: repr.y,
            width: repr.width,
            height: repr.height,
            floor: repr.floor,
            frequency: repr.frequency,
            velocity: repr.velocity,
            angle: repr.angle,
            mass: repr.mass,
            lifetime: repr.lifetime,
            bounce: repr.bounce,
            variants: repr.variants,
        };
        set(&mut config.velocity.spread, repr.velocity_spread);
        set(&mut config.angle.spread, repr.angle_spread);
        set(&mut config.mass.spread, repr.mass_spread);
        set(&mut config.lifetime.spread, repr.lifetime_spread);
        set(&mut config.bounce.spread, repr.bounce_spread);
        config
    }
}

impl EmitterConfig {
    /// Default configuration: one particle per second, no sprites yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-left corner of the spawn area.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the spawn area size.
    pub fn area(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the floor particles bounce off.
    pub fn floor(mut self, y: f32) -> Self {
        self.floor = Some(y);
        self
    }

    /// Set the emission rate in particles per second.
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn velocity(mut self, velocity: impl Into<Spread>) -> Self {
        self.velocity = velocity.into();
        self
    }

    pub fn angle(mut self, angle: impl Into<Spread>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn mass(mut self, mass: impl Into<Spread>) -> Self {
        self.mass = mass.into();
        self
    }

    pub fn lifetime(mut self, lifetime: impl Into<Spread>) -> Self {
        self.lifetime = lifetime.into();
        self
    }

    pub fn bounce(mut self, bounce: impl Into<Spread>) -> Self {
        self.bounce = bounce.into();
        self
    }

    /// Append a sprite track.
    pub fn variant(mut self, frames: Vec<Sprite>) -> Self {
        self.variants.push(frames);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for client-side rehydration.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A partial configuration, merged field by field into a live emitter.
///
/// Random attributes expose their base and spread separately so a control
/// can move one without touching the other.
///
/// ```
/// use pixie::EmitterUpdate;
///
/// let update = EmitterUpdate::from_json(r#"{ "velocitySpread": 20, "floor": null }"#).unwrap();
/// assert_eq!(update.velocity_spread, Some(20.0));
/// assert_eq!(update.floor, Some(None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// `Some(None)` removes the floor.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub floor: Option<Option<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_spread: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_spread: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_spread: Option<f32>,
    #[serde(alias = "life", skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<f32>,
    #[serde(alias = "lifeSpread", skip_serializing_if = "Option::is_none")]
    pub lifetime_spread: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_spread: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Vec<Sprite>>>,
}

/// Distinguishes an explicit `null` from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl EmitterUpdate {
    /// Parse a partial update from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge every present field into `config`.
    ///
    /// Does not validate; [`ParticleEmitter::apply`] checks variants first.
    pub fn merge_into(self, config: &mut EmitterConfig) {
        set(&mut config.x, self.x);
        set(&mut config.y, self.y);
        set(&mut config.width, self.width);
        set(&mut config.height, self.height);
        set(&mut config.floor, self.floor);
        set(&mut config.frequency, self.frequency);
        set(&mut config.velocity.base, self.velocity);
        set(&mut config.velocity.spread, self.velocity_spread);
        set(&mut config.angle.base, self.angle);
        set(&mut config.angle.spread, self.angle_spread);
        set(&mut config.mass.base, self.mass);
        set(&mut config.mass.spread, self.mass_spread);
        set(&mut config.lifetime.base, self.lifetime);
        set(&mut config.lifetime.spread, self.lifetime_spread);
        set(&mut config.bounce.base, self.bounce);
        set(&mut config.bounce.spread, self.bounce_spread);
        set(&mut config.variants, self.variants);
    }
}

fn validate_variants(variants: &[Vec<Sprite>]) -> Result<(), ConfigError> {
    if variants.is_empty() {
        return Err(ConfigError::NoVariants);
    }
    match variants.iter().position(Vec::is_empty) {
        Some(index) => Err(ConfigError::EmptyVariant(index)),
        None => Ok(()),
    }
}

/// A configured source of particles.
#[derive(Debug)]
pub struct ParticleEmitter {
    config: EmitterConfig,
    particles: Vec<Particle>,
    /// Seconds accumulated towards the next automatic emission.
    clock: f32,
    pool: PoolHandle,
    rng: SmallRng,
}

impl ParticleEmitter {
    /// Create an emitter drawing records from `pool`.
    ///
    /// Fails if `config.variants` is empty or contains an empty track.
    pub fn new(config: EmitterConfig, pool: PoolHandle) -> Result<Self, ConfigError> {
        validate_variants(&config.variants)?;
        log::debug!(
            "new emitter at ({}, {}) emitting {}/s with {} variant(s)",
            config.x,
            config.y,
            config.frequency,
            config.variants.len()
        );
        Ok(Self {
            config,
            particles: Vec::new(),
            clock: 0.0,
            pool,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Use a seeded RNG so emissions are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Emit exactly one particle, regardless of `frequency`.
    pub fn emit(&mut self) {
        let mut particle = self.pool.borrow_mut().acquire();
        let config = &self.config;
        let rng = &mut self.rng;

        let speed = config.velocity.sample(rng);
        let angle = config.angle.sample(rng);
        particle.position = Vec2::new(
            config.x + config.width * rng.gen::<f32>(),
            config.y + config.height * rng.gen::<f32>(),
        );
        particle.velocity = Vec2::from_angle(angle) * speed;
        particle.mass = config.mass.sample(rng);
        particle.lifetime = config.lifetime.sample(rng);
        particle.bounce = config.bounce.sample(rng);
        particle.age = 0.0;
        particle.variant = rng.gen_range(0..config.variants.len());

        self.particles.push(particle);
    }

    /// Advance the emitter by `dt_ms` milliseconds.
    ///
    /// Returns the number of particles emitted during the step. There is
    /// no cap: a long step at a high frequency emits a whole burst.
    pub fn update(&mut self, dt_ms: f32) -> usize {
        let seconds = dt_ms / 1000.0;
        let frequency = self.config.frequency;

        let mut emitted = 0;
        if frequency > 0.0 && frequency.is_finite() {
            self.clock = (self.clock + seconds).max(0.0);
            let due = (self.clock * frequency).floor();
            if due >= 1.0 {
                self.clock = (self.clock - due / frequency).max(0.0);
                emitted = due as usize;
                for _ in 0..emitted {
                    self.emit();
                }
                log::trace!("emitted {} ({} active)", emitted, self.particles.len());
            }
        }

        let floor = self.config.floor;
        let mut pool = self.pool.borrow_mut();
        self.particles.retain_mut(|p| {
            p.position += p.velocity * seconds;
            p.velocity.y += p.mass * seconds;
            p.age += seconds;
            if let Some(floor) = floor {
                if p.position.y > floor {
                    p.velocity.y *= -p.bounce;
                    p.position.y = floor;
                }
            }
            if p.is_expired() {
                pool.release(*p);
                false
            } else {
                true
            }
        });

        emitted
    }

    /// Call `draw(sprite, x, y)` for every live particle.
    ///
    /// The frame is picked from the particle's track by lifecycle progress.
    pub fn render<F: FnMut(&Sprite, f32, f32)>(&self, mut draw: F) {
        for particle in &self.particles {
            let Some(track) = self
                .config
                .variants
                .get(particle.variant)
                .or_else(|| self.config.variants.last())
            else {
                continue;
            };
            let last = track.len().saturating_sub(1);
            let index = ((particle.progress() * track.len() as f32) as usize).min(last);
            if let Some(sprite) = track.get(index) {
                draw(sprite, particle.position.x, particle.position.y);
            }
        }
    }

    /// Merge a partial update into the configuration.
    ///
    /// Live particles and the emission clock are left untouched.
    pub fn apply(&mut self, update: EmitterUpdate) -> Result<(), ConfigError> {
        if let Some(variants) = &update.variants {
            validate_variants(variants)?;
        }
        update.merge_into(&mut self.config);
        Ok(())
    }

    /// Replace the whole configuration, keeping live particles.
    pub fn set_config(&mut self, config: EmitterConfig) -> Result<(), ConfigError> {
        validate_variants(&config.variants)?;
        self.config = config;
        Ok(())
    }

    /// Move the spawn area, e.g. to follow a pointer before a burst.
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.config.x = x;
        self.config.y = y;
    }

    #[inline]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Live particles, in emission order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Seconds accumulated towards the next emission.
    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// The pool this emitter recycles through.
    #[inline]
    pub fn pool(&self) -> &PoolHandle {
        &self.pool
    }
}

impl Simulate for ParticleEmitter {
    fn update(&mut self, dt_ms: f32) {
        ParticleEmitter::update(self, dt_ms);
    }

    fn render(&self, draw: &mut dyn FnMut(&Sprite, f32, f32)) {
        ParticleEmitter::render(self, |sprite, x, y| draw(sprite, x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ParticlePool;
    use crate::sprite::sprites;
    use std::f32::consts::PI;

    fn dot() -> EmitterConfig {
        EmitterConfig::new().variant(vec![sprites::BLUE_CIRCLE])
    }

    fn emitter(config: EmitterConfig) -> ParticleEmitter {
        ParticleEmitter::new(config, ParticlePool::shared())
            .unwrap()
            .with_seed(42)
    }

    #[test]
    fn test_rejects_missing_variants() {
        let err = ParticleEmitter::new(EmitterConfig::new(), ParticlePool::shared()).unwrap_err();
        assert!(matches!(err, ConfigError::NoVariants));

        let config = dot().variant(Vec::new());
        let err = ParticleEmitter::new(config, ParticlePool::shared()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVariant(1)));
    }

    #[test]
    fn test_emit_samples_spawn_area() {
        let mut e = emitter(dot().position(10.0, 20.0).area(5.0, 8.0).lifetime(1.0));
        for _ in 0..200 {
            e.emit();
        }
        for p in e.particles() {
            assert!((10.0..=15.0).contains(&p.position.x));
            assert!((20.0..=28.0).contains(&p.position.y));
            assert_eq!(p.age, 0.0);
        }
    }

    #[test]
    fn test_emit_ignores_frequency() {
        let mut e = emitter(dot().frequency(0.0).lifetime(5.0));
        e.emit();
        e.emit();
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn test_zero_frequency_never_fires() {
        let mut e = emitter(dot().frequency(0.0).lifetime(5.0));
        assert_eq!(e.update(60_000.0), 0);
        assert!(e.is_empty());
        assert_eq!(e.clock(), 0.0);

        let mut e = emitter(dot().frequency(-3.0).lifetime(5.0));
        assert_eq!(e.update(1000.0), 0);
    }

    #[test]
    fn test_fractional_frequency_accumulates() {
        let mut e = emitter(dot().frequency(0.5).lifetime(10.0));
        assert_eq!(e.update(1000.0), 0);
        assert_eq!(e.update(1000.0), 1);
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn test_large_step_emits_burst() {
        let mut e = emitter(dot().frequency(100.0).lifetime(10.0));
        assert_eq!(e.update(2000.0), 200);
    }

    #[test]
    fn test_gravity_and_integration() {
        let mut e = emitter(dot().frequency(0.0).velocity(10.0).mass(20.0).lifetime(5.0));
        e.emit();
        e.update(500.0);
        let p = e.particles()[0];
        // angle 0 → moving right
        assert!((p.position.x - 5.0).abs() < 1e-4);
        assert!((p.velocity.y - 10.0).abs() < 1e-4);
        assert!((p.age - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_floor_passes_through() {
        let mut e = emitter(dot().frequency(0.0).velocity(100.0).angle(PI / 2.0).lifetime(5.0));
        e.emit();
        e.update(1000.0);
        assert!(e.particles()[0].position.y > 99.0);
    }

    #[test]
    fn test_expired_particles_return_to_pool() {
        let mut e = emitter(dot().frequency(0.0).lifetime(0.1));
        e.emit();
        e.emit();
        e.update(200.0);
        assert!(e.is_empty());
        assert_eq!(e.pool().borrow().free(), 2);
        assert_eq!(e.pool().borrow().allocated(), 2);
    }

    #[test]
    fn test_render_picks_frame_by_progress() {
        let track = vec![
            sprites::SMOKE_1,
            sprites::SMOKE_2,
            sprites::SMOKE_3,
            sprites::SMOKE_4,
        ];
        let mut e = emitter(EmitterConfig::new().frequency(0.0).lifetime(4.0).variant(track));
        e.emit();
        e.update(1500.0);

        let mut drawn = Vec::new();
        e.render(|sprite, x, y| drawn.push((*sprite, x, y)));
        assert_eq!(drawn, vec![(sprites::SMOKE_2, 0.0, 0.0)]);
    }

    #[test]
    fn test_render_zero_lifetime_uses_last_frame() {
        let mut e = emitter(
            EmitterConfig::new()
                .frequency(0.0)
                .variant(vec![sprites::SMOKE_1, sprites::SMOKE_4]),
        );
        e.emit();
        let mut drawn = Vec::new();
        e.render(|sprite, _, _| drawn.push(*sprite));
        assert_eq!(drawn, vec![sprites::SMOKE_4]);
    }

    #[test]
    fn test_variants_are_both_used() {
        let mut e = emitter(
            dot()
                .frequency(0.0)
                .lifetime(5.0)
                .variant(vec![sprites::SMOKE_1]),
        );
        for _ in 0..100 {
            e.emit();
        }
        assert!(e.particles().iter().any(|p| p.variant == 0));
        assert!(e.particles().iter().any(|p| p.variant == 1));
    }

    #[test]
    fn test_apply_keeps_simulation_state() {
        let mut e = emitter(dot().frequency(4.0).lifetime(10.0));
        e.update(300.0);
        let clock = e.clock();
        let before = e.particles().to_vec();

        e.apply(EmitterUpdate {
            frequency: Some(8.0),
            velocity_spread: Some(3.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(e.clock(), clock);
        assert_eq!(e.particles(), &before[..]);
        assert_eq!(e.config().frequency, 8.0);
        assert_eq!(e.config().velocity, Spread::new(0.0, 3.0));
    }

    #[test]
    fn test_apply_rejects_empty_variants() {
        let mut e = emitter(dot());
        let err = e
            .apply(EmitterUpdate {
                variants: Some(Vec::new()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoVariants));
        assert_eq!(e.config().variants.len(), 1);
    }

    #[test]
    fn test_render_survives_shrunk_variants() {
        let mut e = emitter(dot().variant(vec![sprites::SMOKE_1]).frequency(0.0).lifetime(5.0));
        for _ in 0..20 {
            e.emit();
        }
        e.apply(EmitterUpdate {
            variants: Some(vec![vec![sprites::SMOKE_3]]),
            ..Default::default()
        })
        .unwrap();

        let mut count = 0;
        e.render(|sprite, _, _| {
            assert_eq!(*sprite, sprites::SMOKE_3);
            count += 1;
        });
        assert_eq!(count, 20);
    }

    #[test]
    fn test_update_floor_can_be_cleared() {
        let mut config = dot().floor(50.0);
        EmitterUpdate::from_json(r#"{ "floor": null }"#)
            .unwrap()
            .merge_into(&mut config);
        assert_eq!(config.floor, None);

        EmitterUpdate::from_json(r#"{ "x": 3 }"#)
            .unwrap()
            .merge_into(&mut config);
        assert_eq!(config.floor, None);
        assert_eq!(config.x, 3.0);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = dot().position(1.0, 2.0).velocity(Spread::new(50.0, 5.0)).floor(90.0);
        let json = config.to_json().unwrap();
        assert_eq!(EmitterConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_accepts_original_props() {
        let config = EmitterConfig::from_json(
            r#"{
                "x": 10, "y": 5, "frequency": 1,
                "velocity": [50, 0], "life": 3,
                "variants": [[{ "x": 0, "y": 0, "w": 4, "h": 4 }]]
            }"#,
        )
        .unwrap();
        assert_eq!(config.velocity, Spread::fixed(50.0));
        assert_eq!(config.lifetime, Spread::fixed(3.0));
        assert_eq!(config.variants, vec![vec![sprites::BLUE_CIRCLE]]);
        assert_eq!(config.floor, None);
    }

    #[test]
    fn test_config_accepts_flat_spread_props() {
        let config = EmitterConfig::from_json(
            r#"{
                "velocity": 20, "velocitySpread": -5,
                "angle": 4.5, "angleSpread": 0.4,
                "life": 3, "lifeSpread": 1,
                "mass": [10, 2], "massSpread": 6,
                "variants": [[{ "x": 0, "y": 0, "w": 4, "h": 4 }]]
            }"#,
        )
        .unwrap();
        assert_eq!(config.velocity, Spread::new(20.0, -5.0));
        assert_eq!(config.angle, Spread::new(4.5, 0.4));
        assert_eq!(config.lifetime, Spread::new(3.0, 1.0));
        assert_eq!(config.mass, Spread::new(10.0, 6.0));
        assert_eq!(config.bounce, Spread::default());
        assert_eq!(config.frequency, 1.0);
    }
}
