//! The pooled particle record.

use glam::Vec2;

/// A short-lived point particle.
///
/// Records are recycled through a [`ParticlePool`](crate::ParticlePool), so
/// every field is overwritten on emission and nothing here carries identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Position in simulation pixels.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Downward acceleration multiplier applied to `velocity.y` each second.
    pub mass: f32,
    /// Seconds since emission.
    pub age: f32,
    /// Seconds the particle survives.
    pub lifetime: f32,
    /// Restitution factor (0–1) applied when the particle hits the floor.
    pub bounce: f32,
    /// Index of the sprite track this particle animates through.
    pub variant: usize,
}

impl Particle {
    /// Lifecycle progress, `age / lifetime`.
    ///
    /// A particle with no lifetime reports `1.0` so it renders its last frame.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.lifetime > 0.0 {
            self.age / self.lifetime
        } else {
            1.0
        }
    }

    /// Whether the particle has outlived its lifetime.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let p = Particle {
            age: 1.0,
            lifetime: 4.0,
            ..Default::default()
        };
        assert_eq!(p.progress(), 0.25);
        assert!(!p.is_expired());
    }

    #[test]
    fn test_zero_lifetime_is_expired_at_birth() {
        let p = Particle::default();
        assert!(p.is_expired());
        assert_eq!(p.progress(), 1.0);
    }
}
