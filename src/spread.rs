//! Randomized attribute generators.
//!
//! Every stochastic particle attribute (speed, angle, mass, lifetime,
//! bounce) is described by a [`Spread`]: a base value plus the width of a
//! uniform range added on top of it.
//!
//! | Shape | Meaning |
//! |-------|---------|
//! | `50.0` | constant, `base = 50`, `spread = 0` |
//! | `[50.0, 10.0]` | range tuple `[from, delta]`, samples in `50..60` |
//! | `{ "base": 50, "spread": 10 }` | canonical form |
//!
//! The range tuple is accepted for configurations written against the
//! older tuple-based emitter; it converts losslessly because `delta` is
//! already the spread.
//!
//! # Example
//!
//! ```
//! use pixie::Spread;
//!
//! let speed = Spread::new(50.0, 10.0);
//! assert_eq!(speed.bounds(), (50.0, 60.0));
//!
//! let same: Spread = [50.0, 10.0].into();
//! assert_eq!(speed, same);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A `base + spread * uniform(0, 1)` generator.
///
/// `spread` may be negative, in which case samples fall below `base`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SpreadRepr")]
pub struct Spread {
    /// Value produced when the random draw is zero.
    pub base: f32,
    /// Width of the uniform range added to `base`.
    pub spread: f32,
}

impl Spread {
    /// Create a generator from a base value and a spread.
    pub const fn new(base: f32, spread: f32) -> Self {
        Self { base, spread }
    }

    /// A generator that always yields `value`.
    pub const fn fixed(value: f32) -> Self {
        Self::new(value, 0.0)
    }

    /// A generator covering `min..max`.
    pub fn between(min: f32, max: f32) -> Self {
        Self::new(min, max - min)
    }

    /// Draw one value.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.base + self.spread * rng.gen::<f32>()
    }

    /// Smallest and largest value this generator can produce.
    pub fn bounds(&self) -> (f32, f32) {
        let end = self.base + self.spread;
        (self.base.min(end), self.base.max(end))
    }

    /// Convert back to the `[from, delta]` range tuple.
    pub fn to_range_tuple(self) -> [f32; 2] {
        [self.base, self.spread]
    }
}

impl From<f32> for Spread {
    fn from(value: f32) -> Self {
        Self::fixed(value)
    }
}

impl From<[f32; 2]> for Spread {
    fn from([from, delta]: [f32; 2]) -> Self {
        Self::new(from, delta)
    }
}

impl From<(f32, f32)> for Spread {
    fn from((from, delta): (f32, f32)) -> Self {
        Self::new(from, delta)
    }
}

/// Accepted serialized shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpreadRepr {
    Fixed(f32),
    Tuple([f32; 2]),
    Object {
        #[serde(default)]
        base: f32,
        #[serde(default)]
        spread: f32,
    },
}

impl From<SpreadRepr> for Spread {
    fn from(repr: SpreadRepr) -> Self {
        match repr {
            SpreadRepr::Fixed(value) => Spread::fixed(value),
            SpreadRepr::Tuple(tuple) => tuple.into(),
            SpreadRepr::Object { base, spread } => Spread::new(base, spread),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_always_returns_base() {
        let mut rng = SmallRng::seed_from_u64(7);
        let speed = Spread::fixed(50.0);
        for _ in 0..100 {
            assert_eq!(speed.sample(&mut rng), 50.0);
        }
    }

    #[test]
    fn test_negative_spread_bounds() {
        let speed = Spread::new(20.0, -5.0);
        assert_eq!(speed.bounds(), (15.0, 20.0));

        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let v = speed.sample(&mut rng);
            assert!((15.0..=20.0).contains(&v));
        }
    }

    #[test]
    fn test_between() {
        let s = Spread::between(2.0, 5.0);
        assert_eq!(s, Spread::new(2.0, 3.0));
    }

    #[test]
    fn test_range_tuple_round_trip() {
        let s: Spread = [1.5, 0.5].into();
        assert_eq!(s.to_range_tuple(), [1.5, 0.5]);
    }

    #[test]
    fn test_deserialize_all_shapes() {
        let fixed: Spread = serde_json::from_str("3").unwrap();
        assert_eq!(fixed, Spread::fixed(3.0));

        let tuple: Spread = serde_json::from_str("[3, 2]").unwrap();
        assert_eq!(tuple, Spread::new(3.0, 2.0));

        let object: Spread = serde_json::from_str(r#"{ "base": 3, "spread": 2 }"#).unwrap();
        assert_eq!(object, Spread::new(3.0, 2.0));

        let partial: Spread = serde_json::from_str(r#"{ "spread": 2 }"#).unwrap();
        assert_eq!(partial, Spread::new(0.0, 2.0));
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_string(&Spread::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"base":1.0,"spread":2.0}"#);
    }
}
