//! User-authored easing curves
//!
//! A [`Curve`] is a list of keys with in/out tangents, evaluated with cubic
//! Hermite interpolation between neighbouring keys. Used as an easing
//! function its domain and range are both normally [0, 1], but nothing here
//! enforces that; see [`crate::library::ParamsLibrary::lint`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single key on a [`Curve`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Time position of the key
    pub time: f32,
    /// Curve value at this key
    pub value: f32,
    /// Slope arriving at this key
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key
    #[serde(default)]
    pub out_tangent: f32,
}

impl CurveKey {
    /// A key with flat tangents
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    /// A key with the same slope on both sides
    pub fn with_slope(time: f32, value: f32, slope: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: slope,
            out_tangent: slope,
        }
    }

    /// Builder: set both tangents
    pub fn tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }
}

/// A sampled curve used as a custom easing function.
///
/// Keys are kept sorted by time and shared behind an `Arc`, so handing the
/// same curve to many tweens does not copy it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<CurveKey>", into = "Vec<CurveKey>")]
pub struct Curve {
    keys: Arc<[CurveKey]>,
}

impl Curve {
    /// Build a curve from keys in any order. Never fails; an empty key list
    /// gives an empty curve.
    pub fn new(keys: impl IntoIterator<Item = CurveKey>) -> Self {
        let mut keys: Vec<CurveKey> = keys.into_iter().collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys: keys.into() }
    }

    /// Straight line from (0, 0) to (1, 1)
    pub fn linear() -> Self {
        Self::new([
            CurveKey::with_slope(0.0, 0.0, 1.0),
            CurveKey::with_slope(1.0, 1.0, 1.0),
        ])
    }

    /// S-curve from (0, 0) to (1, 1) with flat ends
    pub fn ease_in_out() -> Self {
        Self::new([CurveKey::new(0.0, 0.0), CurveKey::new(1.0, 1.0)])
    }

    /// Flat curve holding `value` over [0, 1]
    pub fn constant(value: f32) -> Self {
        Self::new([CurveKey::new(0.0, value), CurveKey::new(1.0, value)])
    }

    /// Builder: add a key, keeping keys sorted
    pub fn with_key(self, key: CurveKey) -> Self {
        Self::new(self.keys.iter().copied().chain(std::iter::once(key)))
    }

    /// Builder: remove the key at `index` (no-op when out of range)
    pub fn without_key(self, index: usize) -> Self {
        Self::new(
            self.keys
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, key)| *key),
        )
    }

    /// Keys sorted by time
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Time of the last key (0.0 for an empty curve)
    pub fn duration(&self) -> f32 {
        self.keys.last().map(|k| k.time).unwrap_or(0.0)
    }

    /// Evaluate the curve at `time`.
    ///
    /// Outside the key range the nearest end key's value is held. An empty
    /// curve evaluates to 0.0 and a NaN `time` to NaN.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        if time.is_nan() {
            return f32::NAN;
        }
        if self.keys.len() == 1 || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        // NaN key times slip past the range checks, so keep next in 1..len
        let next = self
            .keys
            .partition_point(|k| k.time <= time)
            .clamp(1, self.keys.len() - 1);
        let prev_kf = &self.keys[next - 1];
        let next_kf = &self.keys[next];

        let span = next_kf.time - prev_kf.time;
        if span.abs() < f32::EPSILON {
            return next_kf.value;
        }

        // Infinite tangents mark a stepped segment
        if !prev_kf.out_tangent.is_finite() || !next_kf.in_tangent.is_finite() {
            return prev_kf.value;
        }

        let s = (time - prev_kf.time) / span;
        hermite(
            s,
            prev_kf.value,
            prev_kf.out_tangent * span,
            next_kf.value,
            next_kf.in_tangent * span,
        )
    }
}

/// Cubic Hermite basis: p0 + tangent m0 to p1 + tangent m1
#[inline]
fn hermite(s: f32, p0: f32, m0: f32, p1: f32, m1: f32) -> f32 {
    let s2 = s * s;
    let s3 = s2 * s;
    (2.0 * s3 - 3.0 * s2 + 1.0) * p0
        + (s3 - 2.0 * s2 + s) * m0
        + (-2.0 * s3 + 3.0 * s2) * p1
        + (s3 - s2) * m1
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
        }
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl From<Vec<CurveKey>> for Curve {
    fn from(keys: Vec<CurveKey>) -> Self {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<CurveKey> {
    fn from(curve: Curve) -> Self {
        curve.keys.to_vec()
    }
}
