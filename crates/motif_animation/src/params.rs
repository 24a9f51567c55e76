//! Reusable animation parameters
//!
//! An [`AnimationParameters`] value bundles a duration with the easing that
//! every motion operation should apply. It is authored once (in code, a
//! parameter library, or the inspector) and read by any number of tweens.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::easing::Ease;

/// Where a tween's easing comes from
#[derive(Clone, Debug, PartialEq)]
pub enum EaseSource {
    /// A predefined curve
    Named(Ease),
    /// A user-authored curve
    Custom(Curve),
}

impl EaseSource {
    /// Eased progress for normalized time `t` (0.0 to 1.0).
    ///
    /// A custom curve is stretched over the tween: `t` is scaled by the time
    /// of the curve's last key before sampling.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            EaseSource::Named(ease) => ease.apply(t),
            EaseSource::Custom(curve) => curve.evaluate(t * curve.duration()),
        }
    }
}

impl Default for EaseSource {
    fn default() -> Self {
        EaseSource::Named(Ease::default())
    }
}

impl From<Ease> for EaseSource {
    fn from(ease: Ease) -> Self {
        EaseSource::Named(ease)
    }
}

impl From<Curve> for EaseSource {
    fn from(curve: Curve) -> Self {
        EaseSource::Custom(curve)
    }
}

/// Duration and easing shared by motion operations.
///
/// Immutable once built. Durations are not validated: zero or negative
/// values are handed to the engine as-is, as are empty custom curves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParamsRecord", into = "ParamsRecord")]
pub struct AnimationParameters {
    duration: f32,
    ease: EaseSource,
}

impl AnimationParameters {
    /// Build from the flag-plus-two-sources form.
    ///
    /// Only the source selected by `uses_custom_curve` is kept.
    pub fn new(
        uses_custom_curve: bool,
        named_ease: Ease,
        duration: f32,
        custom_curve: Curve,
    ) -> Self {
        let ease = if uses_custom_curve {
            EaseSource::Custom(custom_curve)
        } else {
            EaseSource::Named(named_ease)
        };
        Self { duration, ease }
    }

    /// Parameters using a named ease
    pub fn named(ease: Ease, duration: f32) -> Self {
        Self {
            duration,
            ease: EaseSource::Named(ease),
        }
    }

    /// Parameters using a custom curve
    pub fn custom(curve: Curve, duration: f32) -> Self {
        Self {
            duration,
            ease: EaseSource::Custom(curve),
        }
    }

    pub fn from_source(ease: impl Into<EaseSource>, duration: f32) -> Self {
        Self {
            duration,
            ease: ease.into(),
        }
    }

    /// Duration in seconds, exactly as authored
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn ease(&self) -> &EaseSource {
        &self.ease
    }

    pub fn uses_custom_curve(&self) -> bool {
        matches!(self.ease, EaseSource::Custom(_))
    }

    /// The named ease, if that is the active source
    pub fn named_ease(&self) -> Option<Ease> {
        match self.ease {
            EaseSource::Named(ease) => Some(ease),
            EaseSource::Custom(_) => None,
        }
    }

    /// The custom curve, if that is the active source
    pub fn custom_curve(&self) -> Option<&Curve> {
        match &self.ease {
            EaseSource::Custom(curve) => Some(curve),
            EaseSource::Named(_) => None,
        }
    }
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self::named(Ease::default(), 0.3)
    }
}

/// Flat on-disk shape of [`AnimationParameters`]
#[derive(Serialize, Deserialize)]
struct ParamsRecord {
    duration: f32,
    #[serde(default)]
    custom_ease: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ease: Option<Ease>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    curve: Option<Curve>,
}

impl From<ParamsRecord> for AnimationParameters {
    fn from(record: ParamsRecord) -> Self {
        AnimationParameters::new(
            record.custom_ease,
            record.ease.unwrap_or_default(),
            record.duration,
            record.curve.unwrap_or_default(),
        )
    }
}

impl From<AnimationParameters> for ParamsRecord {
    fn from(params: AnimationParameters) -> Self {
        match params.ease {
            EaseSource::Named(ease) => ParamsRecord {
                duration: params.duration,
                custom_ease: false,
                ease: Some(ease),
                curve: None,
            },
            EaseSource::Custom(curve) => ParamsRecord {
                duration: params.duration,
                custom_ease: true,
                ease: None,
                curve: Some(curve),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveKey;

    #[test]
    fn test_new_keeps_only_selected_source() {
        let named = AnimationParameters::new(false, Ease::OutBounce, 2.0, Curve::linear());
        assert_eq!(named.named_ease(), Some(Ease::OutBounce));
        assert!(named.custom_curve().is_none());
        assert!(!named.uses_custom_curve());

        let custom = AnimationParameters::new(true, Ease::OutBounce, 0.5, Curve::linear());
        assert_eq!(custom.custom_curve(), Some(&Curve::linear()));
        assert!(custom.named_ease().is_none());
        assert!(custom.uses_custom_curve());
    }

    #[test]
    fn test_duration_is_not_clamped() {
        assert_eq!(AnimationParameters::named(Ease::Linear, 0.0).duration(), 0.0);
        assert_eq!(AnimationParameters::named(Ease::Linear, -1.5).duration(), -1.5);
    }

    #[test]
    fn test_empty_curve_is_accepted() {
        let params = AnimationParameters::custom(Curve::default(), 1.0);
        assert!(params.custom_curve().unwrap().is_empty());
        assert_eq!(params.ease().evaluate(0.5), 0.0);
    }

    #[test]
    fn test_custom_source_stretches_curve() {
        let curve = Curve::new([
            CurveKey::with_slope(0.0, 0.0, 0.5),
            CurveKey::with_slope(2.0, 1.0, 0.5),
        ]);
        let source = EaseSource::Custom(curve);
        assert!((source.evaluate(0.5) - 0.5).abs() < 1e-5);
        assert_eq!(source.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnimationParameters>();
    }

    #[test]
    fn test_serializes_as_flat_record() {
        let params = AnimationParameters::named(Ease::OutBack, 0.25);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "duration": 0.25, "custom_ease": false, "ease": "OutBack" })
        );

        let custom = AnimationParameters::custom(Curve::ease_in_out(), 1.0);
        let value = serde_json::to_value(&custom).unwrap();
        assert_eq!(value["custom_ease"], true);
        assert!(value.get("ease").is_none());
        assert_eq!(value["curve"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_deserialize_fills_missing_source() {
        let named: AnimationParameters = serde_json::from_str(r#"{"duration": 1.0}"#).unwrap();
        assert_eq!(named, AnimationParameters::named(Ease::Linear, 1.0));

        let custom: AnimationParameters =
            serde_json::from_str(r#"{"duration": 1.0, "custom_ease": true, "ease": "InQuad"}"#)
                .unwrap();
        assert_eq!(custom, AnimationParameters::custom(Curve::default(), 1.0));
    }
}
