//! Ease resolution
//!
//! Decides, when a tween is created, whether it eases with a named curve or a
//! custom one, and applies exactly that source to the engine's handle.

use crate::curve::Curve;
use crate::easing::Ease;
use crate::params::{AnimationParameters, EaseSource};

/// An engine animation handle that can have an easing function assigned.
///
/// Implemented by every handle kind the engine hands out (tweeners,
/// sequences, path tweens, ...). Both methods replace whatever easing the
/// handle had before.
pub trait Easable {
    /// Use a predefined easing curve
    fn set_ease(&mut self, ease: Ease);

    /// Use a custom curve as the per-frame easing function
    fn set_ease_curve(&mut self, curve: &Curve);
}

impl<T: Easable + ?Sized> Easable for &mut T {
    fn set_ease(&mut self, ease: Ease) {
        (**self).set_ease(ease);
    }

    fn set_ease_curve(&mut self, curve: &Curve) {
        (**self).set_ease_curve(curve);
    }
}

impl<T: Easable + ?Sized> Easable for Box<T> {
    fn set_ease(&mut self, ease: Ease) {
        (**self).set_ease(ease);
    }

    fn set_ease_curve(&mut self, curve: &Curve) {
        (**self).set_ease_curve(curve);
    }
}

/// Apply the easing selected by `params` to `handle`.
///
/// Exactly one of [`Easable::set_ease`] / [`Easable::set_ease_curve`] is
/// called. There is no fallback: an empty custom curve is still applied.
pub fn apply_ease<H: Easable + ?Sized>(handle: &mut H, params: &AnimationParameters) {
    match params.ease() {
        EaseSource::Custom(curve) => {
            tracing::trace!(keys = curve.len(), "applying custom ease curve");
            handle.set_ease_curve(curve);
        }
        EaseSource::Named(ease) => {
            tracing::trace!(ease = ease.name(), "applying named ease");
            handle.set_ease(*ease);
        }
    }
}

/// Create a tween with the duration from `params`, then resolve its ease.
///
/// `create` receives `params.duration()` unchanged. The handle is returned
/// as the engine produced it, apart from the easing.
pub fn tween_with<H, F>(params: &AnimationParameters, create: F) -> H
where
    H: Easable,
    F: FnOnce(f32) -> H,
{
    let mut handle = create(params.duration());
    apply_ease(&mut handle, params);
    handle
}

/// Chaining form of [`apply_ease`] for any handle.
///
/// On a sequence this eases the sequence as a whole.
pub trait SetEaseExt: Easable + Sized {
    fn with_params(mut self, params: &AnimationParameters) -> Self {
        apply_ease(&mut self, params);
        self
    }
}

impl<T: Easable> SetEaseExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every easing call it receives
    #[derive(Default, Debug)]
    struct Recorder {
        named: Vec<Ease>,
        curves: Vec<Curve>,
    }

    impl Easable for Recorder {
        fn set_ease(&mut self, ease: Ease) {
            self.named.push(ease);
        }

        fn set_ease_curve(&mut self, curve: &Curve) {
            self.curves.push(curve.clone());
        }
    }

    #[test]
    fn test_named_source_never_touches_curve() {
        let params = AnimationParameters::new(false, Ease::InOutSine, 1.0, Curve::linear());
        let mut handle = Recorder::default();
        apply_ease(&mut handle, &params);
        assert_eq!(handle.named, vec![Ease::InOutSine]);
        assert!(handle.curves.is_empty());
    }

    #[test]
    fn test_custom_source_never_touches_named() {
        let params = AnimationParameters::new(true, Ease::InOutSine, 1.0, Curve::linear());
        let mut handle = Recorder::default();
        apply_ease(&mut handle, &params);
        assert!(handle.named.is_empty());
        assert_eq!(handle.curves, vec![Curve::linear()]);
    }

    #[test]
    fn test_empty_curve_has_no_fallback() {
        let params = AnimationParameters::custom(Curve::default(), 1.0);
        let mut handle = Recorder::default();
        apply_ease(&mut handle, &params);
        assert!(handle.named.is_empty());
        assert_eq!(handle.curves.len(), 1);
        assert!(handle.curves[0].is_empty());
    }

    #[test]
    fn test_tween_with_passes_duration_through() {
        for duration in [2.0, 0.0, -1.0] {
            let params = AnimationParameters::named(Ease::OutQuad, duration);
            let mut seen = None;
            let handle = tween_with(&params, |d| {
                seen = Some(d);
                Recorder::default()
            });
            assert_eq!(seen, Some(duration));
            assert_eq!(handle.named, vec![Ease::OutQuad]);
        }
    }

    #[test]
    fn test_with_params_chains() {
        let params = AnimationParameters::named(Ease::OutBounce, 1.0);
        let handle = Recorder::default().with_params(&params);
        assert_eq!(handle.named, vec![Ease::OutBounce]);
    }

    #[test]
    fn test_works_through_trait_objects() {
        let params = AnimationParameters::named(Ease::InBack, 1.0);
        let mut boxed: Box<dyn Easable> = Box::new(Recorder::default());
        apply_ease(&mut boxed, &params);

        let mut recorder = Recorder::default();
        {
            let handle: &mut dyn Easable = &mut recorder;
            apply_ease(handle, &params);
        }
        assert_eq!(recorder.named, vec![Ease::InBack]);
    }
}
