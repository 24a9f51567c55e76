//! Editable parameters form
//!
//! The form keeps both easing sources while the user edits, so flipping the
//! custom-curve toggle back and forth never loses the hidden one. Only
//! [`ParamsForm::commit`] collapses the draft into an
//! [`AnimationParameters`] value.

use motif_animation::{AnimationParameters, Curve, CurveKey, Ease, EaseSource};

use crate::error::{InspectorError, Result};
use crate::layout::{ActiveField, DrawerLayout, Rect};

/// Named eases as `(label, value)` pairs for a dropdown
pub fn ease_options() -> Vec<(&'static str, Ease)> {
    Ease::ALL.iter().map(|ease| (ease.name(), *ease)).collect()
}

/// Draft state of one parameters row
#[derive(Clone, Debug, PartialEq)]
pub struct ParamsForm {
    custom: bool,
    ease: Ease,
    curve: Curve,
    duration: f32,
    dirty: bool,
}

impl ParamsForm {
    /// Start editing existing parameters.
    ///
    /// The hidden source starts at `Ease::Linear` or a linear curve.
    pub fn from_params(params: &AnimationParameters) -> Self {
        let (ease, curve) = match params.ease() {
            EaseSource::Named(ease) => (*ease, Curve::linear()),
            EaseSource::Custom(curve) => (Ease::default(), curve.clone()),
        };
        Self {
            custom: params.uses_custom_curve(),
            ease,
            curve,
            duration: params.duration(),
            dirty: false,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Whether there are edits since the last commit
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Editor shown in the source slot
    pub fn active_field(&self) -> ActiveField {
        ActiveField::for_custom(self.custom)
    }

    /// Lay the row out with the current active field
    pub fn layout(&self, row: Rect) -> DrawerLayout {
        DrawerLayout::compute(row, self.active_field())
    }

    pub fn toggle_custom(&mut self) {
        self.set_custom(!self.custom);
    }

    pub fn set_custom(&mut self, custom: bool) {
        if self.custom != custom {
            tracing::debug!(custom, "inspector toggled custom curve");
            self.custom = custom;
            self.dirty = true;
        }
    }

    /// Set the duration. Any value is accepted, including zero and negatives.
    pub fn set_duration(&mut self, duration: f32) {
        if self.duration != duration {
            self.duration = duration;
            self.dirty = true;
        }
    }

    /// Set the duration from field text
    pub fn set_duration_text(&mut self, text: &str) -> Result<()> {
        let duration: f32 = text
            .trim()
            .parse()
            .map_err(|_| InspectorError::InvalidDuration(text.to_string()))?;
        if duration.is_nan() {
            return Err(InspectorError::InvalidDuration(text.to_string()));
        }
        self.set_duration(duration);
        Ok(())
    }

    pub fn select_ease(&mut self, ease: Ease) {
        if self.ease != ease {
            tracing::debug!(ease = ease.name(), "inspector selected ease");
            self.ease = ease;
            self.dirty = true;
        }
    }

    pub fn select_ease_by_name(&mut self, name: &str) -> Result<()> {
        let ease: Ease = name.parse()?;
        self.select_ease(ease);
        Ok(())
    }

    pub fn set_curve(&mut self, curve: Curve) {
        if self.curve != curve {
            self.curve = curve;
            self.dirty = true;
        }
    }

    pub fn insert_curve_key(&mut self, key: CurveKey) {
        let curve = std::mem::take(&mut self.curve).with_key(key);
        self.curve = curve;
        self.dirty = true;
    }

    pub fn remove_curve_key(&mut self, index: usize) -> Result<()> {
        let len = self.curve.len();
        if index >= len {
            return Err(InspectorError::KeyIndex { index, len });
        }
        let curve = std::mem::take(&mut self.curve).without_key(index);
        self.curve = curve;
        self.dirty = true;
        Ok(())
    }

    /// Parameters the form would commit right now
    pub fn preview(&self) -> AnimationParameters {
        AnimationParameters::new(self.custom, self.ease, self.duration, self.curve.clone())
    }

    /// `steps + 1` evenly spaced samples of the active easing, for the
    /// thumbnail drawn in the source slot
    pub fn preview_samples(&self, steps: usize) -> Vec<f32> {
        let params = self.preview();
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| params.ease().evaluate(i as f32 / steps as f32))
            .collect()
    }

    /// Finish editing and produce the parameters value
    pub fn commit(&mut self) -> AnimationParameters {
        self.dirty = false;
        self.preview()
    }
}

impl Default for ParamsForm {
    fn default() -> Self {
        Self::from_params(&AnimationParameters::default())
    }
}
