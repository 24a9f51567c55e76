//! Motif Animation Parameters
//!
//! Reusable duration and easing for tween engines.
//!
//! # Features
//!
//! - **Parameters**: one immutable value carries a duration and either a
//!   named ease or a custom curve
//! - **Resolution**: the selected easing is applied to any engine handle that
//!   implements [`Easable`]
//! - **Motions**: move, rotate, scale, punch, shake, jump and path-follow
//!   operations that take parameters instead of per-call duration and ease
//! - **Libraries**: named parameters loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use motif_animation::prelude::*;
//! use motif_animation::headless::HeadlessTarget;
//!
//! let params = AnimationParameters::named(Ease::OutBounce, 2.0);
//! let mut target = HeadlessTarget::default();
//!
//! let tween = target.move_to(Vec3::new(0.0, 3.0, 0.0), &params, false);
//! assert_eq!(tween.duration(), 2.0);
//! assert_eq!(tween.ease(), &EaseSource::Named(Ease::OutBounce));
//! ```

pub mod curve;
pub mod easing;
pub mod error;
pub mod headless;
pub mod library;
pub mod motion;
pub mod params;
pub mod resolve;

pub use curve::{Curve, CurveKey};
pub use easing::Ease;
pub use error::{MotifError, Result};
pub use library::{LintIssue, LintKind, ParamsLibrary, ParamsPreset};
pub use motion::{
    Axis, Axis2, AxisConstraint, Body2dMotion, Body2dTweens, BodyMotion, BodyTweens, JumpOptions,
    LookAtOptions, PathMode, PathOptions, PathType, PunchOptions, RotateMode, ShakeOptions,
    TransformMotion, TransformTweens,
};
pub use params::{AnimationParameters, EaseSource};
pub use resolve::{apply_ease, tween_with, Easable, SetEaseExt};

/// Common imports for callers driving motions
pub mod prelude {
    pub use crate::curve::{Curve, CurveKey};
    pub use crate::easing::Ease;
    pub use crate::motion::*;
    pub use crate::params::{AnimationParameters, EaseSource};
    pub use crate::resolve::{apply_ease, tween_with, Easable, SetEaseExt};
    pub use glam::{Quat, Vec2, Vec3};
}
