//! Motif Inspector
//!
//! Headless model of the parameters row shown in editor inspectors: a
//! toggle for custom curves, the duration field, and either a named-ease
//! dropdown or a curve editor. Rendering is left to the host UI; this crate
//! owns the draft state and the row geometry.
//!
//! # Example
//!
//! ```rust
//! use motif_animation::{AnimationParameters, Ease};
//! use motif_inspector::{ActiveField, ParamsForm};
//!
//! let mut form = ParamsForm::from_params(&AnimationParameters::named(Ease::OutQuad, 0.3));
//! form.select_ease(Ease::OutBounce);
//! form.set_duration_text("2").unwrap();
//!
//! assert_eq!(form.active_field(), ActiveField::EaseSelector);
//! assert_eq!(form.commit(), AnimationParameters::named(Ease::OutBounce, 2.0));
//! ```

pub mod error;
pub mod form;
pub mod layout;

pub use error::{InspectorError, Result};
pub use form::{ease_options, ParamsForm};
pub use layout::{ActiveField, DrawerField, DrawerLayout, Rect};
