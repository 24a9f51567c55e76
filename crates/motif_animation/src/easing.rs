//! Named easing curves

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MotifError;

/// A predefined easing curve.
///
/// Variant names double as the stable textual name used by parameter
/// libraries and the inspector dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;

impl Ease {
    /// Every named ease, in declaration order
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// Input is clamped; output may overshoot for Back and Elastic.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,

            Ease::InSine => 1.0 - (t * PI / 2.0).cos(),
            Ease::OutSine => (t * PI / 2.0).sin(),
            Ease::InOutSine => -((PI * t).cos() - 1.0) / 2.0,

            Ease::InQuad => t * t,
            Ease::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::InOutQuad => in_out_pow(t, 2),

            Ease::InCubic => t * t * t,
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
            Ease::InOutCubic => in_out_pow(t, 3),

            Ease::InQuart => t.powi(4),
            Ease::OutQuart => 1.0 - (1.0 - t).powi(4),
            Ease::InOutQuart => in_out_pow(t, 4),

            Ease::InQuint => t.powi(5),
            Ease::OutQuint => 1.0 - (1.0 - t).powi(5),
            Ease::InOutQuint => in_out_pow(t, 5),

            Ease::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            Ease::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Ease::InOutExpo => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Ease::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Ease::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Ease::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Ease::InElastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
                }
            }
            Ease::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
                }
            }
            Ease::InOutElastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                } else {
                    (2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                        + 1.0
                }
            }

            Ease::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Ease::OutBack => {
                1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Ease::InOutBack => {
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2)
                        + 2.0)
                        / 2.0
                }
            }

            Ease::InBounce => 1.0 - bounce_out(1.0 - t),
            Ease::OutBounce => bounce_out(t),
            Ease::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }

    /// Stable textual name (the variant name)
    pub fn name(&self) -> &'static str {
        match self {
            Ease::Linear => "Linear",
            Ease::InSine => "InSine",
            Ease::OutSine => "OutSine",
            Ease::InOutSine => "InOutSine",
            Ease::InQuad => "InQuad",
            Ease::OutQuad => "OutQuad",
            Ease::InOutQuad => "InOutQuad",
            Ease::InCubic => "InCubic",
            Ease::OutCubic => "OutCubic",
            Ease::InOutCubic => "InOutCubic",
            Ease::InQuart => "InQuart",
            Ease::OutQuart => "OutQuart",
            Ease::InOutQuart => "InOutQuart",
            Ease::InQuint => "InQuint",
            Ease::OutQuint => "OutQuint",
            Ease::InOutQuint => "InOutQuint",
            Ease::InExpo => "InExpo",
            Ease::OutExpo => "OutExpo",
            Ease::InOutExpo => "InOutExpo",
            Ease::InCirc => "InCirc",
            Ease::OutCirc => "OutCirc",
            Ease::InOutCirc => "InOutCirc",
            Ease::InElastic => "InElastic",
            Ease::OutElastic => "OutElastic",
            Ease::InOutElastic => "InOutElastic",
            Ease::InBack => "InBack",
            Ease::OutBack => "OutBack",
            Ease::InOutBack => "InOutBack",
            Ease::InBounce => "InBounce",
            Ease::OutBounce => "OutBounce",
            Ease::InOutBounce => "InOutBounce",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = MotifError;

    /// Case-insensitive; `-` and `_` separators are ignored (`out-bounce`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Ease::ALL
            .iter()
            .copied()
            .find(|ease| ease.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| MotifError::UnknownEase(s.to_string()))
    }
}

/// Symmetric in/out polynomial ease of the given power
#[inline]
fn in_out_pow(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_endpoints_are_exact() {
        for ease in Ease::ALL {
            assert!(approx(ease.apply(0.0), 0.0), "{ease} at 0 = {}", ease.apply(0.0));
            assert!(approx(ease.apply(1.0), 1.0), "{ease} at 1 = {}", ease.apply(1.0));
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::OutBounce.apply(-1.0), Ease::OutBounce.apply(0.0));
        assert_eq!(Ease::InQuad.apply(3.0), 1.0);
    }

    #[test]
    fn test_in_out_midpoint() {
        for ease in [
            Ease::InOutSine,
            Ease::InOutQuad,
            Ease::InOutCubic,
            Ease::InOutQuart,
            Ease::InOutQuint,
            Ease::InOutExpo,
            Ease::InOutCirc,
            Ease::InOutBounce,
        ] {
            assert!(approx(ease.apply(0.5), 0.5), "{ease} at 0.5 = {}", ease.apply(0.5));
        }
    }

    #[test]
    fn test_in_is_slower_than_out() {
        assert!(Ease::InCubic.apply(0.3) < Ease::OutCubic.apply(0.3));
        assert!(Ease::InSine.apply(0.3) < Ease::OutSine.apply(0.3));
    }

    #[test]
    fn test_back_overshoots() {
        assert!(Ease::InBack.apply(0.2) < 0.0);
        assert!(Ease::OutBack.apply(0.8) > 1.0);
    }

    #[test]
    fn test_names_round_trip() {
        for ease in Ease::ALL {
            assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!("outbounce".parse::<Ease>().unwrap(), Ease::OutBounce);
        assert_eq!("out-bounce".parse::<Ease>().unwrap(), Ease::OutBounce);
        assert_eq!("IN_OUT_SINE".parse::<Ease>().unwrap(), Ease::InOutSine);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "wobble".parse::<Ease>().unwrap_err();
        assert!(matches!(err, MotifError::UnknownEase(ref name) if name == "wobble"));
    }
}
