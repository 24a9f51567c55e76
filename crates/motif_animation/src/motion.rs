//! Motion operations
//!
//! The engine exposes one factory per motion kind through the `*Tweens`
//! traits, each taking a plain duration. The `*Motion` extension traits are
//! blanket-implemented over those seams and take an [`AnimationParameters`]
//! instead: every one of them is a single [`tween_with`] call.
//!
//! # Example
//!
//! ```ignore
//! use motif_animation::prelude::*;
//!
//! let params = AnimationParameters::named(Ease::OutBack, 0.4);
//! let tween = transform.move_to(Vec3::new(0.0, 2.0, 0.0), &params, false);
//! ```

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::params::AnimationParameters;
use crate::resolve::{tween_with, Easable};

// ============================================================================
// Motion options
// ============================================================================

/// Cartesian axis for single-axis moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Axis for single-axis moves of 2D bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis2 {
    X,
    Y,
}

/// How a rotation tween reaches its end value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotateMode {
    /// Shortest way, never beyond 360°
    #[default]
    Fast,
    /// Full rotation, allowing more than 360°
    FastBeyond360,
    /// Add the end value to the current rotation in world space
    WorldAxisAdd,
    /// Add the end value to the current rotation in local space
    LocalAxisAdd,
}

/// Interpolation used between path waypoints
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    #[default]
    Linear,
    CatmullRom,
    CubicBezier,
}

/// Orientation mode along a path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathMode {
    Ignore,
    #[default]
    Full3D,
    TopDown2D,
    Sidescroller2D,
}

/// Axis a look-at rotation is locked to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisConstraint {
    #[default]
    None,
    X,
    Y,
    Z,
    W,
}

/// Punch parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PunchOptions {
    /// How much the punch vibrates
    pub vibrato: u32,
    /// How far (0 to 1) the bounce back goes beyond the start value.
    /// 1 oscillates fully between the punch and its opposite, 0 only between
    /// the punch and the start.
    pub elasticity: f32,
    /// Snap values to integers
    pub snapping: bool,
}

impl Default for PunchOptions {
    fn default() -> Self {
        Self {
            vibrato: 10,
            elasticity: 1.0,
            snapping: false,
        }
    }
}

/// Shake parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShakeOptions {
    pub strength: f32,
    /// How much the shake vibrates
    pub vibrato: u32,
    /// Randomness in degrees (0 to 180). 0 shakes along a single direction.
    pub randomness: f32,
    /// Snap values to integers
    pub snapping: bool,
    /// Fade the shake out over the tween's duration
    pub fade_out: bool,
}

impl ShakeOptions {
    /// Defaults for position shakes
    pub fn position() -> Self {
        Self {
            strength: 1.0,
            vibrato: 10,
            randomness: 90.0,
            snapping: false,
            fade_out: true,
        }
    }

    /// Defaults for rotation shakes (strength in degrees)
    pub fn rotation() -> Self {
        Self {
            strength: 90.0,
            ..Self::position()
        }
    }

    /// Defaults for scale shakes
    pub fn scale() -> Self {
        Self::position()
    }

    /// Builder: set strength
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self::position()
    }
}

/// Jump parameters. The jump arc is along the Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpOptions<V> {
    pub end: V,
    /// Jump height (the peak is this plus the final Y offset)
    pub power: f32,
    pub jumps: u32,
    /// Snap values to integers
    pub snapping: bool,
}

impl<V> JumpOptions<V> {
    pub fn new(end: V, power: f32, jumps: u32) -> Self {
        Self {
            end,
            power,
            jumps,
            snapping: false,
        }
    }
}

/// Path-follow parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathOptions {
    pub path_type: PathType,
    pub mode: PathMode,
    /// Subdivisions per segment for curved paths; unused by linear paths
    pub resolution: u32,
    /// Debug colour for drawing the path while it runs
    pub gizmo_color: Option<[f32; 4]>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            path_type: PathType::Linear,
            mode: PathMode::Full3D,
            resolution: 10,
            gizmo_color: None,
        }
    }
}

/// Look-at parameters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAtOptions {
    pub axis_constraint: AxisConstraint,
    /// Up direction, engine default when `None`
    pub up: Option<Vec3>,
}

// ============================================================================
// Engine seams
// ============================================================================

/// Tween factories for a scene transform, supplied by the engine
pub trait TransformTweens {
    type Tweener: Easable;
    type Sequence: Easable;

    fn tween_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> Self::Tweener;
    fn tween_local_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> Self::Tweener;
    fn tween_local_move_axis(
        &mut self,
        axis: Axis,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_rotate(&mut self, end: Vec3, mode: RotateMode, duration: f32) -> Self::Tweener;
    fn tween_rotate_quaternion(&mut self, end: Quat, duration: f32) -> Self::Tweener;
    fn tween_scale(&mut self, end: Vec3, duration: f32) -> Self::Tweener;
    fn tween_scale_uniform(&mut self, end: f32, duration: f32) -> Self::Tweener;
    fn tween_punch_position(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_punch_rotation(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_punch_scale(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_shake_position(&mut self, options: ShakeOptions, duration: f32) -> Self::Tweener;
    fn tween_shake_rotation(&mut self, options: ShakeOptions, duration: f32) -> Self::Tweener;
    fn tween_shake_scale(&mut self, options: ShakeOptions, duration: f32) -> Self::Tweener;
    fn tween_local_jump(&mut self, jump: JumpOptions<Vec3>, duration: f32) -> Self::Sequence;
    fn tween_path(&mut self, path: &[Vec3], options: PathOptions, duration: f32) -> Self::Tweener;
}

/// Tween factories for a 3D physics body, supplied by the engine
pub trait BodyTweens {
    type Tweener: Easable;
    type Sequence: Easable;

    fn tween_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> Self::Tweener;
    fn tween_move_axis(
        &mut self,
        axis: Axis,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_rotate(&mut self, end: Vec3, mode: RotateMode, duration: f32) -> Self::Tweener;
    fn tween_look_at(
        &mut self,
        towards: Vec3,
        options: LookAtOptions,
        duration: f32,
    ) -> Self::Tweener;
    fn tween_jump(&mut self, jump: JumpOptions<Vec3>, duration: f32) -> Self::Sequence;
    fn tween_path(&mut self, path: &[Vec3], options: PathOptions, duration: f32) -> Self::Tweener;
    fn tween_local_path(
        &mut self,
        path: &[Vec3],
        options: PathOptions,
        duration: f32,
    ) -> Self::Tweener;
}

/// Tween factories for a 2D physics body, supplied by the engine
pub trait Body2dTweens {
    type Tweener: Easable;
    type Sequence: Easable;

    fn tween_move(&mut self, end: Vec2, snapping: bool, duration: f32) -> Self::Tweener;
    fn tween_move_axis(
        &mut self,
        axis: Axis2,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> Self::Tweener;
    /// Rotation in degrees
    fn tween_rotate(&mut self, end: f32, duration: f32) -> Self::Tweener;
    fn tween_jump(&mut self, jump: JumpOptions<Vec2>, duration: f32) -> Self::Sequence;
    fn tween_path(&mut self, path: &[Vec2], options: PathOptions, duration: f32) -> Self::Tweener;
    fn tween_local_path(
        &mut self,
        path: &[Vec2],
        options: PathOptions,
        duration: f32,
    ) -> Self::Tweener;
}

// ============================================================================
// Parameterised motions
// ============================================================================

/// Transform motions driven by [`AnimationParameters`]
pub trait TransformMotion: TransformTweens {
    /// Move to a world position
    fn move_to(
        &mut self,
        end: Vec3,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_move(end, snapping, d))
    }

    /// Move to a local position
    fn local_move_to(
        &mut self,
        end: Vec3,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_move(end, snapping, d))
    }

    fn local_move_x(
        &mut self,
        end: f32,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_move_axis(Axis::X, end, snapping, d))
    }

    fn local_move_y(
        &mut self,
        end: f32,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_move_axis(Axis::Y, end, snapping, d))
    }

    fn local_move_z(
        &mut self,
        end: f32,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_move_axis(Axis::Z, end, snapping, d))
    }

    /// Rotate to euler angles (degrees)
    fn rotate_to(
        &mut self,
        end: Vec3,
        params: &AnimationParameters,
        mode: RotateMode,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_rotate(end, mode, d))
    }

    /// Rotate to a quaternion. Prefer [`rotate_to`](Self::rotate_to); this
    /// does not support incremental loops.
    fn rotate_quaternion_to(&mut self, end: Quat, params: &AnimationParameters) -> Self::Tweener {
        tween_with(params, |d| self.tween_rotate_quaternion(end, d))
    }

    fn scale_to(&mut self, end: Vec3, params: &AnimationParameters) -> Self::Tweener {
        tween_with(params, |d| self.tween_scale(end, d))
    }

    fn scale_uniform_to(&mut self, end: f32, params: &AnimationParameters) -> Self::Tweener {
        tween_with(params, |d| self.tween_scale_uniform(end, d))
    }

    /// Punch the local position towards `punch` and spring back
    fn punch_position(
        &mut self,
        punch: Vec3,
        params: &AnimationParameters,
        options: PunchOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_punch_position(punch, options, d))
    }

    fn punch_rotation(
        &mut self,
        punch: Vec3,
        params: &AnimationParameters,
        options: PunchOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_punch_rotation(punch, options, d))
    }

    fn punch_scale(
        &mut self,
        punch: Vec3,
        params: &AnimationParameters,
        options: PunchOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_punch_scale(punch, options, d))
    }

    fn shake_position(
        &mut self,
        params: &AnimationParameters,
        options: ShakeOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_shake_position(options, d))
    }

    fn shake_rotation(
        &mut self,
        params: &AnimationParameters,
        options: ShakeOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_shake_rotation(options, d))
    }

    fn shake_scale(
        &mut self,
        params: &AnimationParameters,
        options: ShakeOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_shake_scale(options, d))
    }

    /// Jump to a local position. Returns a sequence; the ease applies to the
    /// whole sequence.
    fn local_jump(
        &mut self,
        jump: JumpOptions<Vec3>,
        params: &AnimationParameters,
    ) -> Self::Sequence {
        tween_with(params, |d| self.tween_local_jump(jump, d))
    }

    /// Follow a path through the given waypoints
    fn follow_path(
        &mut self,
        path: &[Vec3],
        params: &AnimationParameters,
        options: PathOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_path(path, options, d))
    }
}

impl<T: TransformTweens + ?Sized> TransformMotion for T {}

/// 3D physics body motions driven by [`AnimationParameters`].
///
/// Bodies should be kinematic while tweened.
pub trait BodyMotion: BodyTweens {
    fn move_to(
        &mut self,
        end: Vec3,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_move(end, snapping, d))
    }

    fn move_x(&mut self, end: f32, params: &AnimationParameters, snapping: bool) -> Self::Tweener {
        tween_with(params, |d| self.tween_move_axis(Axis::X, end, snapping, d))
    }

    fn move_y(&mut self, end: f32, params: &AnimationParameters, snapping: bool) -> Self::Tweener {
        tween_with(params, |d| self.tween_move_axis(Axis::Y, end, snapping, d))
    }

    fn move_z(&mut self, end: f32, params: &AnimationParameters, snapping: bool) -> Self::Tweener {
        tween_with(params, |d| self.tween_move_axis(Axis::Z, end, snapping, d))
    }

    fn rotate_to(
        &mut self,
        end: Vec3,
        params: &AnimationParameters,
        mode: RotateMode,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_rotate(end, mode, d))
    }

    /// Rotate so the body faces `towards`
    fn look_at(
        &mut self,
        towards: Vec3,
        params: &AnimationParameters,
        options: LookAtOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_look_at(towards, options, d))
    }

    fn jump(&mut self, jump: JumpOptions<Vec3>, params: &AnimationParameters) -> Self::Sequence {
        tween_with(params, |d| self.tween_jump(jump, d))
    }

    fn follow_path(
        &mut self,
        path: &[Vec3],
        params: &AnimationParameters,
        options: PathOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_path(path, options, d))
    }

    fn follow_local_path(
        &mut self,
        path: &[Vec3],
        params: &AnimationParameters,
        options: PathOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_path(path, options, d))
    }
}

impl<T: BodyTweens + ?Sized> BodyMotion for T {}

/// 2D physics body motions driven by [`AnimationParameters`]
pub trait Body2dMotion: Body2dTweens {
    fn move_to(
        &mut self,
        end: Vec2,
        params: &AnimationParameters,
        snapping: bool,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_move(end, snapping, d))
    }

    fn move_x(&mut self, end: f32, params: &AnimationParameters, snapping: bool) -> Self::Tweener {
        tween_with(params, |d| self.tween_move_axis(Axis2::X, end, snapping, d))
    }

    fn move_y(&mut self, end: f32, params: &AnimationParameters, snapping: bool) -> Self::Tweener {
        tween_with(params, |d| self.tween_move_axis(Axis2::Y, end, snapping, d))
    }

    fn rotate_to(&mut self, end: f32, params: &AnimationParameters) -> Self::Tweener {
        tween_with(params, |d| self.tween_rotate(end, d))
    }

    /// Jump arc positions are set directly, not through physics moves
    fn jump(&mut self, jump: JumpOptions<Vec2>, params: &AnimationParameters) -> Self::Sequence {
        tween_with(params, |d| self.tween_jump(jump, d))
    }

    fn follow_path(
        &mut self,
        path: &[Vec2],
        params: &AnimationParameters,
        options: PathOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_path(path, options, d))
    }

    fn follow_local_path(
        &mut self,
        path: &[Vec2],
        params: &AnimationParameters,
        options: PathOptions,
    ) -> Self::Tweener {
        tween_with(params, |d| self.tween_local_path(path, options, d))
    }
}

impl<T: Body2dTweens + ?Sized> Body2dMotion for T {}
