//! Headless engine targets
//!
//! Minimal implementations of the engine seams that record what was asked
//! of them instead of scheduling playback. Useful for tests, tooling, and
//! as a reference when wiring a real engine.

use glam::{Quat, Vec2, Vec3};
use smallvec::SmallVec;

use crate::curve::Curve;
use crate::easing::Ease;
use crate::motion::{
    Axis, Axis2, Body2dTweens, BodyTweens, JumpOptions, LookAtOptions, PathOptions, PunchOptions,
    RotateMode, ShakeOptions, TransformTweens,
};
use crate::params::EaseSource;
use crate::resolve::Easable;

/// Ease a fresh handle starts with before anything is assigned
pub const ENGINE_DEFAULT_EASE: Ease = Ease::OutQuad;

/// Transform property targeted by punches and shakes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Position,
    Rotation,
    Scale,
}

/// A recorded motion request
#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    Move {
        from: Vec3,
        to: Vec3,
        local: bool,
        snapping: bool,
    },
    MoveAxis {
        axis: Axis,
        from: f32,
        to: f32,
        local: bool,
        snapping: bool,
    },
    Rotate {
        from: Vec3,
        to: Vec3,
        mode: RotateMode,
    },
    RotateQuaternion {
        from: Quat,
        to: Quat,
    },
    LookAt {
        towards: Vec3,
        options: LookAtOptions,
    },
    Scale {
        from: Vec3,
        to: Vec3,
    },
    Punch {
        property: Property,
        punch: Vec3,
        options: PunchOptions,
    },
    Shake {
        property: Property,
        options: ShakeOptions,
    },
    Path {
        waypoints: Vec<Vec3>,
        local: bool,
        options: PathOptions,
    },
    Jump {
        from: Vec3,
        to: Vec3,
        power: f32,
        jumps: u32,
        snapping: bool,
    },
    JumpArc {
        power: f32,
    },
}

/// A recorded tween handle
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessTween {
    motion: Motion,
    duration: f32,
    ease: EaseSource,
    ease_assignments: u32,
}

impl HeadlessTween {
    pub fn new(motion: Motion, duration: f32) -> Self {
        tracing::debug!(?motion, duration, "headless tween created");
        Self {
            motion,
            duration,
            ease: EaseSource::Named(ENGINE_DEFAULT_EASE),
            ease_assignments: 0,
        }
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Duration exactly as the factory received it
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn ease(&self) -> &EaseSource {
        &self.ease
    }

    /// How many times an ease has been assigned to this handle
    pub fn ease_assignments(&self) -> u32 {
        self.ease_assignments
    }

    /// Eased progress after `elapsed` seconds
    pub fn eased_progress(&self, elapsed: f32) -> f32 {
        self.ease.evaluate(normalized(elapsed, self.duration))
    }

    /// Interpolated value after `elapsed` seconds, for motions with a
    /// vector start and end
    pub fn sample(&self, elapsed: f32) -> Option<Vec3> {
        let progress = self.eased_progress(elapsed);
        match &self.motion {
            Motion::Move { from, to, .. }
            | Motion::Rotate { from, to, .. }
            | Motion::Scale { from, to }
            | Motion::Jump { from, to, .. } => Some(from.lerp(*to, progress)),
            _ => None,
        }
    }
}

impl Easable for HeadlessTween {
    fn set_ease(&mut self, ease: Ease) {
        self.ease = EaseSource::Named(ease);
        self.ease_assignments += 1;
    }

    fn set_ease_curve(&mut self, curve: &Curve) {
        self.ease = EaseSource::Custom(curve.clone());
        self.ease_assignments += 1;
    }
}

/// A recorded sequence handle. Its ease applies to the whole sequence; the
/// steps keep their own.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessSequence {
    root: HeadlessTween,
    steps: SmallVec<[HeadlessTween; 4]>,
}

impl HeadlessSequence {
    /// The sequence-level handle (motion, duration, ease)
    pub fn root(&self) -> &HeadlessTween {
        &self.root
    }

    pub fn steps(&self) -> &[HeadlessTween] {
        &self.steps
    }

    pub fn duration(&self) -> f32 {
        self.root.duration()
    }

    pub fn ease(&self) -> &EaseSource {
        self.root.ease()
    }

    pub fn ease_assignments(&self) -> u32 {
        self.root.ease_assignments()
    }
}

impl Easable for HeadlessSequence {
    fn set_ease(&mut self, ease: Ease) {
        self.root.set_ease(ease);
    }

    fn set_ease_curve(&mut self, curve: &Curve) {
        self.root.set_ease_curve(curve);
    }
}

fn normalized(elapsed: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

fn jump_sequence(from: Vec3, jump: JumpOptions<Vec3>, duration: f32) -> HeadlessSequence {
    let root = HeadlessTween::new(
        Motion::Jump {
            from,
            to: jump.end,
            power: jump.power,
            jumps: jump.jumps,
            snapping: jump.snapping,
        },
        duration,
    );
    let arc_duration = if jump.jumps > 0 {
        duration / jump.jumps as f32
    } else {
        duration
    };
    let steps = (0..jump.jumps)
        .map(|_| HeadlessTween::new(Motion::JumpArc { power: jump.power }, arc_duration))
        .collect();
    HeadlessSequence { root, steps }
}

fn axis_component(v: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

// ============================================================================
// Targets
// ============================================================================

/// A scene transform
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessTarget {
    pub position: Vec3,
    pub local_position: Vec3,
    /// Euler angles in degrees
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for HeadlessTarget {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            local_position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl HeadlessTarget {
    fn quaternion(&self) -> Quat {
        let r = self.rotation * (std::f32::consts::PI / 180.0);
        Quat::from_euler(glam::EulerRot::YXZ, r.y, r.x, r.z)
    }
}

impl TransformTweens for HeadlessTarget {
    type Tweener = HeadlessTween;
    type Sequence = HeadlessSequence;

    fn tween_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> HeadlessTween {
        let motion = Motion::Move {
            from: self.position,
            to: end,
            local: false,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_local_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> HeadlessTween {
        let motion = Motion::Move {
            from: self.local_position,
            to: end,
            local: true,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_local_move_axis(
        &mut self,
        axis: Axis,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::MoveAxis {
            axis,
            from: axis_component(self.local_position, axis),
            to: end,
            local: true,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_rotate(&mut self, end: Vec3, mode: RotateMode, duration: f32) -> HeadlessTween {
        let motion = Motion::Rotate {
            from: self.rotation,
            to: end,
            mode,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_rotate_quaternion(&mut self, end: Quat, duration: f32) -> HeadlessTween {
        let motion = Motion::RotateQuaternion {
            from: self.quaternion(),
            to: end,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_scale(&mut self, end: Vec3, duration: f32) -> HeadlessTween {
        let motion = Motion::Scale {
            from: self.scale,
            to: end,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_scale_uniform(&mut self, end: f32, duration: f32) -> HeadlessTween {
        self.tween_scale(Vec3::splat(end), duration)
    }

    fn tween_punch_position(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::Punch {
            property: Property::Position,
            punch,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_punch_rotation(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::Punch {
            property: Property::Rotation,
            punch,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_punch_scale(
        &mut self,
        punch: Vec3,
        options: PunchOptions,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::Punch {
            property: Property::Scale,
            punch,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_shake_position(&mut self, options: ShakeOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Shake {
            property: Property::Position,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_shake_rotation(&mut self, options: ShakeOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Shake {
            property: Property::Rotation,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_shake_scale(&mut self, options: ShakeOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Shake {
            property: Property::Scale,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_local_jump(&mut self, jump: JumpOptions<Vec3>, duration: f32) -> HeadlessSequence {
        jump_sequence(self.local_position, jump, duration)
    }

    fn tween_path(&mut self, path: &[Vec3], options: PathOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Path {
            waypoints: path.to_vec(),
            local: false,
            options,
        };
        HeadlessTween::new(motion, duration)
    }
}

/// A 3D physics body
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessBody {
    pub position: Vec3,
    /// Euler angles in degrees
    pub rotation: Vec3,
}

impl BodyTweens for HeadlessBody {
    type Tweener = HeadlessTween;
    type Sequence = HeadlessSequence;

    fn tween_move(&mut self, end: Vec3, snapping: bool, duration: f32) -> HeadlessTween {
        let motion = Motion::Move {
            from: self.position,
            to: end,
            local: false,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_move_axis(
        &mut self,
        axis: Axis,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::MoveAxis {
            axis,
            from: axis_component(self.position, axis),
            to: end,
            local: false,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_rotate(&mut self, end: Vec3, mode: RotateMode, duration: f32) -> HeadlessTween {
        let motion = Motion::Rotate {
            from: self.rotation,
            to: end,
            mode,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_look_at(
        &mut self,
        towards: Vec3,
        options: LookAtOptions,
        duration: f32,
    ) -> HeadlessTween {
        HeadlessTween::new(Motion::LookAt { towards, options }, duration)
    }

    fn tween_jump(&mut self, jump: JumpOptions<Vec3>, duration: f32) -> HeadlessSequence {
        jump_sequence(self.position, jump, duration)
    }

    fn tween_path(&mut self, path: &[Vec3], options: PathOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Path {
            waypoints: path.to_vec(),
            local: false,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_local_path(
        &mut self,
        path: &[Vec3],
        options: PathOptions,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::Path {
            waypoints: path.to_vec(),
            local: true,
            options,
        };
        HeadlessTween::new(motion, duration)
    }
}

/// A 2D physics body. Recorded motions are lifted into 3D with z = 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessBody2d {
    pub position: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
}

impl Body2dTweens for HeadlessBody2d {
    type Tweener = HeadlessTween;
    type Sequence = HeadlessSequence;

    fn tween_move(&mut self, end: Vec2, snapping: bool, duration: f32) -> HeadlessTween {
        let motion = Motion::Move {
            from: self.position.extend(0.0),
            to: end.extend(0.0),
            local: false,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_move_axis(
        &mut self,
        axis: Axis2,
        end: f32,
        snapping: bool,
        duration: f32,
    ) -> HeadlessTween {
        let (axis, from) = match axis {
            Axis2::X => (Axis::X, self.position.x),
            Axis2::Y => (Axis::Y, self.position.y),
        };
        let motion = Motion::MoveAxis {
            axis,
            from,
            to: end,
            local: false,
            snapping,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_rotate(&mut self, end: f32, duration: f32) -> HeadlessTween {
        let motion = Motion::Rotate {
            from: Vec3::new(0.0, 0.0, self.rotation),
            to: Vec3::new(0.0, 0.0, end),
            mode: RotateMode::Fast,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_jump(&mut self, jump: JumpOptions<Vec2>, duration: f32) -> HeadlessSequence {
        let lifted = JumpOptions {
            end: jump.end.extend(0.0),
            power: jump.power,
            jumps: jump.jumps,
            snapping: jump.snapping,
        };
        jump_sequence(self.position.extend(0.0), lifted, duration)
    }

    fn tween_path(&mut self, path: &[Vec2], options: PathOptions, duration: f32) -> HeadlessTween {
        let motion = Motion::Path {
            waypoints: path.iter().map(|p| p.extend(0.0)).collect(),
            local: false,
            options,
        };
        HeadlessTween::new(motion, duration)
    }

    fn tween_local_path(
        &mut self,
        path: &[Vec2],
        options: PathOptions,
        duration: f32,
    ) -> HeadlessTween {
        let motion = Motion::Path {
            waypoints: path.iter().map(|p| p.extend(0.0)).collect(),
            local: true,
            options,
        };
        HeadlessTween::new(motion, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tween_uses_engine_default() {
        let tween = HeadlessTween::new(Motion::JumpArc { power: 1.0 }, 1.0);
        assert_eq!(tween.ease(), &EaseSource::Named(ENGINE_DEFAULT_EASE));
        assert_eq!(tween.ease_assignments(), 0);
    }

    #[test]
    fn test_non_positive_duration_completes_immediately() {
        let tween = HeadlessTween::new(Motion::JumpArc { power: 1.0 }, 0.0);
        assert_eq!(tween.eased_progress(0.0), 1.0);
    }

    #[test]
    fn test_sample_interpolates_move() {
        let mut target = HeadlessTarget::default();
        let mut tween = target.tween_move(Vec3::new(10.0, 0.0, 0.0), false, 2.0);
        tween.set_ease(Ease::Linear);
        assert_eq!(tween.sample(1.0), Some(Vec3::new(5.0, 0.0, 0.0)));
        assert_eq!(tween.sample(5.0), Some(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_shake_has_no_sample() {
        let mut target = HeadlessTarget::default();
        let tween = target.tween_shake_position(ShakeOptions::position(), 1.0);
        assert_eq!(tween.sample(0.5), None);
    }

    #[test]
    fn test_jump_sequence_splits_arcs() {
        let mut body = HeadlessBody::default();
        let sequence = body.tween_jump(JumpOptions::new(Vec3::X, 2.0, 4), 2.0);
        assert_eq!(sequence.steps().len(), 4);
        assert!(sequence.steps().iter().all(|s| s.duration() == 0.5));
        assert_eq!(sequence.duration(), 2.0);
    }

    #[test]
    fn test_body2d_lifts_into_3d() {
        let mut body = HeadlessBody2d {
            position: Vec2::new(1.0, 2.0),
            rotation: 0.0,
        };
        let tween = body.tween_move_axis(Axis2::Y, 5.0, true, 1.0);
        assert_eq!(
            tween.motion(),
            &Motion::MoveAxis {
                axis: Axis::Y,
                from: 2.0,
                to: 5.0,
                local: false,
                snapping: true,
            }
        );
    }
}
