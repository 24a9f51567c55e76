use motif_animation::headless::{
    HeadlessBody, HeadlessBody2d, HeadlessTarget, Motion, Property, ENGINE_DEFAULT_EASE,
};
use motif_animation::prelude::*;

fn bounce() -> AnimationParameters {
    AnimationParameters::new(false, Ease::OutBounce, 2.0, Curve::linear())
}

fn custom() -> AnimationParameters {
    let curve = Curve::new([
        CurveKey::new(0.0, 0.0),
        CurveKey::new(0.5, 0.8),
        CurveKey::new(1.0, 1.0),
    ]);
    AnimationParameters::new(true, Ease::InOutElastic, 0.5, curve)
}

#[test]
fn named_ease_scenario() {
    let mut target = HeadlessTarget::default();
    let tween = target.move_to(Vec3::new(1.0, 2.0, 3.0), &bounce(), false);

    assert_eq!(tween.ease(), &EaseSource::Named(Ease::OutBounce));
    assert_eq!(tween.duration(), 2.0);
    assert_eq!(tween.ease_assignments(), 1);
    assert!((tween.eased_progress(1.0) - Ease::OutBounce.apply(0.5)).abs() < 1e-6);
}

#[test]
fn custom_curve_scenario() {
    let params = custom();
    let mut target = HeadlessTarget::default();
    let tween = target.scale_uniform_to(2.0, &params);

    assert_eq!(tween.duration(), 0.5);
    assert_eq!(
        tween.ease(),
        &EaseSource::Custom(params.custom_curve().unwrap().clone())
    );
    // Sampled from the curve, not from the elastic ease that was also authored
    assert!((tween.eased_progress(0.25) - 0.8).abs() < 1e-6);
}

#[test]
fn zero_duration_reaches_the_engine_unchanged() {
    let params = AnimationParameters::named(Ease::Linear, 0.0);
    let mut target = HeadlessTarget::default();
    assert_eq!(target.rotate_to(Vec3::Y * 90.0, &params, RotateMode::Fast).duration(), 0.0);

    let negative = AnimationParameters::named(Ease::Linear, -3.0);
    assert_eq!(target.shake_scale(&negative, ShakeOptions::scale()).duration(), -3.0);
}

#[test]
fn resolution_is_idempotent() {
    let params = custom();
    let mut target = HeadlessTarget::default();
    let once = target.punch_scale(Vec3::ONE, &params, PunchOptions::default());
    let mut twice = once.clone();
    apply_ease(&mut twice, &params);

    assert_eq!(once.ease(), twice.ease());
    assert_eq!(once.motion(), twice.motion());
    assert_eq!(once.duration(), twice.duration());
}

#[test]
fn shared_parameters_do_not_cross_talk() {
    let shared = bounce();
    let mut target = HeadlessTarget::default();
    let mut first = target.local_move_x(4.0, &shared, false);
    let mut second = target.local_move_y(4.0, &shared, false);
    assert_eq!(first.ease(), second.ease());

    apply_ease(&mut first, &AnimationParameters::named(Ease::InQuad, 1.0));
    apply_ease(&mut second, &custom());

    assert_eq!(first.ease(), &EaseSource::Named(Ease::InQuad));
    assert_eq!(second.ease(), custom().ease());
    assert_eq!(shared, bounce());
}

#[test]
fn every_transform_motion_is_eased() {
    let params = bounce();
    let expected = EaseSource::Named(Ease::OutBounce);
    let mut target = HeadlessTarget::default();
    let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];

    let tweens = vec![
        target.move_to(Vec3::X, &params, false),
        target.local_move_to(Vec3::X, &params, true),
        target.local_move_x(1.0, &params, false),
        target.local_move_y(1.0, &params, false),
        target.local_move_z(1.0, &params, false),
        target.rotate_to(Vec3::Z * 45.0, &params, RotateMode::FastBeyond360),
        target.rotate_quaternion_to(Quat::IDENTITY, &params),
        target.scale_to(Vec3::splat(2.0), &params),
        target.scale_uniform_to(2.0, &params),
        target.punch_position(Vec3::Y, &params, PunchOptions::default()),
        target.punch_rotation(Vec3::Y, &params, PunchOptions::default()),
        target.punch_scale(Vec3::Y, &params, PunchOptions::default()),
        target.shake_position(&params, ShakeOptions::position()),
        target.shake_rotation(&params, ShakeOptions::rotation()),
        target.shake_scale(&params, ShakeOptions::scale()),
        target.follow_path(&path, &params, PathOptions::default()),
    ];

    for tween in &tweens {
        assert_eq!(tween.ease(), &expected, "{:?}", tween.motion());
        assert_eq!(tween.duration(), 2.0);
        assert_eq!(tween.ease_assignments(), 1);
    }

    let jump = target.local_jump(JumpOptions::new(Vec3::X, 1.0, 2), &params);
    assert_eq!(jump.ease(), &expected);
    // The sequence is eased as a whole; its steps keep the engine default
    assert!(jump
        .steps()
        .iter()
        .all(|step| step.ease() == &EaseSource::Named(ENGINE_DEFAULT_EASE)));
}

#[test]
fn options_are_forwarded() {
    let params = bounce();
    let mut target = HeadlessTarget::default();

    let shake = target.shake_rotation(&params, ShakeOptions::rotation().with_strength(30.0));
    match shake.motion() {
        Motion::Shake { property, options } => {
            assert_eq!(*property, Property::Rotation);
            assert_eq!(options.strength, 30.0);
            assert_eq!(options.vibrato, 10);
            assert!(options.fade_out);
        }
        other => panic!("unexpected motion {other:?}"),
    }

    let moved = target.move_to(Vec3::X, &params, true);
    assert!(matches!(moved.motion(), Motion::Move { snapping: true, local: false, .. }));

    let rotated = target.rotate_to(Vec3::X, &params, RotateMode::LocalAxisAdd);
    assert!(matches!(
        rotated.motion(),
        Motion::Rotate {
            mode: RotateMode::LocalAxisAdd,
            ..
        }
    ));
}

#[test]
fn body_motions_are_eased() {
    let params = custom();
    let expected = params.ease().clone();
    let mut body = HeadlessBody::default();
    let path = [Vec3::ZERO, Vec3::Z];

    let tweens = vec![
        body.move_to(Vec3::X, &params, false),
        body.move_x(1.0, &params, false),
        body.move_y(1.0, &params, false),
        body.move_z(1.0, &params, false),
        body.rotate_to(Vec3::Y, &params, RotateMode::Fast),
        body.look_at(Vec3::Z, &params, LookAtOptions::default()),
        body.follow_path(&path, &params, PathOptions::default()),
        body.follow_local_path(&path, &params, PathOptions::default()),
    ];
    for tween in &tweens {
        assert_eq!(tween.ease(), &expected);
        assert_eq!(tween.duration(), 0.5);
    }

    let jump = body.jump(JumpOptions::new(Vec3::X, 2.0, 3), &params);
    assert_eq!(jump.ease(), &expected);
    assert_eq!(jump.steps().len(), 3);
}

#[test]
fn body2d_motions_are_eased() {
    let params = bounce();
    let expected = EaseSource::Named(Ease::OutBounce);
    let mut body = HeadlessBody2d::default();
    let path = [Vec2::ZERO, Vec2::ONE];

    let tweens = vec![
        body.move_to(Vec2::ONE, &params, false),
        body.move_x(1.0, &params, false),
        body.move_y(1.0, &params, false),
        body.rotate_to(180.0, &params),
        body.follow_path(&path, &params, PathOptions::default()),
        body.follow_local_path(&path, &params, PathOptions::default()),
    ];
    for tween in &tweens {
        assert_eq!(tween.ease(), &expected);
    }

    let jump = body.jump(JumpOptions::new(Vec2::new(3.0, 0.0), 1.0, 1), &params);
    assert_eq!(jump.ease(), &expected);
    assert_eq!(jump.ease_assignments(), 1);
}

#[test]
fn with_params_reassigns_an_existing_handle() {
    let mut target = HeadlessTarget::default();
    let tween = target
        .move_to(Vec3::X, &bounce(), false)
        .with_params(&AnimationParameters::named(Ease::InCirc, 9.0));

    assert_eq!(tween.ease(), &EaseSource::Named(Ease::InCirc));
    // Re-easing never touches the duration
    assert_eq!(tween.duration(), 2.0);
    assert_eq!(tween.ease_assignments(), 2);
}

#[test]
fn parameters_are_shared_across_threads() {
    let params = std::sync::Arc::new(bounce());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let params = params.clone();
            std::thread::spawn(move || {
                let mut target = HeadlessTarget::default();
                target.move_to(Vec3::splat(i as f32), &params, false)
            })
        })
        .collect();

    for handle in handles {
        let tween = handle.join().unwrap();
        assert_eq!(tween.ease(), &EaseSource::Named(Ease::OutBounce));
    }
}
