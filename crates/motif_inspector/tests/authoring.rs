use motif_animation::headless::HeadlessTarget;
use motif_animation::prelude::*;
use motif_animation::ParamsLibrary;
use motif_inspector::{ActiveField, DrawerField, ParamsForm, Rect};

#[test]
fn authored_parameters_drive_motions() {
    let mut form = ParamsForm::default();
    form.set_custom(true);
    form.set_curve(Curve::ease_in_out());
    form.set_duration_text("0.5").unwrap();
    let params = form.commit();

    let mut target = HeadlessTarget::default();
    let tween = target.scale_to(Vec3::splat(2.0), &params);
    assert_eq!(tween.ease(), &EaseSource::Custom(Curve::ease_in_out()));
    assert_eq!(tween.duration(), 0.5);
}

#[test]
fn editing_a_library_entry() {
    let mut library = ParamsLibrary::builtin();
    let mut form = ParamsForm::from_params(library.get("bouncy").unwrap());
    form.select_ease(Ease::InOutBounce);
    library.insert("bouncy", form.commit());

    let text = library.to_toml_string().unwrap();
    let reloaded = ParamsLibrary::from_toml_str(&text).unwrap();
    assert_eq!(
        reloaded.get("bouncy").unwrap().named_ease(),
        Some(Ease::InOutBounce)
    );
}

#[test]
fn clicking_the_toggle_swaps_the_source_editor() {
    let mut form = ParamsForm::default();
    let row = Rect::new(0.0, 0.0, 320.0, 18.0);

    let layout = form.layout(row);
    let (x, y) = (layout.toggle.x + 1.0, layout.toggle.y + 1.0);
    assert_eq!(layout.hit_test(x, y), Some(DrawerField::Toggle));
    assert_eq!(layout.active, ActiveField::EaseSelector);

    form.toggle_custom();
    let layout = form.layout(row);
    let mid = layout.source.x + layout.source.width / 2.0;
    assert_eq!(
        layout.hit_test(mid, 9.0),
        Some(DrawerField::Source(ActiveField::CurveEditor))
    );
}
