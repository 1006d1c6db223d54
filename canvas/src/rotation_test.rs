#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_zero() {
    assert_eq!(Rotation::default(), Rotation::Deg0);
}

#[test]
fn toggled_flips_between_two_values() {
    assert_eq!(Rotation::Deg0.toggled(), Rotation::Deg90);
    assert_eq!(Rotation::Deg90.toggled(), Rotation::Deg0);
}

#[test]
fn combined_wraps_mod_360() {
    assert_eq!(Rotation::Deg90.combined_degrees(Rotation::Deg90), 180);
    assert_eq!(Rotation::Deg0.combined_degrees(Rotation::Deg90), 90);
    assert_eq!(Rotation::Deg0.combined_degrees(Rotation::Deg0), 0);
}

#[test]
fn apply_quarter_turn_is_clockwise_on_screen() {
    // +x (right) turns to +y (down).
    let v = Rotation::Deg90.apply(Point::new(1.0, 0.0));
    assert_eq!(v, Point::new(0.0, 1.0));
}

#[test]
fn invert_undoes_apply() {
    let v = Point::new(3.5, -7.25);
    for r in [Rotation::Deg0, Rotation::Deg90] {
        assert_eq!(r.invert(r.apply(v)), v);
        assert_eq!(r.apply(r.invert(v)), v);
    }
}

#[test]
fn extents_swap_only_on_quarter_turn() {
    assert_eq!(Rotation::Deg0.extents(10.0, 4.0), (10.0, 4.0));
    assert_eq!(Rotation::Deg90.extents(10.0, 4.0), (4.0, 10.0));
}

#[test]
fn try_from_accepts_only_axis_values() {
    assert_eq!(Rotation::try_from(0.0), Ok(Rotation::Deg0));
    assert_eq!(Rotation::try_from(90.0), Ok(Rotation::Deg90));
    assert_eq!(Rotation::try_from(360.0), Ok(Rotation::Deg0));
    assert_eq!(Rotation::try_from(450.0), Ok(Rotation::Deg90));
    assert!(Rotation::try_from(45.0).is_err());
    assert!(Rotation::try_from(180.0).is_err());
}

#[test]
fn serde_uses_plain_degrees() {
    assert_eq!(serde_json::to_string(&Rotation::Deg90).unwrap(), "90.0");
    let r: Rotation = serde_json::from_str("90").unwrap();
    assert_eq!(r, Rotation::Deg90);
    assert!(serde_json::from_str::<Rotation>("30").is_err());
}

#[test]
fn radians_matches_degrees() {
    assert_eq!(Rotation::Deg0.radians(), 0.0);
    assert!((Rotation::Deg90.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}
