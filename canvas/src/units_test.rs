#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn mm_px_roundtrip_is_stable() {
    let px = mm_to_px(25.4);
    assert!((px - 96.0).abs() < 1e-9);
    assert!((px_to_mm(px) - 25.4).abs() < 1e-9);
}

#[test]
fn metric_uses_one_decimal() {
    assert_eq!(format_mm(12.34), "12.3mm");
    assert_eq!(format_mm(7.0), "7.0mm");
}

#[test]
fn inches_reduce_fraction() {
    assert_eq!(format_inches(6.35), "1/4\"");
    assert_eq!(format_inches(9.525), "3/8\"");
    assert_eq!(format_inches(7.14375), "9/32\"");
}

#[test]
fn inches_with_whole_part() {
    assert_eq!(format_inches(31.75), "1-1/4\"");
    assert_eq!(format_inches(50.8), "2\"");
}

#[test]
fn inches_round_to_nearest_sixty_fourth() {
    // 3.5mm is 8.82/64 in.
    assert_eq!(format_inches(3.5), "9/64\"");
}

#[test]
fn inches_zero() {
    assert_eq!(format_inches(0.0), "0\"");
}

#[test]
fn format_dimension_dispatches_on_unit() {
    assert_eq!(format_dimension(9.525, Unit::Metric), "9.5mm");
    assert_eq!(format_dimension(9.525, Unit::Imperial), "3/8\"");
}

#[test]
fn unit_parses_aliases() {
    assert_eq!("mm".parse::<Unit>(), Ok(Unit::Metric));
    assert_eq!("Imperial".parse::<Unit>(), Ok(Unit::Imperial));
    assert!("furlong".parse::<Unit>().is_err());
}

#[test]
fn unit_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Unit::Imperial).unwrap(), "\"imperial\"");
    let u: Unit = serde_json::from_str("\"metric\"").unwrap();
    assert_eq!(u, Unit::Metric);
}
