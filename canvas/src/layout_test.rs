#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::EnclosureType;
use crate::consts::MM_TO_PX;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rounded_60x113() -> EnclosureDescriptor {
    EnclosureDescriptor {
        name: "test",
        width_mm: 60.0,
        height_mm: 113.0,
        depth_mm: 30.0,
        corner_style: CornerStyle::Rounded,
        corner_radius_mm: 5.0,
        front_depth_mm: None,
        rotates_labels: false,
    }
}

fn sharp_box() -> EnclosureDescriptor {
    EnclosureDescriptor {
        corner_style: CornerStyle::Sharp,
        corner_radius_mm: 0.0,
        ..rounded_60x113()
    }
}

fn wedge(back: f64, front: f64) -> EnclosureDescriptor {
    EnclosureDescriptor {
        width_mm: 100.0,
        height_mm: 80.0,
        depth_mm: back,
        corner_style: CornerStyle::Sharp,
        corner_radius_mm: 0.0,
        front_depth_mm: Some(front),
        ..rounded_60x113()
    }
}

// =============================================================
// Face sizes
// =============================================================

#[test]
fn rounded_faces_lose_two_corner_radii() {
    let faces = FaceSet::from_descriptor(&rounded_60x113());
    assert_eq!(faces.top.width_mm, 50.0);
    assert_eq!(faces.bottom.width_mm, 50.0);
    assert_eq!(faces.left.height_mm, 103.0);
    assert_eq!(faces.right.height_mm, 103.0);
    assert_eq!(faces.top.height_mm, 30.0);
    assert_eq!(faces.left.width_mm, 30.0);
}

#[test]
fn sharp_faces_keep_full_length() {
    let faces = FaceSet::from_descriptor(&sharp_box());
    assert_eq!(faces.top.width_mm, 60.0);
    assert_eq!(faces.left.height_mm, 113.0);
}

#[test]
fn trapezoid_faces_carry_front_width() {
    let faces = FaceSet::from_descriptor(&wedge(40.0, 20.0));
    assert!(faces.left.is_trapezoidal);
    assert_eq!(faces.left.width_mm, 40.0);
    assert_eq!(faces.left.front_width_mm, Some(20.0));
    assert_eq!(faces.top.height_mm, 40.0);
    assert_eq!(faces.bottom.height_mm, 20.0);
    assert!(!faces.front.is_trapezoidal);
}

#[test]
fn face_set_get_matches_fields() {
    let faces = FaceSet::from_descriptor(&rounded_60x113());
    assert_eq!(faces.get(Side::Top), &faces.top);
    assert_eq!(faces.get(Side::Right), &faces.right);
}

// =============================================================
// Layout rectangles
// =============================================================

#[test]
fn rounded_scenario_front_origin_and_sizes() {
    let layout = Layout::compute(&rounded_60x113());
    assert!(approx_eq(layout.top.width, 50.0 * MM_TO_PX));
    assert!(approx_eq(layout.left.height, 103.0 * MM_TO_PX));
    assert!(approx_eq(layout.front.x, layout.left.width));
    assert!(approx_eq(layout.front.y, layout.top.height));
    assert!(approx_eq(layout.front.x, 30.0 * MM_TO_PX));
}

#[test]
fn rounded_caps_are_centered_over_front() {
    let layout = Layout::compute(&rounded_60x113());
    assert!(approx_eq(layout.top.center().x, layout.front.center().x));
    assert!(approx_eq(layout.bottom.center().x, layout.front.center().x));
    assert!(approx_eq(layout.left.center().y, layout.front.center().y));
    assert!(approx_eq(layout.right.center().y, layout.front.center().y));
    assert_eq!(layout.top.y, 0.0);
    assert!(approx_eq(layout.bottom.y, layout.front.y + layout.front.height));
}

#[test]
fn rounded_totals_are_additive() {
    let layout = Layout::compute(&rounded_60x113());
    assert!(approx_eq(layout.total_width, (30.0 + 60.0 + 30.0) * MM_TO_PX));
    assert!(approx_eq(layout.total_height, (30.0 + 113.0 + 30.0) * MM_TO_PX));
}

#[test]
fn sharp_walls_align_with_front_top() {
    let layout = Layout::compute(&sharp_box());
    assert!(approx_eq(layout.left.y, layout.front.y));
    assert!(approx_eq(layout.right.y, layout.front.y));
    assert!(approx_eq(layout.total_width, (30.0 + 60.0 + 30.0) * MM_TO_PX));
}

#[test]
fn trapezoid_layout_uses_back_and_front_depth() {
    let layout = Layout::compute(&wedge(40.0, 20.0));
    assert!(approx_eq(layout.top.height, 40.0 * MM_TO_PX));
    assert!(approx_eq(layout.bottom.height, 20.0 * MM_TO_PX));
    assert!(approx_eq(layout.left.width, 40.0 * MM_TO_PX));
    assert!(approx_eq(layout.left.y, layout.front.y));
    assert_eq!(layout.left.front_width.map(|w| (w / MM_TO_PX).round()), Some(20.0));
    assert!(layout.front.front_width.is_none());
    assert!(approx_eq(layout.total_height, (40.0 + 80.0 + 20.0) * MM_TO_PX));
}

#[test]
fn catalog_layouts_never_overlap() {
    for kind in EnclosureType::ALL {
        let layout = Layout::compute(kind.descriptor());
        let faces = layout.faces();
        for (i, (side_a, a)) in faces.iter().enumerate() {
            assert!(a.width > 0.0 && a.height > 0.0, "{kind:?} {side_a} has empty size");
            for (side_b, b) in faces.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{kind:?}: {side_a} overlaps {side_b}");
            }
        }
    }
}

#[test]
fn catalog_layouts_fit_their_bounds() {
    for kind in EnclosureType::ALL {
        let layout = Layout::compute(kind.descriptor());
        for (side, rect) in layout.faces() {
            assert!(rect.x >= 0.0 && rect.y >= 0.0, "{kind:?} {side}");
            assert!(rect.x + rect.width <= layout.total_width + EPSILON, "{kind:?} {side}");
            assert!(rect.y + rect.height <= layout.total_height + EPSILON, "{kind:?} {side}");
        }
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn face_at_finds_each_face_center() {
    let layout = Layout::compute(&rounded_60x113());
    for side in Side::ALL {
        assert_eq!(layout.face_at(layout.face_center(side)), Some(side));
    }
}

#[test]
fn face_at_misses_empty_corners() {
    let layout = Layout::compute(&rounded_60x113());
    assert_eq!(layout.face_at(Point::new(1.0, 1.0)), None);
    assert_eq!(layout.face_at(Point::new(-5.0, 50.0)), None);
}

#[test]
fn shared_edge_belongs_to_one_face() {
    let layout = Layout::compute(&sharp_box());
    let edge = Point::new(layout.front.x, layout.front.center().y);
    assert_eq!(layout.face_at(edge), Some(Side::Front));
}

#[test]
fn component_center_offsets_from_face_center() {
    let layout = Layout::compute(&rounded_60x113());
    let c = layout.component_center(Side::Top, 5.0, -3.0);
    let fc = layout.top.center();
    assert!(approx_eq(c.x, fc.x + 5.0));
    assert!(approx_eq(c.y, fc.y - 3.0));
}

#[test]
fn size_matches_totals() {
    let layout = Layout::compute(&rounded_60x113());
    assert_eq!(layout.size(), Size::new(layout.total_width, layout.total_height));
}

// =============================================================
// Trapezoid containment
// =============================================================

#[test]
fn trapezoid_back_edge_center_is_inside() {
    assert!(trapezoid_contains(Point::new(0.0, -50.0), 30.0, 10.0, 100.0));
}

#[test]
fn trapezoid_rejects_one_px_past_interpolated_edge() {
    // Half-width at mid-height is (30 + 10) / 4 = 10.
    assert!(trapezoid_contains(Point::new(10.0, 0.0), 30.0, 10.0, 100.0));
    assert!(!trapezoid_contains(Point::new(11.0, 0.0), 30.0, 10.0, 100.0));
}

#[test]
fn trapezoid_front_edge_is_narrow() {
    assert!(trapezoid_contains(Point::new(-5.0, 50.0), 30.0, 10.0, 100.0));
    assert!(!trapezoid_contains(Point::new(6.0, 50.0), 30.0, 10.0, 100.0));
}

#[test]
fn trapezoid_rejects_beyond_height() {
    assert!(!trapezoid_contains(Point::new(0.0, 51.0), 30.0, 10.0, 100.0));
    assert!(!trapezoid_contains(Point::new(0.0, -51.0), 30.0, 10.0, 100.0));
}

#[test]
fn contains_local_dispatches_on_taper() {
    let plain = FaceRect { x: 0.0, y: 0.0, width: 30.0, height: 100.0, front_width: None };
    let tapered = FaceRect { front_width: Some(10.0), ..plain };
    let p = Point::new(12.0, 40.0);
    assert!(plain.contains_local(p));
    assert!(!tapered.contains_local(p));
}

#[test]
fn contains_local_matches_half_open_rect() {
    let plain = FaceRect { x: 10.0, y: 20.0, width: 30.0, height: 100.0, front_width: None };
    for local in [Point::new(-15.0, 0.0), Point::new(15.0, 0.0), Point::new(0.0, -50.0), Point::new(0.0, 50.0)] {
        let abs = plain.center().offset(local.x, local.y);
        assert_eq!(plain.contains_local(local), plain.contains(abs), "{local:?}");
    }
}
