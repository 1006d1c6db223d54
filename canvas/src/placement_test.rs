#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::EnclosureType;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn ctx_for<'a>(layout: &'a Layout, kind: EnclosureType, rotation: Rotation, grid: GridSettings) -> PlacementContext<'a> {
    PlacementContext { layout, enclosure: kind.descriptor(), canvas_rotation: rotation, grid }
}

fn moved(p: Placement) -> (Side, f64, f64) {
    match p {
        Placement::Moved { side, x, y } => (side, x, y),
        Placement::Rejected(r) => panic!("expected a move, got {r:?}"),
    }
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_disabled_is_identity() {
    let grid = GridSettings::default();
    let p = Point::new(3.3, -7.7);
    assert_eq!(grid.snap(p), p);
    assert!(grid.step_px().is_none());
}

#[test]
fn grid_snaps_each_axis_independently() {
    let grid = GridSettings { enabled: true, size_mm: 1.0 };
    let p = grid.snap(Point::new(mm_to_px(5.3), mm_to_px(-2.6)));
    assert!(approx_eq(p.x, mm_to_px(5.0)));
    assert!(approx_eq(p.y, mm_to_px(-3.0)));
}

#[test]
fn grid_snap_is_idempotent() {
    let grid = GridSettings { enabled: true, size_mm: 2.5 };
    for raw in [0.0, 1.0, 17.3, -42.9, 1234.5] {
        let once = grid.snap(Point::new(raw, -raw));
        let twice = grid.snap(once);
        assert!(approx_eq(once.x, twice.x) && approx_eq(once.y, twice.y), "{raw}");
    }
}

#[test]
fn grid_ignores_non_positive_pitch() {
    let grid = GridSettings { enabled: true, size_mm: 0.0 };
    assert!(grid.step_px().is_none());
}

#[test]
fn grid_settings_json_defaults() {
    let grid: GridSettings = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
    assert!(grid.enabled);
    assert_eq!(grid.size_mm, 1.0);
}

// =============================================================
// Face resolution
// =============================================================

#[test]
fn resolve_face_center_is_origin() {
    let layout = Layout::compute(EnclosureType::Hammond1590B.descriptor());
    let ctx = ctx_for(&layout, EnclosureType::Hammond1590B, Rotation::Deg0, GridSettings::default());
    let (side, x, y) = moved(ctx.resolve(layout.face_center(Side::Top)));
    assert_eq!(side, Side::Top);
    assert!(approx_eq(x, 0.0) && approx_eq(y, 0.0));
}

#[test]
fn resolve_reports_offset_from_face_center() {
    let layout = Layout::compute(EnclosureType::Hammond1590B.descriptor());
    let ctx = ctx_for(&layout, EnclosureType::Hammond1590B, Rotation::Deg0, GridSettings::default());
    let (side, x, y) = moved(ctx.resolve(layout.face_center(Side::Front).offset(10.0, -20.0)));
    assert_eq!(side, Side::Front);
    assert!(approx_eq(x, 10.0) && approx_eq(y, -20.0));
}

#[test]
fn resolve_outside_all_faces_is_rejected() {
    let layout = Layout::compute(EnclosureType::Hammond1590B.descriptor());
    let ctx = ctx_for(&layout, EnclosureType::Hammond1590B, Rotation::Deg0, GridSettings::default());
    assert_eq!(ctx.resolve(Point::new(1.0, 1.0)), Placement::Rejected(Rejection::OutsideFaces));
    assert_eq!(ctx.resolve(Point::new(-50.0, 100.0)), Placement::Rejected(Rejection::OutsideFaces));
}

#[test]
fn resolve_applies_grid() {
    let layout = Layout::compute(EnclosureType::Hammond1590B.descriptor());
    let grid = GridSettings { enabled: true, size_mm: 2.0 };
    let ctx = ctx_for(&layout, EnclosureType::Hammond1590B, Rotation::Deg0, grid);
    let (_, x, y) = moved(ctx.resolve(layout.face_center(Side::Front).offset(mm_to_px(4.9), mm_to_px(-1.2))));
    assert!(approx_eq(x, mm_to_px(4.0)));
    assert!(approx_eq(y, mm_to_px(-2.0)));
}

#[test]
fn snap_past_face_edge_is_rejected() {
    let kind = EnclosureType::Hammond1590B;
    let layout = Layout::compute(kind.descriptor());
    let grid = GridSettings { enabled: true, size_mm: 10.0 };
    let ctx = ctx_for(&layout, kind, Rotation::Deg0, grid);

    // Just inside the bottom edge of Top; the nearest 10 mm line is past that edge.
    let p = layout.face_center(Side::Top).offset(0.0, layout.top.height * 0.5 - 0.5);
    assert_eq!(layout.face_at(p), Some(Side::Top));
    assert_eq!(ctx.resolve(p), Placement::Rejected(Rejection::OffFace(Side::Top)));

    // Snapping inward is still accepted.
    let (side, _, y) = moved(ctx.resolve(layout.face_center(Side::Top).offset(0.0, mm_to_px(4.0))));
    assert_eq!(side, Side::Top);
    assert!(approx_eq(y, 0.0));
}

// =============================================================
// Rotated canvas
// =============================================================

#[test]
fn rotated_canvas_stores_physical_side_not_displayed_label() {
    let kind = EnclosureType::Hammond125B;
    assert!(kind.descriptor().rotates_labels);
    let layout = Layout::compute(kind.descriptor());
    let ctx = ctx_for(&layout, kind, Rotation::Deg90, GridSettings::default());

    // The Left face is shown as "Top" after a quarter turn.
    assert_eq!(display_label(Side::Left, Rotation::Deg90, true), Side::Top);
    let (side, _, _) = moved(ctx.resolve(layout.face_center(Side::Left)));
    assert_eq!(side, Side::Left);
    assert_ne!(side, Side::Top);

    // The Right face is shown as "Bottom" and still stores Right.
    let (side, _, _) = moved(ctx.resolve(layout.face_center(Side::Right)));
    assert_eq!(side, Side::Right);
}

#[test]
fn every_face_roundtrips_under_rotation() {
    let kind = EnclosureType::Hammond1590XX;
    let layout = Layout::compute(kind.descriptor());
    for rotation in [Rotation::Deg0, Rotation::Deg90] {
        let ctx = ctx_for(&layout, kind, rotation, GridSettings::default());
        for side in Side::ALL {
            let (got, _, _) = moved(ctx.resolve(layout.face_center(side)));
            assert_eq!(got, side, "{rotation}");
        }
    }
}

// =============================================================
// Trapezoid containment
// =============================================================

#[test]
fn trapezoid_accepts_point_near_back_edge() {
    let kind = EnclosureType::Wedge;
    let layout = Layout::compute(kind.descriptor());
    let ctx = ctx_for(&layout, kind, Rotation::Deg0, GridSettings::default());
    let p = layout.face_center(Side::Left).offset(mm_to_px(-24.0), mm_to_px(-45.0));
    let (side, _, _) = moved(ctx.resolve(p));
    assert_eq!(side, Side::Left);
}

#[test]
fn trapezoid_rejects_bounding_box_corner_near_front_edge() {
    let kind = EnclosureType::Wedge;
    let layout = Layout::compute(kind.descriptor());
    let ctx = ctx_for(&layout, kind, Rotation::Deg0, GridSettings::default());
    let p = layout.face_center(Side::Right).offset(mm_to_px(24.0), mm_to_px(45.0));
    assert_eq!(ctx.resolve(p), Placement::Rejected(Rejection::OffFace(Side::Right)));
}

#[test]
fn trapezoid_rule_does_not_apply_to_front() {
    let kind = EnclosureType::Wedge;
    let layout = Layout::compute(kind.descriptor());
    let ctx = ctx_for(&layout, kind, Rotation::Deg0, GridSettings::default());
    let half_w = layout.front.width * 0.5 - 1.0;
    let half_h = layout.front.height * 0.5 - 1.0;
    let (side, _, _) = moved(ctx.resolve(layout.face_center(Side::Front).offset(half_w, half_h)));
    assert_eq!(side, Side::Front);
}
