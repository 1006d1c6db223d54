#![allow(clippy::float_cmp)]

use super::*;
use canvas::project::ProjectFile;

fn core_with(enclosure: EnclosureType, kinds: &[ComponentType]) -> EngineCore {
    let mut core = EngineCore::with_enclosure(enclosure);
    for kind in kinds {
        core.add_component(*kind);
    }
    core
}

#[test]
fn enclosure_rows_cover_catalog() {
    let rows = enclosure_rows();
    assert_eq!(rows.len(), EnclosureType::ALL.len());
    assert!(rows.iter().any(|r| r.trapezoidal));
    assert!(rows.iter().any(|r| r.corners == CornerStyle::Sharp));
}

#[test]
fn enclosures_table_uses_serde_keys() {
    let text = enclosures_table(&enclosure_rows(), Unit::Metric);
    assert!(text.lines().any(|l| l.starts_with("125B ")));
    assert!(text.lines().any(|l| l.starts_with("wedge") && l.contains("trapezoid")));
}

#[test]
fn face_rows_follow_scan_order() {
    let rows = face_rows(EnclosureType::Hammond1590B, Rotation::Deg0);
    let sides: Vec<Side> = rows.iter().map(|r| r.side).collect();
    assert_eq!(sides, Side::ALL.to_vec());
    assert!(rows.iter().all(|r| r.displayed_as == r.side));
}

#[test]
fn face_rows_relabel_when_rotated() {
    let rows = face_rows(EnclosureType::Hammond125B, Rotation::Deg90);
    let right = rows.iter().find(|r| r.side == Side::Right).unwrap();
    assert_eq!(right.displayed_as, Side::Bottom);
    let table = faces_table(&rows, Unit::Metric);
    assert!(table.contains("(shown as Bottom)"));
}

#[test]
fn trapezoid_faces_report_front_width() {
    let rows = face_rows(EnclosureType::Wedge, Rotation::Deg0);
    let left = rows.iter().find(|r| r.side == Side::Left).unwrap();
    assert_eq!(left.front_width_mm, Some(28.0));
    let front = rows.iter().find(|r| r.side == Side::Front).unwrap();
    assert!(front.front_width_mm.is_none());
}

#[test]
fn component_rows_report_center_and_label() {
    let core = core_with(EnclosureType::Hammond1590B, &[ComponentType::Pot16mm, ComponentType::UsbC]);
    let rows = component_rows(&core, None);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, ComponentType::Pot16mm);
    assert_eq!(rows[0].label, "7.0mm");
    assert_eq!(rows[1].label, "9.5×4.0mm");

    let front = core.layout().face_center(Side::Front);
    assert_eq!((rows[0].center_x, rows[0].center_y), (front.x, front.y));
    assert!(rows[0].label_y > rows[0].center_y);
    assert!(rows[0].on_grid.is_none());
}

#[test]
fn component_rows_flag_off_grid_offsets() {
    let mut core = core_with(EnclosureType::Hammond1590B, &[ComponentType::Led5mm]);
    let grid = Some(GridSettings { enabled: true, size_mm: 1.0 });
    assert_eq!(component_rows(&core, grid)[0].on_grid, Some(true));

    let mut project: ProjectFile = core.to_project();
    project.components[0].x = 3.3;
    core.load_project(project);
    let rows = component_rows(&core, grid);
    assert_eq!(rows[0].on_grid, Some(false));
    assert!(components_table(&rows, Unit::Metric).contains("off-grid"));
}

#[test]
fn imperial_unit_changes_label_text() {
    let mut core = core_with(EnclosureType::Hammond1590B, &[ComponentType::Jack635mm]);
    core.set_unit(Unit::Imperial);
    let rows = component_rows(&core, None);
    assert_eq!(rows[0].label, "3/8\"");
}

#[test]
fn json_rows_use_camel_case() {
    let core = core_with(EnclosureType::Hammond125B, &[ComponentType::Led3mm]);
    let value = serde_json::to_value(component_rows(&core, None)).unwrap();
    assert_eq!(value[0]["type"], "led3mm");
    assert_eq!(value[0]["displayedSide"], "Front");
    assert!(value[0].get("onGrid").is_none());
}
