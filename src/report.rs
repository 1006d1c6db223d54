//! Tabular reports over the catalog, a layout, or a loaded project.
//!
//! Every report is a list of serializable rows so `--json` and the text
//! tables read from the same data.

use canvas::camera::Point;
use canvas::catalog::{ComponentType, CornerStyle, EnclosureType};
use canvas::doc::ComponentId;
use canvas::engine::EngineCore;
use canvas::hit::Outline;
use canvas::label::{dimension_text, label_position};
use canvas::layout::FaceSet;
use canvas::placement::GridSettings;
use canvas::rotation::Rotation;
use canvas::side::{Side, display_label};
use canvas::units::{Unit, format_dimension, px_to_mm};
use serde::Serialize;

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Offsets closer than this to a grid line count as on the grid, in logical pixels.
const ON_GRID_TOLERANCE_PX: f64 = 1e-6;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureRow {
    pub key: EnclosureType,
    pub name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub corners: CornerStyle,
    pub trapezoidal: bool,
    pub rotates_labels: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRow {
    pub side: Side,
    /// Label drawn on this face at the requested canvas rotation.
    pub displayed_as: Side,
    pub x_px: f64,
    pub y_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_width_mm: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRow {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub name: &'static str,
    pub side: Side,
    pub displayed_side: Side,
    pub offset_x: f64,
    pub offset_y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub rotation: Rotation,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub exclude_from_print: bool,
    /// Whether both offsets sit on the grid; absent when no grid was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_grid: Option<bool>,
}

#[must_use]
pub fn enclosure_rows() -> Vec<EnclosureRow> {
    EnclosureType::ALL
        .into_iter()
        .map(|key| {
            let d = key.descriptor();
            EnclosureRow {
                key,
                name: d.name,
                width_mm: d.width_mm,
                height_mm: d.height_mm,
                depth_mm: d.depth_mm,
                corners: d.corner_style,
                trapezoidal: d.is_trapezoidal(),
                rotates_labels: d.rotates_labels,
            }
        })
        .collect()
}

#[must_use]
pub fn face_rows(enclosure: EnclosureType, canvas_rotation: Rotation) -> Vec<FaceRow> {
    let mut core = EngineCore::with_enclosure(enclosure);
    core.set_canvas_rotation(canvas_rotation);
    let descriptor = core.descriptor();
    let faces = FaceSet::from_descriptor(descriptor);
    core.layout()
        .faces()
        .into_iter()
        .map(|(side, rect)| {
            let dims = faces.get(side);
            FaceRow {
                side,
                displayed_as: display_label(side, canvas_rotation, descriptor.rotates_labels),
                x_px: rect.x,
                y_px: rect.y,
                width_px: rect.width,
                height_px: rect.height,
                width_mm: dims.width_mm,
                height_mm: dims.height_mm,
                front_width_mm: dims.front_width_mm,
            }
        })
        .collect()
}

/// One row per component, oldest first.
#[must_use]
pub fn component_rows(core: &EngineCore, grid: Option<GridSettings>) -> Vec<ComponentRow> {
    let layout = core.layout();
    let canvas_rotation = core.camera().rotation;
    let rotates = core.descriptor().rotates_labels;
    core.doc
        .by_creation()
        .into_iter()
        .map(|c| {
            let center = layout.component_center(c.side, c.x, c.y);
            let label = label_position(center, c.rotation, canvas_rotation, Outline::of(c));
            let on_grid = grid.filter(|g| g.step_px().is_some()).map(|g| {
                let snapped = g.snap(Point::new(c.x, c.y));
                (snapped.x - c.x).abs() < ON_GRID_TOLERANCE_PX && (snapped.y - c.y).abs() < ON_GRID_TOLERANCE_PX
            });
            ComponentRow {
                id: c.id,
                kind: c.kind,
                name: c.spec().name,
                side: c.side,
                displayed_side: display_label(c.side, canvas_rotation, rotates),
                offset_x: c.x,
                offset_y: c.y,
                center_x: center.x,
                center_y: center.y,
                rotation: c.rotation,
                label: dimension_text(c.spec(), c.rotation, canvas_rotation, core.ui.unit),
                label_x: label.x,
                label_y: label.y,
                exclude_from_print: c.exclude_from_print,
                on_grid,
            }
        })
        .collect()
}

// =============================================================
// Text tables
// =============================================================

#[must_use]
pub fn enclosures_table(rows: &[EnclosureRow], unit: Unit) -> String {
    rows.iter()
        .map(|r| {
            let mut flags = Vec::new();
            if r.corners == CornerStyle::Sharp {
                flags.push("sharp");
            }
            if r.trapezoidal {
                flags.push("trapezoid");
            }
            if r.rotates_labels {
                flags.push("rotates-labels");
            }
            format!(
                "{:<8} {:<14} {} x {} x {}  {}",
                key_str(r.key),
                r.name,
                format_dimension(r.width_mm, unit),
                format_dimension(r.height_mm, unit),
                format_dimension(r.depth_mm, unit),
                flags.join(",")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn faces_table(rows: &[FaceRow], unit: Unit) -> String {
    rows.iter()
        .map(|r| {
            format!(
                "{:<7} {} x {}  at ({:.1}, {:.1}) px, {:.1} x {:.1} px{}",
                r.side.as_str(),
                format_dimension(r.width_mm, unit),
                format_dimension(r.height_mm, unit),
                r.x_px,
                r.y_px,
                r.width_px,
                r.height_px,
                shown_as(r.side, r.displayed_as),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn components_table(rows: &[ComponentRow], unit: Unit) -> String {
    rows.iter()
        .map(|r| {
            let grid = if r.on_grid == Some(false) { "  off-grid" } else { "" };
            format!(
                "{:<22} {}{}  offset {}, {}  label {}{grid}",
                r.name,
                r.side.as_str(),
                shown_as(r.side, r.displayed_side),
                format_dimension(px_to_mm(r.offset_x), unit),
                format_dimension(px_to_mm(r.offset_y), unit),
                r.label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn shown_as(side: Side, displayed: Side) -> String {
    if side == displayed { String::new() } else { format!(" (shown as {displayed})") }
}

fn key_str(key: EnclosureType) -> String {
    match serde_json::to_value(key) {
        Ok(serde_json::Value::String(s)) => s,
        _ => key.descriptor().name.to_owned(),
    }
}
