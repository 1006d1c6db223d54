//! Drag placement: which face a dragged component lands on, where on that face,
//! and whether the spot is allowed.
//!
//! The resolver is pure. It never mutates the document; the engine decides what
//! to do with a [`Placement`].

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::catalog::EnclosureDescriptor;
use crate::layout::Layout;
use crate::rotation::Rotation;
use crate::side::{Side, actual_side_for_drag, display_label};
use crate::units::mm_to_px;

/// Grid snapping configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    pub enabled: bool,
    /// Grid pitch in millimeters.
    pub size_mm: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { enabled: false, size_mm: 1.0 }
    }
}

impl GridSettings {
    /// Grid pitch in logical pixels, or `None` when snapping is off or the pitch is unusable.
    #[must_use]
    pub fn step_px(&self) -> Option<f64> {
        (self.enabled && self.size_mm.is_finite() && self.size_mm > 0.0).then(|| mm_to_px(self.size_mm))
    }

    /// Round each coordinate independently to the nearest grid multiple.
    #[must_use]
    pub fn snap(&self, p: Point) -> Point {
        match self.step_px() {
            Some(step) => Point::new(snap_value(p.x, step), snap_value(p.y, step)),
            None => p,
        }
    }
}

/// Round `v` to the nearest multiple of `step`.
#[must_use]
pub fn snap_value(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

/// Why a drop position was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The point is not over any face.
    OutsideFaces,
    /// The snapped offset falls off the face: past an edge, or outside a taper.
    OffFace(Side),
}

/// Result of resolving a drop position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Valid spot: physical face plus offset from that face's center.
    Moved { side: Side, x: f64, y: f64 },
    /// Keep the previous position.
    Rejected(Rejection),
}

/// Everything the resolver reads, captured once per pointer event.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    pub layout: &'a Layout,
    pub enclosure: &'a EnclosureDescriptor,
    pub canvas_rotation: Rotation,
    pub grid: GridSettings,
}

impl PlacementContext<'_> {
    /// Resolve where a component whose center is at `center` (logical) would land.
    #[must_use]
    pub fn resolve(&self, center: Point) -> Placement {
        let Some(face) = self.layout.face_at(center) else {
            return Placement::Rejected(Rejection::OutsideFaces);
        };

        // The user sees the face under its displayed label; store the physical face.
        let rotates = self.enclosure.rotates_labels;
        let visible = display_label(face, self.canvas_rotation, rotates);
        let side = actual_side_for_drag(visible, self.canvas_rotation, rotates);

        let rect = self.layout.face(side);
        let local = self.grid.snap(center.minus(rect.center()));
        if !rect.contains_local(local) {
            return Placement::Rejected(Rejection::OffFace(side));
        }

        Placement::Moved { side, x: local.x, y: local.y }
    }
}
