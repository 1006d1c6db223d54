//! Hit-testing placed components in logical layout space.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::catalog::Shape;
use crate::consts::CIRCLE_HIT_SLOP_PX;
use crate::doc::{ComponentId, DocStore, PlacedComponent};
use crate::layout::Layout;
use crate::units::mm_to_px;

/// Footprint of a component in logical pixels, before its own rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

impl Outline {
    #[must_use]
    pub fn of(component: &PlacedComponent) -> Self {
        let spec = component.spec();
        match spec.shape {
            Shape::Circle => Self::Circle { radius: mm_to_px(spec.drill_mm) * 0.5 },
            Shape::Rectangle | Shape::Square => {
                let (w, h) = spec.rect_size_mm();
                Self::Rect { width: mm_to_px(w), height: mm_to_px(h) }
            }
        }
    }
}

/// Whether `pt` lands on `component`, whose center is at `center`.
///
/// Rectangles are tested in the component's own rotated frame. Circles get
/// [`CIRCLE_HIT_SLOP_PX`] of extra radius so small holes stay grabbable.
#[must_use]
pub fn component_contains(component: &PlacedComponent, center: Point, pt: Point) -> bool {
    match Outline::of(component) {
        Outline::Circle { radius } => center.distance(pt) <= radius + CIRCLE_HIT_SLOP_PX,
        Outline::Rect { width, height } => {
            let local = component.rotation.invert(pt.minus(center));
            local.x.abs() <= width * 0.5 && local.y.abs() <= height * 0.5
        }
    }
}

/// The topmost component under `pt`, if any.
#[must_use]
pub fn hit_test(pt: Point, layout: &Layout, doc: &DocStore) -> Option<ComponentId> {
    doc.hit_order()
        .into_iter()
        .find(|c| component_contains(c, layout.component_center(c.side, c.x, c.y), pt))
        .map(|c| c.id)
}
