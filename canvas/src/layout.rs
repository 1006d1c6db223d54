//! Unwrapped cross layout of the five enclosure faces.
//!
//! ```text
//!            +-------+
//!            |  Top  |
//!   +------+-+-------+-+-------+
//!   | Left |   Front   | Right |
//!   +------+-+-------+-+-------+
//!            | Bottom|
//!            +-------+
//! ```
//!
//! Face sizes come from the enclosure descriptor in millimeters; rectangles are in
//! logical pixels (`mm * MM_TO_PX`). Nothing here is cached: callers recompute the
//! layout from the current enclosure whenever they need it.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::Serialize;

use crate::camera::{Point, Size};
use crate::catalog::{CornerStyle, EnclosureDescriptor};
use crate::side::Side;
use crate::units::mm_to_px;

/// Physical size of one unwrapped face, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub corner_style: CornerStyle,
    pub is_trapezoidal: bool,
    /// Width at the front edge of a tapered side face.
    pub front_width_mm: Option<f64>,
}

/// The five face sizes of one enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceSet {
    pub front: SideDimensions,
    pub top: SideDimensions,
    pub bottom: SideDimensions,
    pub left: SideDimensions,
    pub right: SideDimensions,
}

impl FaceSet {
    /// Derive face sizes. Rounded corners shorten the faces that wrap around them.
    #[must_use]
    pub fn from_descriptor(d: &EnclosureDescriptor) -> Self {
        let flat = |width_mm, height_mm| SideDimensions {
            width_mm,
            height_mm,
            corner_style: d.corner_style,
            is_trapezoidal: false,
            front_width_mm: None,
        };
        let front = flat(d.width_mm, d.height_mm);

        if let Some(front_depth) = d.front_depth_mm {
            let tapered = SideDimensions {
                width_mm: d.depth_mm,
                height_mm: d.height_mm,
                corner_style: d.corner_style,
                is_trapezoidal: true,
                front_width_mm: Some(front_depth),
            };
            return Self {
                front,
                top: flat(d.width_mm, d.depth_mm),
                bottom: flat(d.width_mm, front_depth),
                left: tapered,
                right: tapered,
            };
        }

        let inset = 2.0 * d.effective_corner_radius_mm();
        let cap = flat(d.width_mm - inset, d.depth_mm);
        let wall = flat(d.depth_mm, d.height_mm - inset);
        Self { front, top: cap, bottom: cap, left: wall, right: wall }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &SideDimensions {
        match side {
            Side::Front => &self.front,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// A face rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Front-edge width of a tapered face; `None` for plain rectangles.
    pub front_width: Option<f64>,
}

impl FaceRect {
    fn plain(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, front_width: None }
    }

    /// Half-open containment: the left/top edges belong to the face, the
    /// right/bottom edges to its neighbour.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Whether the interiors of two rectangles intersect (shared edges do not count).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Whether a point given relative to the face center lies on the face. Plain
    /// faces use the same half-open bounds as [`FaceRect::contains`]; tapered
    /// faces use [`trapezoid_contains`].
    #[must_use]
    pub fn contains_local(&self, local: Point) -> bool {
        match self.front_width {
            Some(front) => trapezoid_contains(local, self.width, front, self.height),
            None => {
                let (hw, hh) = (self.width * 0.5, self.height * 0.5);
                local.x >= -hw && local.x < hw && local.y >= -hh && local.y < hh
            }
        }
    }
}

/// Whether `local` (relative to the face center) is inside a symmetric trapezoid
/// whose width shrinks linearly from `back_width` at the top edge to
/// `front_width` at the bottom edge.
#[must_use]
pub fn trapezoid_contains(local: Point, back_width: f64, front_width: f64, height: f64) -> bool {
    let half_h = height * 0.5;
    if height <= 0.0 || local.y < -half_h || local.y > half_h {
        return false;
    }
    let t = (local.y + half_h) / height;
    let half_w = (back_width + (front_width - back_width) * t) * 0.5;
    local.x.abs() <= half_w
}

/// Placement of all five faces plus the overall bounds, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub front: FaceRect,
    pub top: FaceRect,
    pub bottom: FaceRect,
    pub left: FaceRect,
    pub right: FaceRect,
    pub total_width: f64,
    pub total_height: f64,
}

impl Layout {
    /// Compute the cross layout for an enclosure.
    #[must_use]
    pub fn compute(d: &EnclosureDescriptor) -> Self {
        let faces = FaceSet::from_descriptor(d);
        let px = |s: &SideDimensions| (mm_to_px(s.width_mm), mm_to_px(s.height_mm));
        let (front_w, front_h) = px(&faces.front);
        let (top_w, top_h) = px(&faces.top);
        let (bottom_w, bottom_h) = px(&faces.bottom);
        let (left_w, left_h) = px(&faces.left);
        let (right_w, right_h) = px(&faces.right);

        let front = FaceRect::plain(left_w, top_h, front_w, front_h);

        if d.is_trapezoidal() {
            let taper = |x| FaceRect {
                x,
                y: top_h,
                width: left_w,
                height: left_h,
                front_width: faces.left.front_width_mm.map(mm_to_px),
            };
            return Self {
                front,
                top: FaceRect::plain(left_w + (front_w - top_w) * 0.5, 0.0, top_w, top_h),
                bottom: FaceRect::plain(left_w + (front_w - bottom_w) * 0.5, top_h + front_h, bottom_w, bottom_h),
                left: taper(0.0),
                right: taper(left_w + front_w),
                total_width: left_w + front_w + right_w,
                total_height: top_h + front_h + bottom_h,
            };
        }

        let top = FaceRect::plain(left_w + (front_w - top_w) * 0.5, 0.0, top_w, top_h);
        let bottom = FaceRect::plain(left_w + (front_w - bottom_w) * 0.5, top_h + front_h, bottom_w, bottom_h);

        match d.corner_style {
            CornerStyle::Rounded => Self {
                front,
                top,
                bottom,
                left: FaceRect::plain(0.0, top_h + (front_h - left_h) * 0.5, left_w, left_h),
                right: FaceRect::plain(left_w + front_w, top_h + (front_h - right_h) * 0.5, right_w, right_h),
                total_width: left_w + front_w + right_w,
                total_height: top_h + front_h + bottom_h,
            },
            CornerStyle::Sharp => Self {
                front,
                top,
                bottom,
                left: FaceRect::plain(0.0, top_h, left_w, left_h),
                right: FaceRect::plain(left_w + front_w, top_h, right_w, right_h),
                total_width: left_w + top_w.max(front_w).max(bottom_w) + right_w,
                total_height: top_h + left_h.max(front_h).max(right_h) + bottom_h,
            },
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.total_width, self.total_height)
    }

    #[must_use]
    pub fn face(&self, side: Side) -> &FaceRect {
        match side {
            Side::Front => &self.front,
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// All faces in scan order.
    #[must_use]
    pub fn faces(&self) -> [(Side, &FaceRect); 5] {
        Side::ALL.map(|side| (side, self.face(side)))
    }

    /// The face whose rectangle contains `p`, if any. Faces never overlap, so the
    /// first match is the only match.
    #[must_use]
    pub fn face_at(&self, p: Point) -> Option<Side> {
        self.faces()
            .into_iter()
            .find(|(_, rect)| rect.contains(p))
            .map(|(side, _)| side)
    }

    #[must_use]
    pub fn face_center(&self, side: Side) -> Point {
        self.face(side).center()
    }

    /// Absolute logical position of a component stored as an offset from its face center.
    #[must_use]
    pub fn component_center(&self, side: Side, x: f64, y: f64) -> Point {
        self.face_center(side).offset(x, y)
    }
}
