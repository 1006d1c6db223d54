//! Dimension label placement and text.
//!
//! Labels sit at the visual bottom of their component. With the canvas turned a
//! quarter turn clockwise, logical +x points down the screen, so the label moves
//! to the component's right and the text is counter-rotated to stay horizontal.
//! The component's own rotation only changes which extent counts as "visual"
//! width/height; it never tilts the text.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use crate::camera::Point;
use crate::catalog::{ComponentSpec, Shape};
use crate::consts::LABEL_OFFSET_PX;
use crate::hit::Outline;
use crate::rotation::Rotation;
use crate::units::{Unit, format_dimension, format_inches};

/// Anchor point and text angle for one label, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    /// Text rotation in degrees (clockwise), applied around the anchor.
    pub text_angle_deg: f64,
}

/// Where the label for a component centered at `center` goes.
#[must_use]
pub fn label_position(center: Point, component_rotation: Rotation, canvas_rotation: Rotation, outline: Outline) -> LabelPlacement {
    let (half_w, half_h) = match outline {
        Outline::Circle { radius } => (radius, radius),
        Outline::Rect { width, height } => {
            let (w, h) = component_rotation.extents(width, height);
            (w * 0.5, h * 0.5)
        }
    };
    let text_angle_deg = -f64::from(canvas_rotation.degrees());
    match canvas_rotation {
        Rotation::Deg0 => LabelPlacement { x: center.x, y: center.y + half_h + LABEL_OFFSET_PX, text_angle_deg },
        Rotation::Deg90 => LabelPlacement { x: center.x + half_w + LABEL_OFFSET_PX, y: center.y, text_angle_deg },
    }
}

/// Dimension text as it should read on screen.
///
/// Rectangles print `width×height`, swapped when the total visual rotation is a
/// quarter or three-quarter turn. Circles print their drill diameter.
#[must_use]
pub fn dimension_text(spec: &ComponentSpec, component_rotation: Rotation, canvas_rotation: Rotation, unit: Unit) -> String {
    match spec.shape {
        Shape::Circle => match unit {
            Unit::Metric => format_dimension(spec.drill_mm, unit),
            Unit::Imperial if !spec.imperial_label.is_empty() => spec.imperial_label.to_owned(),
            Unit::Imperial => format_inches(spec.drill_mm),
        },
        Shape::Rectangle | Shape::Square => {
            let (w, h) = spec.rect_size_mm();
            let (w, h) = match component_rotation.combined_degrees(canvas_rotation) {
                90 | 270 => (h, w),
                _ => (w, h),
            };
            match unit {
                Unit::Metric => format!("{w:.1}×{h:.1}mm"),
                Unit::Imperial => format!("{}×{}", format_inches(w), format_inches(h)),
            }
        }
    }
}
