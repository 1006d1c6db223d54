//! Rendering: draws the unwrapped enclosure and its components to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a [`FrameSnapshot`] and produces pixels; it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::catalog::CornerStyle;
use crate::doc::PlacedComponent;
use crate::engine::FrameSnapshot;
use crate::hit::Outline;
use crate::label::{dimension_text, label_position};
use crate::layout::FaceRect;
use crate::rotation::Rotation;
use crate::side::{Side, display_label};
use crate::units::mm_to_px;

const BACKGROUND: &str = "#F4F1EC";
const FACE_FILL: &str = "#D9D4CC";
const FACE_STROKE: &str = "#6B645C";
const FACE_LABEL: &str = "#8A8279";
const GRID_STROKE: &str = "rgba(60, 64, 70, 0.12)";
const HOLE_FILL: &str = "#2B2724";
const GUIDE_STROKE: &str = "#3C7D5A";
const SELECT_STROKE: &str = "#1E90FF";
const HOVER_STROKE: &str = "rgba(30, 144, 255, 0.45)";
const LABEL_FILL: &str = "#1F1A17";

/// Dash segment length for footprint guides and selection rings, in screen pixels.
const DASH_PX: f64 = 4.0;
/// Gap between a component outline and its selection ring, in screen pixels.
const RING_GAP_PX: f64 = 3.0;
/// Opacity applied to components excluded from the printed template.
const EXCLUDED_ALPHA: f64 = 0.35;

/// Draw the full scene: faces, grid, components, then labels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &FrameSnapshot<'_>) -> Result<(), JsValue> {
    let camera = frame.camera;
    let viewport_center = frame.viewport.center();

    // Layer 1: clear and set up the view transform.
    ctx.set_transform(frame.dpr, 0.0, 0.0, frame.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, frame.viewport.width, frame.viewport.height);
    ctx.translate(viewport_center.x + camera.pan_x, viewport_center.y + camera.pan_y)?;
    ctx.rotate(camera.rotation.radians())?;
    ctx.scale(camera.zoom, camera.zoom)?;
    ctx.translate(-frame.layout.total_width * 0.5, -frame.layout.total_height * 0.5)?;

    // Layer 2: faces with their displayed labels.
    for (side, rect) in frame.layout.faces() {
        draw_face(ctx, frame, side, rect)?;
    }

    // Layer 3: grid.
    if let Some(step) = frame.ui.grid.step_px() {
        for (_, rect) in frame.layout.faces() {
            draw_grid(ctx, rect, step, camera.zoom)?;
        }
    }

    // Layer 4: components, bottom first.
    for c in frame.doc.draw_order() {
        draw_component(ctx, frame, c)?;
    }

    // Layer 5: dimension labels above every component.
    for c in frame.doc.draw_order() {
        draw_label(ctx, frame, c)?;
    }

    Ok(())
}

// =============================================================
// Faces
// =============================================================

fn draw_face(ctx: &CanvasRenderingContext2d, frame: &FrameSnapshot<'_>, side: Side, rect: &FaceRect) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    match rect.front_width {
        Some(front) => trapezoid_path(ctx, rect, front),
        None if side == Side::Front && frame.enclosure.corner_style == CornerStyle::Rounded => {
            let r = mm_to_px(frame.enclosure.effective_corner_radius_mm());
            rounded_rect_path(ctx, rect, r)?;
        }
        None => ctx.rect(rect.x, rect.y, rect.width, rect.height),
    }
    ctx.set_fill_style_str(FACE_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(FACE_STROKE);
    ctx.set_line_width(1.0 / frame.camera.zoom);
    ctx.stroke();
    ctx.restore();

    let label = display_label(side, frame.camera.rotation, frame.enclosure.rotates_labels);
    let center = rect.center();
    draw_upright_text(ctx, frame.camera.rotation, center, label.as_str(), FACE_LABEL, 14.0 / frame.camera.zoom)
}

/// Tapered side face: full width along the top (back) edge narrowing to the
/// front width along the bottom edge.
fn trapezoid_path(ctx: &CanvasRenderingContext2d, rect: &FaceRect, front_width: f64) {
    let cx = rect.x + rect.width * 0.5;
    let inset = front_width * 0.5;
    ctx.move_to(rect.x, rect.y);
    ctx.line_to(rect.x + rect.width, rect.y);
    ctx.line_to(cx + inset, rect.y + rect.height);
    ctx.line_to(cx - inset, rect.y + rect.height);
    ctx.close_path();
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, rect: &FaceRect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.width * 0.5).min(rect.height * 0.5).max(0.0);
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
    ctx.move_to(x0 + r, y0);
    ctx.arc_to(x1, y0, x1, y1, r)?;
    ctx.arc_to(x1, y1, x0, y1, r)?;
    ctx.arc_to(x0, y1, x0, y0, r)?;
    ctx.arc_to(x0, y0, x1, y0, r)?;
    ctx.close_path();
    Ok(())
}

/// Grid lines through the face center at every `step`, clipped to the face.
fn draw_grid(ctx: &CanvasRenderingContext2d, rect: &FaceRect, step: f64, zoom: f64) -> Result<(), JsValue> {
    // Skip grids too dense to read.
    if step * zoom < 4.0 {
        return Ok(());
    }
    ctx.save();
    ctx.begin_path();
    ctx.rect(rect.x, rect.y, rect.width, rect.height);
    ctx.clip();

    let center = rect.center();
    ctx.begin_path();
    let mut offset = 0.0;
    while offset <= rect.width * 0.5 {
        for x in [center.x - offset, center.x + offset] {
            ctx.move_to(x, rect.y);
            ctx.line_to(x, rect.y + rect.height);
        }
        offset += step;
    }
    offset = 0.0;
    while offset <= rect.height * 0.5 {
        for y in [center.y - offset, center.y + offset] {
            ctx.move_to(rect.x, y);
            ctx.line_to(rect.x + rect.width, y);
        }
        offset += step;
    }
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0 / zoom);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

// =============================================================
// Components
// =============================================================

fn draw_component(ctx: &CanvasRenderingContext2d, frame: &FrameSnapshot<'_>, c: &PlacedComponent) -> Result<(), JsValue> {
    let zoom = frame.camera.zoom;
    let center = frame.layout.component_center(c.side, c.x, c.y);
    let outline = Outline::of(c);
    let guide = c.spec().is_footprint_guide();

    ctx.save();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(c.rotation.radians())?;
    if c.exclude_from_print {
        ctx.set_global_alpha(EXCLUDED_ALPHA);
    }

    outline_path(ctx, outline, 0.0)?;
    if guide {
        ctx.set_stroke_style_str(GUIDE_STROKE);
        ctx.set_line_width(1.5 / zoom);
        set_dash(ctx, DASH_PX / zoom)?;
        ctx.stroke();
        set_dash(ctx, 0.0)?;
    } else {
        ctx.set_fill_style_str(HOLE_FILL);
        ctx.fill();
    }

    let ring = if frame.ui.selected_id == Some(c.id) {
        Some(SELECT_STROKE)
    } else if frame.ui.hovered_id == Some(c.id) {
        Some(HOVER_STROKE)
    } else {
        None
    };
    if let Some(color) = ring {
        outline_path(ctx, outline, RING_GAP_PX / zoom)?;
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(1.5 / zoom);
        set_dash(ctx, DASH_PX / zoom)?;
        ctx.stroke();
        set_dash(ctx, 0.0)?;
    }

    ctx.restore();
    Ok(())
}

/// Begin a path tracing `outline` around the origin, grown by `grow` on every side.
fn outline_path(ctx: &CanvasRenderingContext2d, outline: Outline, grow: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    match outline {
        Outline::Circle { radius } => ctx.arc(0.0, 0.0, radius + grow, 0.0, 2.0 * PI)?,
        Outline::Rect { width, height } => {
            let (w, h) = (width + 2.0 * grow, height + 2.0 * grow);
            ctx.rect(-w * 0.5, -h * 0.5, w, h);
        }
    }
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, frame: &FrameSnapshot<'_>, c: &PlacedComponent) -> Result<(), JsValue> {
    let canvas_rotation = frame.camera.rotation;
    let center = frame.layout.component_center(c.side, c.x, c.y);
    let placement = label_position(center, c.rotation, canvas_rotation, Outline::of(c));
    let text = dimension_text(c.spec(), c.rotation, canvas_rotation, frame.ui.unit);

    ctx.save();
    if c.exclude_from_print {
        ctx.set_global_alpha(EXCLUDED_ALPHA);
    }
    ctx.translate(placement.x, placement.y)?;
    ctx.rotate(placement.text_angle_deg.to_radians())?;
    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("{:.1}px sans-serif", 11.0 / frame.camera.zoom));
    ctx.fill_text(&text, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Text at `at` that reads horizontally on screen regardless of canvas rotation.
fn draw_upright_text(
    ctx: &CanvasRenderingContext2d,
    canvas_rotation: Rotation,
    at: Point,
    text: &str,
    color: &str,
    size: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(at.x, at.y)?;
    ctx.rotate(-canvas_rotation.radians())?;
    ctx.set_fill_style_str(color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("{size:.1}px sans-serif"));
    ctx.fill_text(text, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

/// Set a symmetric dash pattern; zero restores solid lines.
fn set_dash(ctx: &CanvasRenderingContext2d, segment: f64) -> Result<(), JsValue> {
    let dash_array = js_sys::Array::new();
    if segment > 0.0 {
        dash_array.push(&segment.into());
        dash_array.push(&segment.into());
    }
    ctx.set_line_dash(&dash_array)
}
