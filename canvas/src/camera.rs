//! View transform: zoom, pan and coarse canvas rotation.
//!
//! The layout is drawn around its own center. Going from logical layout space to
//! the screen applies, in order: shift the layout center to the origin, scale by
//! `zoom`, rotate by `rotation`, then translate to the viewport center plus the pan
//! offset. [`Camera::screen_to_logical`] undoes those steps in reverse.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{FIT_MARGIN_PX, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::rotation::Rotation;

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Vector from `other` to `self`.
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width/height pair, used for the viewport and the layout bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Camera state for the layout canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels, measured from the viewport center.
/// `zoom` is a scale factor (1.0 = one logical pixel per CSS pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub rotation: Rotation,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0, rotation: Rotation::Deg0 }
    }
}

impl Camera {
    /// Convert a logical layout point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn logical_to_screen(&self, logical: Point, viewport: Size, layout: Size) -> Point {
        let centered = logical.offset(-layout.width * 0.5, -layout.height * 0.5);
        let scaled = Point::new(centered.x * self.zoom, centered.y * self.zoom);
        let rotated = self.rotation.apply(scaled);
        let origin = viewport.center();
        rotated.offset(origin.x + self.pan_x, origin.y + self.pan_y)
    }

    /// Convert a screen-space point (CSS pixels) to logical layout coordinates.
    #[must_use]
    pub fn screen_to_logical(&self, screen: Point, viewport: Size, layout: Size) -> Point {
        let origin = viewport.center();
        let shifted = screen.offset(-(origin.x + self.pan_x), -(origin.y + self.pan_y));
        let unrotated = self.rotation.invert(shifted);
        let unscaled = Point::new(unrotated.x / self.zoom, unrotated.y / self.zoom);
        unscaled.offset(layout.width * 0.5, layout.height * 0.5)
    }

    /// Set zoom, snapping to the 0.1 grid and clamping to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = snap_zoom(zoom);
    }

    /// Step zoom by whole increments (positive zooms in).
    pub fn step_zoom(&mut self, steps: i32) {
        self.set_zoom(self.zoom + f64::from(steps) * ZOOM_STEP);
    }

    /// Pan by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Choose the largest zoom step that fits the (rotated) layout in the viewport,
    /// apply it, and recenter the pan. Returns the new zoom.
    pub fn zoom_to_fit(&mut self, viewport: Size, layout: Size) -> f64 {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = fit_zoom(viewport, layout, self.rotation);
        self.zoom
    }
}

/// Snap to the nearest zoom step, then clamp.
#[must_use]
pub fn snap_zoom(zoom: f64) -> f64 {
    if !zoom.is_finite() {
        return 1.0;
    }
    let snapped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
    snapped.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Largest zoom step at which `layout`, rotated by `rotation`, fits inside `viewport`
/// with [`FIT_MARGIN_PX`] on every side.
#[must_use]
pub fn fit_zoom(viewport: Size, layout: Size, rotation: Rotation) -> f64 {
    let (w, h) = rotation.extents(layout.width, layout.height);
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    let avail_w = (viewport.width - 2.0 * FIT_MARGIN_PX).max(1.0);
    let avail_h = (viewport.height - 2.0 * FIT_MARGIN_PX).max(1.0);
    let raw = (avail_w / w).min(avail_h / h);
    // Floor (with a little slack for float noise) so the result never overflows.
    let floored = ((raw / ZOOM_STEP) + 1e-9).floor() * ZOOM_STEP;
    floored.clamp(MIN_ZOOM, MAX_ZOOM)
}
