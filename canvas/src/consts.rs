//! Shared numeric constants for the canvas crate.

// ── Scale ───────────────────────────────────────────────────────

/// Logical pixels per millimeter (CSS reference pixel, 96 px per inch).
pub const MM_TO_PX: f64 = 96.0 / 25.4;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Denominator used when rounding imperial labels to a fraction.
pub const INCH_FRACTION_DENOMINATOR: i64 = 64;

// ── View ────────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.3;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom increment for a single wheel notch; zoom values snap to this grid.
pub const ZOOM_STEP: f64 = 0.1;

/// Screen margin kept around the layout by zoom-to-fit, in CSS pixels.
pub const FIT_MARGIN_PX: f64 = 40.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra grab radius around circular drill holes, in logical pixels.
pub const CIRCLE_HIT_SLOP_PX: f64 = 10.0;

// ── Labels ──────────────────────────────────────────────────────

/// Gap between a component's visual edge and its dimension label, in logical pixels.
pub const LABEL_OFFSET_PX: f64 = 12.0;

// ── Gestures ────────────────────────────────────────────────────

/// How long the click that trails a drag release is swallowed, in milliseconds.
pub const DRAG_CLICK_SUPPRESS_MS: f64 = 300.0;

/// Screen distance a press must travel before it counts as a drag, in CSS pixels.
pub const DRAG_THRESHOLD_PX: f64 = 2.0;
