//! Input model: modifier keys, mouse buttons, UI state and the gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up. It
//! carries everything needed to resolve each move and to emit a single update on
//! release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ComponentId;
use crate::placement::GridSettings;
use crate::side::Side;
use crate::units::Unit;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected component, if any.
    pub selected_id: Option<ComponentId>,
    /// The component under the pointer while no gesture is active.
    pub hovered_id: Option<ComponentId>,
    pub grid: GridSettings,
    pub unit: Unit,
    /// Set on a drag release; swallows the click that follows until cleared.
    pub just_finished_drag: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas.
    Panning {
        /// Screen position of the press, for the drag threshold.
        press_screen: Point,
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
        /// Whether the pointer has travelled far enough to count as a drag.
        moved: bool,
    },
    /// The user is moving a placed component.
    DraggingComponent {
        /// Id of the component being dragged.
        id: ComponentId,
        /// Pointer minus component center at press time, in logical units.
        grab_offset: Point,
        /// Screen position of the press, for the drag threshold.
        press_screen: Point,
        /// Face at the start of the drag, used to detect a real change on release.
        orig_side: Side,
        /// Offset x at the start of the drag.
        orig_x: f64,
        /// Offset y at the start of the drag.
        orig_y: f64,
        /// Whether any move has been committed during this gesture.
        moved: bool,
    },
}
