//! Enclosure faces and the displayed-label permutation for a rotated canvas.
//!
//! Components always store the physical face they are mounted on. When the whole
//! canvas is turned 90° on an enclosure that rotates labels, each face is shown
//! under the name of the position it now occupies on screen. [`display_label`]
//! goes physical → displayed, [`actual_side_for_drag`] goes back.

#[cfg(test)]
#[path = "side_test.rs"]
mod side_test;

use serde::{Deserialize, Serialize};

use crate::rotation::Rotation;

/// One of the five faces of the unwrapped cross layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front,
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All faces, in layout scan order.
    pub const ALL: [Self; 5] = [Self::Front, Self::Top, Self::Bottom, Self::Left, Self::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label shown for a physical face at the given canvas rotation.
#[must_use]
pub fn display_label(side: Side, canvas_rotation: Rotation, rotates_labels: bool) -> Side {
    if !rotates_labels || canvas_rotation == Rotation::Deg0 {
        return side;
    }
    match side {
        Side::Front => Side::Front,
        Side::Left => Side::Top,
        Side::Top => Side::Right,
        Side::Right => Side::Bottom,
        Side::Bottom => Side::Left,
    }
}

/// Physical face behind a displayed label. Exact inverse of [`display_label`].
#[must_use]
pub fn actual_side_for_drag(displayed: Side, canvas_rotation: Rotation, rotates_labels: bool) -> Side {
    if !rotates_labels || canvas_rotation == Rotation::Deg0 {
        return displayed;
    }
    match displayed {
        Side::Front => Side::Front,
        Side::Top => Side::Left,
        Side::Right => Side::Top,
        Side::Bottom => Side::Right,
        Side::Left => Side::Bottom,
    }
}
