//! Coarse, axis-aligned rotation shared by components and the canvas.
//!
//! Only 0° and 90° exist. Anything else is unrepresentable, so every formula
//! downstream can match on two cases instead of doing trigonometry.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Error returned when parsing an angle that is not 0° or 90°.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("unsupported rotation {0}°; only 0 and 90 are allowed")]
pub struct UnsupportedRotation(pub f64);

/// A rotation of exactly 0° or 90° clockwise (screen space, y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }

    /// Angle in radians, for handing to a drawing API.
    #[must_use]
    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }

    /// The other rotation.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg0,
        }
    }

    /// Whether the rotation swaps horizontal and vertical extents.
    #[must_use]
    pub fn is_quarter_turn(self) -> bool {
        self == Self::Deg90
    }

    /// Sum of two rotations in degrees, modulo 360.
    #[must_use]
    pub fn combined_degrees(self, other: Self) -> u16 {
        (self.degrees() + other.degrees()) % 360
    }

    /// Rotate a vector clockwise by this rotation.
    #[must_use]
    pub fn apply(self, v: Point) -> Point {
        match self {
            Self::Deg0 => v,
            Self::Deg90 => Point::new(-v.y, v.x),
        }
    }

    /// Rotate a vector counter-clockwise by this rotation (exact inverse of [`Self::apply`]).
    #[must_use]
    pub fn invert(self, v: Point) -> Point {
        match self {
            Self::Deg0 => v,
            Self::Deg90 => Point::new(v.y, -v.x),
        }
    }

    /// Swap `(w, h)` when this is a quarter turn.
    #[must_use]
    pub fn extents(self, width: f64, height: f64) -> (f64, f64) {
        if self.is_quarter_turn() { (height, width) } else { (width, height) }
    }
}

impl TryFrom<f64> for Rotation {
    type Error = UnsupportedRotation;

    fn try_from(deg: f64) -> Result<Self, Self::Error> {
        let norm = deg.rem_euclid(360.0);
        if norm == 0.0 {
            Ok(Self::Deg0)
        } else if (norm - 90.0).abs() < f64::EPSILON {
            Ok(Self::Deg90)
        } else {
            Err(UnsupportedRotation(deg))
        }
    }
}

impl From<Rotation> for f64 {
    fn from(r: Rotation) -> Self {
        f64::from(r.degrees())
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
