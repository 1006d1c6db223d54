//! Project file seam: the JSON document a host saves and loads.
//!
//! Parsing is strict. Unknown enclosure or component keys, rotations other than
//! 0 or 90, duplicate ids and non-finite offsets all fail here, so the engine
//! can treat every catalog lookup as total.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::EnclosureType;
use crate::doc::{ComponentId, PlacedComponent};
use crate::placement::GridSettings;
use crate::rotation::Rotation;
use crate::units::Unit;

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

/// Project file format version written by this crate.
pub const PROJECT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("malformed project file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported project version {0} (expected {PROJECT_VERSION})")]
    UnsupportedVersion(u32),
    #[error("duplicate component id {0}")]
    DuplicateId(ComponentId),
    #[error("component {0} has a non-finite offset")]
    NonFiniteOffset(ComponentId),
    #[error("view zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
    #[error("grid size must be finite and positive, got {0}")]
    InvalidGridSize(f64),
}

/// View state restored alongside a project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    pub zoom: f64,
    #[serde(default)]
    pub canvas_rotation: Rotation,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub unit: Unit,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { zoom: 1.0, canvas_rotation: Rotation::Deg0, grid: GridSettings::default(), unit: Unit::Metric }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub version: u32,
    pub enclosure: EnclosureType,
    #[serde(default)]
    pub components: Vec<PlacedComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSettings>,
}

impl ProjectFile {
    #[must_use]
    pub fn new(enclosure: EnclosureType, components: Vec<PlacedComponent>, view: Option<ViewSettings>) -> Self {
        Self { version: PROJECT_VERSION, enclosure, components, view }
    }

    /// Parse and validate a project document.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError`] if the JSON is malformed, names an unknown
    /// catalog key or rotation, or fails [`ProjectFile::validate`].
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let project: Self = serde_json::from_str(json)?;
        project.validate()?;
        Ok(project)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.version != PROJECT_VERSION {
            return Err(ProjectError::UnsupportedVersion(self.version));
        }
        let mut seen = HashSet::with_capacity(self.components.len());
        for c in &self.components {
            if !seen.insert(c.id) {
                return Err(ProjectError::DuplicateId(c.id));
            }
            if !c.x.is_finite() || !c.y.is_finite() {
                return Err(ProjectError::NonFiniteOffset(c.id));
            }
        }
        if let Some(view) = &self.view {
            if !view.zoom.is_finite() || view.zoom <= 0.0 {
                return Err(ProjectError::InvalidZoom(view.zoom));
            }
            if !view.grid.size_mm.is_finite() || view.grid.size_mm <= 0.0 {
                return Err(ProjectError::InvalidGridSize(view.grid.size_mm));
            }
        }
        Ok(())
    }
}
