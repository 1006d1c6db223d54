//! Document model: placed components and the in-memory store.
//!
//! `PlacedComponent` is the persisted per-component state. `PartialComponent` is a
//! sparse update used both for local mutations and for the actions reported to
//! the host. `DocStore` owns every live component and hands out the stacking
//! order used by hit-testing and drawing.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{ComponentSpec, ComponentType};
use crate::rotation::Rotation;
use crate::side::Side;

/// Unique identifier for a placed component.
pub type ComponentId = Uuid;

/// A component mounted on one face of the enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedComponent {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Horizontal offset from the face center, in logical pixels.
    pub x: f64,
    /// Vertical offset from the face center, in logical pixels.
    pub y: f64,
    /// Physical face the component is mounted on.
    pub side: Side,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub exclude_from_print: bool,
    /// Creation order; higher values stack above lower ones.
    #[serde(default)]
    pub created_seq: u64,
}

impl PlacedComponent {
    #[must_use]
    pub fn spec(&self) -> &'static ComponentSpec {
        self.kind.spec()
    }
}

/// Sparse update for a placed component. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_from_print: Option<bool>,
}

impl PartialComponent {
    #[must_use]
    pub fn position(side: Side, x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), side: Some(side), ..Default::default() }
    }
}

/// Stacking comparator: `Less` means `a` is above `b`.
///
/// Regular components sit above footprint guides; within a group the newer
/// component (higher `created_seq`) sits on top. Ids break exact ties so the
/// order never depends on hash iteration.
#[must_use]
pub fn stacking_cmp(a: &PlacedComponent, b: &PlacedComponent) -> Ordering {
    let guide_a = a.spec().is_footprint_guide();
    let guide_b = b.spec().is_footprint_guide();
    guide_a
        .cmp(&guide_b)
        .then_with(|| b.created_seq.cmp(&a.created_seq))
        .then_with(|| a.id.cmp(&b.id))
}

/// In-memory store of placed components.
#[derive(Debug)]
pub struct DocStore {
    components: HashMap<ComponentId, PlacedComponent>,
    next_seq: u64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { components: HashMap::new(), next_seq: 1 }
    }

    /// Create a component at `(x, y)` on `side`, stacked above everything else.
    pub fn create(&mut self, kind: ComponentType, side: Side, x: f64, y: f64) -> PlacedComponent {
        let component = PlacedComponent {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            side,
            rotation: Rotation::Deg0,
            exclude_from_print: false,
            created_seq: self.next_seq,
        };
        self.insert(component.clone());
        component
    }

    /// Insert or replace a component. Components without a sequence number get
    /// the next one.
    pub fn insert(&mut self, mut component: PlacedComponent) {
        if component.created_seq == 0 {
            component.created_seq = self.next_seq;
        }
        self.next_seq = self.next_seq.max(component.created_seq + 1);
        self.components.insert(component.id, component);
    }

    /// Remove a component by id, returning it if it was present.
    pub fn remove(&mut self, id: &ComponentId) -> Option<PlacedComponent> {
        self.components.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.components.get(id)
    }

    /// Apply a partial update. Returns false if the component doesn't exist.
    pub fn apply_partial(&mut self, id: &ComponentId, partial: &PartialComponent) -> bool {
        let Some(c) = self.components.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            c.x = x;
        }
        if let Some(y) = partial.y {
            c.y = y;
        }
        if let Some(side) = partial.side {
            c.side = side;
        }
        if let Some(rotation) = partial.rotation {
            c.rotation = rotation;
        }
        if let Some(exclude) = partial.exclude_from_print {
            c.exclude_from_print = exclude;
        }
        true
    }

    /// Replace all components with a full snapshot.
    ///
    /// Components loaded without a sequence number are numbered after the
    /// sequenced ones, in the order given.
    pub fn load_snapshot(&mut self, components: Vec<PlacedComponent>) {
        self.components.clear();
        self.next_seq = components.iter().map(|c| c.created_seq).max().unwrap_or(0) + 1;
        for c in components {
            self.insert(c);
        }
    }

    /// All components, topmost first. This is the hit-test order.
    #[must_use]
    pub fn hit_order(&self) -> Vec<&PlacedComponent> {
        let mut out: Vec<&PlacedComponent> = self.components.values().collect();
        out.sort_by(|a, b| stacking_cmp(a, b));
        out
    }

    /// All components, bottom first. This is the draw order.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&PlacedComponent> {
        let mut out = self.hit_order();
        out.reverse();
        out
    }

    /// Components ordered by creation, for stable serialization.
    #[must_use]
    pub fn by_creation(&self) -> Vec<&PlacedComponent> {
        let mut out: Vec<&PlacedComponent> = self.components.values().collect();
        out.sort_by(|a, b| a.created_seq.cmp(&b.created_seq).then_with(|| a.id.cmp(&b.id)));
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
