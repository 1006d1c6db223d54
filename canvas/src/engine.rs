use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Size};
use crate::catalog::{ComponentType, EnclosureDescriptor, EnclosureType};
use crate::consts::{DRAG_CLICK_SUPPRESS_MS, DRAG_THRESHOLD_PX};
use crate::doc::{ComponentId, DocStore, PartialComponent, PlacedComponent};
use crate::hit;
use crate::input::{Button, InputState, Modifiers, UiState, WheelDelta};
use crate::layout::Layout;
use crate::placement::{GridSettings, Placement, PlacementContext};
use crate::project::{ProjectFile, ViewSettings};
use crate::render;
use crate::rotation::Rotation;
use crate::side::{Side, display_label};
use crate::units::Unit;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// Every document mutation names the component it touched so the host can mark
/// the project dirty and persist it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ComponentCreated(PlacedComponent),
    ComponentUpdated { id: ComponentId, fields: PartialComponent },
    ComponentDeleted { id: ComponentId },
    SelectionChanged(Option<ComponentId>),
    /// Call [`EngineCore::clear_just_finished_drag`] after this many milliseconds.
    ScheduleClickRelease { after_ms: f64 },
    SetCursor(String),
    RenderNeeded,
}

/// Read-only view of everything a paint needs, captured at the start of the paint.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub doc: &'a DocStore,
    pub ui: &'a UiState,
    pub camera: Camera,
    pub enclosure: &'static EnclosureDescriptor,
    pub layout: Layout,
    pub viewport: Size,
    pub dpr: f64,
}

/// Document, view and gesture state plus every operation that doesn't need a
/// canvas element. Runs natively under test.
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub enclosure: EnclosureType,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: DocStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            enclosure: EnclosureType::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enclosure(enclosure: EnclosureType) -> Self {
        Self { enclosure, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the document with a set of components.
    pub fn load_snapshot(&mut self, components: Vec<PlacedComponent>) {
        self.doc.load_snapshot(components);
        self.input = InputState::Idle;
        self.ui.selected_id = None;
        self.ui.hovered_id = None;
    }

    /// Load a validated project: enclosure, components and (if present) view settings.
    pub fn load_project(&mut self, project: ProjectFile) {
        tracing::debug!(
            enclosure = ?project.enclosure,
            components = project.components.len(),
            "loading project"
        );
        self.enclosure = project.enclosure;
        if let Some(view) = project.view {
            self.camera.set_zoom(view.zoom);
            self.camera.rotation = view.canvas_rotation;
            self.ui.grid = view.grid;
            self.ui.unit = view.unit;
        }
        self.load_snapshot(project.components);
    }

    /// Export the current state as a project file.
    #[must_use]
    pub fn to_project(&self) -> ProjectFile {
        ProjectFile::new(
            self.enclosure,
            self.doc.by_creation().into_iter().cloned().collect(),
            Some(ViewSettings {
                zoom: self.camera.zoom,
                canvas_rotation: self.camera.rotation,
                grid: self.ui.grid,
                unit: self.ui.unit,
            }),
        )
    }

    /// Switch enclosure model. Components keep their face-relative offsets.
    pub fn set_enclosure(&mut self, enclosure: EnclosureType) -> Vec<Action> {
        if self.enclosure == enclosure {
            return Vec::new();
        }
        self.enclosure = enclosure;
        vec![Action::RenderNeeded]
    }

    /// Place a new component at the center of the front face and select it.
    pub fn add_component(&mut self, kind: ComponentType) -> Vec<Action> {
        let component = self.doc.create(kind, Side::Front, 0.0, 0.0);
        self.ui.selected_id = Some(component.id);
        vec![
            Action::ComponentCreated(component.clone()),
            Action::SelectionChanged(Some(component.id)),
            Action::RenderNeeded,
        ]
    }

    pub fn delete_component(&mut self, id: &ComponentId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::ComponentDeleted { id: *id }];
        if self.ui.selected_id.as_ref() == Some(id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        if self.ui.hovered_id.as_ref() == Some(id) {
            self.ui.hovered_id = None;
        }
        if matches!(self.input, InputState::DraggingComponent { id: drag_id, .. } if drag_id == *id) {
            self.input = InputState::Idle;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Delete the selected component, if any.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.ui.selected_id {
            Some(id) => self.delete_component(&id),
            None => Vec::new(),
        }
    }

    /// Toggle a component between 0° and 90°.
    pub fn rotate_component(&mut self, id: &ComponentId) -> Vec<Action> {
        let Some(current) = self.doc.get(id).map(|c| c.rotation) else {
            return Vec::new();
        };
        let fields = PartialComponent { rotation: Some(current.toggled()), ..Default::default() };
        self.commit(*id, fields)
    }

    pub fn toggle_exclude_from_print(&mut self, id: &ComponentId) -> Vec<Action> {
        let Some(current) = self.doc.get(id).map(|c| c.exclude_from_print) else {
            return Vec::new();
        };
        let fields = PartialComponent { exclude_from_print: Some(!current), ..Default::default() };
        self.commit(*id, fields)
    }

    fn commit(&mut self, id: ComponentId, fields: PartialComponent) -> Vec<Action> {
        if !self.doc.apply_partial(&id, &fields) {
            return Vec::new();
        }
        vec![Action::ComponentUpdated { id, fields }, Action::RenderNeeded]
    }

    // --- View settings ---

    pub fn set_grid(&mut self, grid: GridSettings) -> Vec<Action> {
        self.ui.grid = grid;
        vec![Action::RenderNeeded]
    }

    pub fn set_unit(&mut self, unit: Unit) -> Vec<Action> {
        self.ui.unit = unit;
        vec![Action::RenderNeeded]
    }

    pub fn set_canvas_rotation(&mut self, rotation: Rotation) -> Vec<Action> {
        if self.camera.rotation == rotation {
            return Vec::new();
        }
        self.camera.rotation = rotation;
        vec![Action::RenderNeeded]
    }

    pub fn toggle_canvas_rotation(&mut self) -> Vec<Action> {
        self.set_canvas_rotation(self.camera.rotation.toggled())
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        self.camera.set_zoom(zoom);
        vec![Action::RenderNeeded]
    }

    /// Fit the whole layout into the viewport. Returns the chosen zoom.
    pub fn zoom_to_fit(&mut self) -> f64 {
        let layout = self.layout();
        self.camera.zoom_to_fit(self.viewport(), layout.size())
    }

    /// End the click-suppression window opened by a drag release.
    pub fn clear_just_finished_drag(&mut self) {
        self.ui.just_finished_drag = false;
    }

    // --- Queries ---

    /// The currently selected component, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ComponentId> {
        self.ui.selected_id
    }

    /// The component under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ComponentId> {
        self.ui.hovered_id
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up a component by ID.
    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&PlacedComponent> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static EnclosureDescriptor {
        self.enclosure.descriptor()
    }

    /// Layout for the current enclosure, computed fresh.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::compute(self.descriptor())
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// The face label a component is shown under at the current canvas rotation.
    #[must_use]
    pub fn displayed_side(&self, id: &ComponentId) -> Option<Side> {
        let c = self.doc.get(id)?;
        Some(display_label(c.side, self.camera.rotation, self.descriptor().rotates_labels))
    }

    #[must_use]
    pub fn screen_to_logical(&self, screen: Point) -> Point {
        self.camera.screen_to_logical(screen, self.viewport(), self.layout().size())
    }

    #[must_use]
    pub fn logical_to_screen(&self, logical: Point) -> Point {
        self.camera.logical_to_screen(logical, self.viewport(), self.layout().size())
    }

    /// Capture a consistent view of the current state for painting.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            doc: &self.doc,
            ui: &self.ui,
            camera: self.camera,
            enclosure: self.descriptor(),
            layout: self.layout(),
            viewport: self.viewport(),
            dpr: self.dpr,
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match button {
            Button::Middle => {
                self.input = InputState::Panning { press_screen: screen_pt, last_screen: screen_pt, moved: false };
                vec![Action::SetCursor("grabbing".into())]
            }
            Button::Secondary => Vec::new(),
            Button::Primary => self.begin_primary(screen_pt),
        }
    }

    fn begin_primary(&mut self, screen_pt: Point) -> Vec<Action> {
        let layout = self.layout();
        let logical = self.screen_to_logical(screen_pt);
        let Some(id) = hit::hit_test(logical, &layout, &self.doc) else {
            self.input = InputState::Panning { press_screen: screen_pt, last_screen: screen_pt, moved: false };
            return Vec::new();
        };
        let Some(c) = self.doc.get(&id) else {
            return Vec::new();
        };
        let center = layout.component_center(c.side, c.x, c.y);
        self.input = InputState::DraggingComponent {
            id,
            grab_offset: logical.minus(center),
            press_screen: screen_pt,
            orig_side: c.side,
            orig_x: c.x,
            orig_y: c.y,
            moved: false,
        };

        let mut actions = Vec::new();
        if self.ui.selected_id != Some(id) {
            self.ui.selected_id = Some(id);
            actions.push(Action::SelectionChanged(Some(id)));
        }
        actions.push(Action::SetCursor("grabbing".into()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Alt held during a component drag bypasses grid snapping for that move.
    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        match self.input.clone() {
            InputState::Idle => self.update_hover(screen_pt),
            InputState::Panning { press_screen, last_screen, moved } => {
                if !moved && screen_pt.distance(press_screen) < DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { press_screen, last_screen: screen_pt, moved: true };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingComponent { id, grab_offset, press_screen, moved, .. } => {
                if !moved && screen_pt.distance(press_screen) < DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                self.drag_to(id, screen_pt, grab_offset, modifiers)
            }
        }
    }

    fn drag_to(&mut self, id: ComponentId, screen_pt: Point, grab_offset: Point, modifiers: Modifiers) -> Vec<Action> {
        let Some(current_side) = self.doc.get(&id).map(|c| c.side) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let layout = self.layout();
        let center = self.screen_to_logical(screen_pt).minus(grab_offset);
        let ctx = PlacementContext {
            layout: &layout,
            enclosure: self.descriptor(),
            canvas_rotation: self.camera.rotation,
            grid: GridSettings { enabled: self.ui.grid.enabled && !modifiers.alt, ..self.ui.grid },
        };

        match ctx.resolve(center) {
            Placement::Moved { side, x, y } => {
                if side != current_side {
                    tracing::debug!(%id, from = %current_side, to = %side, "component changed face");
                }
                self.doc.apply_partial(&id, &PartialComponent::position(side, x, y));
                if let InputState::DraggingComponent { moved, .. } = &mut self.input {
                    *moved = true;
                }
                vec![Action::RenderNeeded]
            }
            Placement::Rejected(reason) => {
                tracing::trace!(%id, ?reason, "drag position rejected");
                Vec::new()
            }
        }
    }

    fn update_hover(&mut self, screen_pt: Point) -> Vec<Action> {
        let logical = self.screen_to_logical(screen_pt);
        let hovered = hit::hit_test(logical, &self.layout(), &self.doc);
        if hovered == self.ui.hovered_id {
            return Vec::new();
        }
        self.ui.hovered_id = hovered;
        let cursor = if hovered.is_some() { "grab" } else { "default" };
        vec![Action::SetCursor(cursor.into()), Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { moved, .. } => {
                let mut actions = vec![Action::SetCursor("default".into())];
                if moved {
                    actions.push(self.start_click_suppression());
                }
                actions
            }
            InputState::DraggingComponent { id, orig_side, orig_x, orig_y, moved, .. } => {
                let mut actions = vec![Action::SetCursor("grab".into())];
                if !moved {
                    return actions;
                }
                actions.push(self.start_click_suppression());
                if let Some(c) = self.doc.get(&id) {
                    if c.side != orig_side || c.x != orig_x || c.y != orig_y {
                        actions.push(Action::ComponentUpdated { id, fields: PartialComponent::position(c.side, c.x, c.y) });
                    }
                }
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    fn start_click_suppression(&mut self) -> Action {
        self.ui.just_finished_drag = true;
        Action::ScheduleClickRelease { after_ms: DRAG_CLICK_SUPPRESS_MS }
    }

    /// Handle a click (press and release without a drag). Selects the topmost
    /// component under the pointer or clears the selection.
    pub fn on_click(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if self.ui.just_finished_drag {
            return Vec::new();
        }
        let logical = self.screen_to_logical(screen_pt);
        let hit = hit::hit_test(logical, &self.layout(), &self.doc);
        if hit == self.ui.selected_id {
            return Vec::new();
        }
        self.ui.selected_id = hit;
        vec![Action::SelectionChanged(hit), Action::RenderNeeded]
    }

    /// Wheel zooms one step per event; the sign of `dy` picks the direction.
    pub fn on_wheel(&mut self, _screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        let steps = if delta.dy < 0.0 {
            1
        } else if delta.dy > 0.0 {
            -1
        } else {
            0
        };
        let before = self.camera.zoom;
        self.camera.step_zoom(steps);
        if (self.camera.zoom - before).abs() < f64::EPSILON {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, enclosure: EnclosureType) -> Self {
        Self { canvas, core: EngineCore::with_enclosure(enclosure) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_click(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_click(screen_pt, modifiers)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, &self.core.snapshot()).inspect_err(|e| {
            tracing::warn!(error = ?e, "canvas render failed");
        })
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ComponentId> {
        self.core.selection()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ComponentId> {
        self.core.hovered()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    pub fn zoom_to_fit(&mut self) -> f64 {
        self.core.zoom_to_fit()
    }
}
