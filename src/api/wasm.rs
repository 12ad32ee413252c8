use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::PhysicsConfig;
use crate::simulation::WidgetCore;

use super::protocol;

/// Physics widget handle for the content script.
///
/// The page script owns the DOM side: it forwards pointer events, calls
/// `tick()` from its `requestAnimationFrame` loop while `wants_frame` is set,
/// and copies `transform` onto the logo element after each call.
#[wasm_bindgen]
pub struct LogoWidget {
    core: WidgetCore,
    tab_id: Option<i64>,
}

#[wasm_bindgen]
impl LogoWidget {
    /// Create a widget for a viewport of the given size, physics off
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            core: WidgetCore::new(viewport_width, viewport_height),
            tab_id: None,
        }
    }

    /// Create a widget with tunables from a JSON object (camelCase keys)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(viewport_width: f64, viewport_height: f64, json: &str) -> Result<LogoWidget, JsValue> {
        let mut widget = Self::new(viewport_width, viewport_height);
        widget.set_config(json)?;
        Ok(widget)
    }

    // === SETTINGS ===

    pub fn set_config(&mut self, json: &str) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.sink_mut().set_viewport(width, height);
    }

    /// Obstacle rectangles as a flat `[left, top, right, bottom, ...]` list
    pub fn set_obstacles(&mut self, rects: &[f64]) {
        self.core.obstacles_mut().set_flat(rects);
    }

    pub fn clear_obstacles(&mut self) {
        self.core.obstacles_mut().clear();
    }

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize {
        self.core.obstacles().len()
    }

    // === PAGE STATE ===

    /// Tab this content script runs in; messages for other tabs are ignored
    pub fn set_tab_id(&mut self, tab_id: Option<i32>) {
        self.tab_id = tab_id.map(i64::from);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.core.set_reduced_motion(reduced);
    }

    pub fn set_logo_found(&mut self, found: bool) {
        self.core.set_logo_found(found);
    }

    // === ENTRY ANIMATION ===

    /// Returns false when the logo already spun on this page
    pub fn start_spin(&mut self, reason: &str) -> bool {
        self.core.start_spin(reason)
    }

    pub fn stop_spin(&mut self) {
        self.core.stop_spin();
    }

    /// Call from `animationend`; `x`, `y` is the logo's visual center
    pub fn finish_spin(&mut self, x: f64, y: f64) {
        self.core.finish_spin(Vec2::new(x, y));
    }

    /// Animation class to put on the logo, `undefined` when not spinning
    #[wasm_bindgen(getter)]
    pub fn spin_class(&self) -> Option<String> {
        let spin = self.core.spin();
        spin.is_spinning().then(|| spin.style().css_class().to_string())
    }

    // === LIFECYCLE ===

    /// Turn physics on; `x`, `y` is the logo's current visual center
    pub fn enable(&mut self, x: f64, y: f64) {
        self.core.enable(Vec2::new(x, y));
    }

    pub fn disable(&mut self) {
        self.core.disable();
    }

    #[wasm_bindgen(js_name = routeChanged)]
    pub fn route_changed(&mut self) {
        self.core.route_changed();
    }

    pub fn reset_position(&mut self) {
        self.core.reset_position();
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.core.set_position(x, y);
    }

    // === POINTER INPUT ===

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.core.begin_drag(Vec2::new(x, y));
    }

    pub fn update_drag(&mut self, x: f64, y: f64) {
        self.core.update_drag(Vec2::new(x, y));
    }

    pub fn end_drag(&mut self) {
        self.core.end_drag();
    }

    // === FRAMES ===

    /// Run the pending frame, if any. Returns true while more frames are wanted.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        match self.core.pending_frame() {
            Some(handle) => self.core.on_frame(handle, timestamp_ms),
            None => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn wants_frame(&self) -> bool {
        self.core.pending_frame().is_some()
    }

    // === OUTPUT ===

    /// CSS `transform` value to apply, `undefined` to restore the element's own
    #[wasm_bindgen(getter)]
    pub fn transform(&self) -> Option<String> {
        self.core.sink().css()
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.core.sink().is_dragging()
    }

    /// Whether the post-snap transition should still be shown
    #[wasm_bindgen(getter)]
    pub fn snap_cue(&self) -> bool {
        self.core.sink().snap_cue_active()
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.core.is_enabled()
    }

    #[wasm_bindgen(getter)]
    pub fn simulating(&self) -> bool {
        self.core.is_simulating()
    }

    #[wasm_bindgen(getter)]
    pub fn position_x(&self) -> f64 { self.core.position().x }

    #[wasm_bindgen(getter)]
    pub fn position_y(&self) -> f64 { self.core.position().y }

    #[wasm_bindgen(getter)]
    pub fn rest_x(&self) -> f64 { self.core.rest_position().x }

    #[wasm_bindgen(getter)]
    pub fn rest_y(&self) -> f64 { self.core.rest_position().y }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 { self.core.rotation() }

    // === MESSAGES ===

    /// Handle one extension message and return the JSON reply,
    /// `undefined` when it was meant for another tab
    pub fn handle_message(&mut self, json: &str) -> Result<Option<String>, JsValue> {
        protocol::handle_message(&mut self.core, json, self.tab_id).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.core.status()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl LogoWidget {
    pub fn core(&self) -> &WidgetCore {
        &self.core
    }
}
