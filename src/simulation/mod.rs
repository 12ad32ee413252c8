//! WidgetCore - the logo physics controller
//!
//! Owns the widget state and its collaborators. All mutation goes through
//! the methods below; the work itself lives in the submodules:
//! - init/      - construction, enable/disable lifecycle, settings
//! - commands/  - pointer drag and external position commands
//! - step/      - per-frame simulation and frame-task bookkeeping
//! - render/    - transform output
//! - spin/      - entry animation that precedes physics
//! - status/    - serializable snapshot

use crate::core::Vec2;
use crate::domain::{ConfigError, EntrySpin, Phase, PhysicsConfig};
use crate::host::{
    FrameHandle, FrameQueue, FrameScheduler, ObstacleList, ObstacleProvider, RenderSink,
    TransformBuffer,
};
use crate::systems::physics::Motion;

#[path = "init/init.rs"]
mod init;
#[path = "init/lifecycle.rs"]
mod lifecycle;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render.rs"]
mod render;
#[path = "spin/spin.rs"]
mod spin;
#[path = "status/status.rs"]
mod status;

pub use status::WidgetStatus;

/// The physics widget controller.
///
/// Generic over its collaborators so the physics can run against a real page
/// or against in-memory doubles.
pub struct WidgetCore<R = TransformBuffer, O = ObstacleList, S = FrameQueue> {
    config: PhysicsConfig,
    phase: Phase,

    // Physics state
    motion: Motion,
    /// Anchor the magnet pulls toward; only enable/set_position move it
    rest_position: Vec2,
    last_pointer: Vec2,

    // Page state
    spin: EntrySpin,
    logo_found: bool,

    // Collaborators
    sink: R,
    obstacles: O,
    scheduler: S,

    // Frame task
    pending_frame: Option<FrameHandle>,
    last_frame_ms: Option<f64>,
    frames_simulated: u64,

    /// Whether the sink currently holds a transform we wrote
    transform_applied: bool,
}

impl WidgetCore {
    /// Controller with default tunables and the in-memory collaborators
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        init::create_widget_core(viewport_width, viewport_height)
    }
}

impl<R: RenderSink, O: ObstacleProvider, S: FrameScheduler> WidgetCore<R, O, S> {
    pub fn with_parts(config: PhysicsConfig, sink: R, obstacles: O, scheduler: S) -> Self {
        init::create_widget_core_with_parts(config, sink, obstacles, scheduler)
    }

    // === LIFECYCLE ===

    /// Turn physics on, anchored at the element's current visual center.
    /// Leaves the element's transform untouched.
    pub fn enable(&mut self, current_visual_position: Vec2) {
        lifecycle::enable(self, current_visual_position);
    }

    /// Turn physics off and clear everything it drew. Idempotent.
    pub fn disable(&mut self) {
        lifecycle::disable(self);
    }

    /// The host page moved to another logical route
    pub fn route_changed(&mut self) {
        lifecycle::route_changed(self);
    }

    // === ENTRY ANIMATION ===

    /// Copilot became busy. Returns false when the spin was skipped.
    pub fn start_spin(&mut self, reason: &str) -> bool {
        spin::start_spin(self, reason)
    }

    pub fn stop_spin(&mut self) {
        spin::stop_spin(self);
    }

    /// The spin animation ended; `at` is the logo's visual center
    pub fn finish_spin(&mut self, at: Vec2) {
        spin::finish_spin(self, at);
    }

    pub fn spin(&self) -> &EntrySpin {
        &self.spin
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.spin.set_reduced_motion(reduced);
    }

    /// Whether the page script has located the logo element
    pub fn logo_found(&self) -> bool {
        self.logo_found
    }

    pub fn set_logo_found(&mut self, found: bool) {
        self.logo_found = found;
    }

    // === SETTINGS ===

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the tunables; the rest position and motion are kept
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), ConfigError> {
        settings::set_config(self, config)
    }

    // === POINTER INPUT ===

    pub fn begin_drag(&mut self, pointer: Vec2) {
        commands::begin_drag(self, pointer);
    }

    pub fn update_drag(&mut self, pointer: Vec2) {
        commands::update_drag(self, pointer);
    }

    pub fn end_drag(&mut self) {
        commands::end_drag(self);
    }

    // === EXTERNAL COMMANDS ===

    /// Move both the widget and its anchor. Non-finite input is ignored.
    pub fn set_position(&mut self, x: f64, y: f64) {
        commands::set_position(self, x, y);
    }

    /// Snap back to the rest position
    pub fn reset_position(&mut self) {
        commands::reset_position(self);
    }

    // === SIMULATION ===

    /// Advance the simulation by one frame. `dt_ms` only matters in scaled mode.
    pub fn simulation_step(&mut self, dt_ms: f64) {
        step::simulation_step(self, dt_ms);
    }

    /// Deliver a display frame. Frames other than the one the controller is
    /// waiting for are dropped. Returns true while more frames are wanted.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp_ms: f64) -> bool {
        step::on_frame(self, handle, timestamp_ms)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Frames simulated since the last release
    pub fn frames_simulated(&self) -> u64 {
        self.frames_simulated
    }

    // === STATE ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase.is_enabled()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    pub fn is_simulating(&self) -> bool {
        self.phase.is_simulating()
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn rest_position(&self) -> Vec2 {
        self.rest_position
    }

    pub fn velocity(&self) -> Vec2 {
        self.motion.velocity
    }

    pub fn rotation(&self) -> f64 {
        self.motion.rotation
    }

    pub fn rotation_velocity(&self) -> f64 {
        self.motion.rotation_velocity
    }

    pub fn status(&self) -> WidgetStatus {
        status::snapshot(self)
    }

    // === COLLABORATORS ===

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn obstacles(&self) -> &O {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut O {
        &mut self.obstacles
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

// Private helpers shared by the submodules
impl<R: RenderSink, O: ObstacleProvider, S: FrameScheduler> WidgetCore<R, O, S> {
    /// Drop the scheduled frame, if any, so it can never run
    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.last_frame_ms = None;
    }

    fn stop_simulation(&mut self) {
        self.cancel_pending_frame();
        if self.phase.is_simulating() {
            self.phase = Phase::Idle;
        }
    }

    /// Put the widget exactly on its rest position and end all motion
    fn snap_to_rest(&mut self) {
        self.stop_simulation();
        if self.phase.is_dragging() {
            self.sink.set_dragging(false);
            self.phase = Phase::Idle;
        }
        self.motion.position = self.rest_position;
        self.motion.halt();
        render::render(self);
        self.sink.play_snap_cue(self.config.snap_cue_ms);
        if self.config.verbose {
            log_debug!("magnetic snap to ({}, {})", self.rest_position.x, self.rest_position.y);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
