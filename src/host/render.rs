use std::fmt;

use crate::core::clock::Deadline;
use crate::core::Vec2;

/// 2D transform relative to the element's natural placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    /// Degrees
    pub rotation: f64,
}

impl fmt::Display for Transform {
    /// CSS `transform` value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) rotate({}deg)",
            self.translate.x, self.translate.y, self.rotation
        )
    }
}

/// Where the widget is drawn
pub trait RenderSink {
    /// Current viewport size in pixels
    fn viewport(&self) -> Vec2;

    /// `None` restores the element's own transform
    fn apply_transform(&mut self, transform: Option<Transform>);

    /// Grab cursor while a drag is in progress
    fn set_dragging(&mut self, dragging: bool);

    /// Short eased transition shown after a magnetic snap
    fn play_snap_cue(&mut self, duration_ms: u32);

    fn clear_snap_cue(&mut self);
}

/// Render sink that keeps the latest output for the page script to read
/// once per animation frame.
#[derive(Debug, Default)]
pub struct TransformBuffer {
    viewport: Vec2,
    transform: Option<Transform>,
    dragging: bool,
    snap_cue: Option<Deadline>,
    writes: u32,
}

impl TransformBuffer {
    pub fn new(width: f64, height: f64) -> Self {
        Self { viewport: Vec2::new(width, height), ..Self::default() }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// CSS value, `None` when the element should use its own transform
    pub fn css(&self) -> Option<String> {
        self.transform.map(|t| t.to_string())
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn snap_cue_active(&self) -> bool {
        self.snap_cue.is_some_and(|d| !d.is_past())
    }

    /// Number of `apply_transform` calls so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl RenderSink for TransformBuffer {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn apply_transform(&mut self, transform: Option<Transform>) {
        self.transform = transform;
        self.writes = self.writes.wrapping_add(1);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn play_snap_cue(&mut self, duration_ms: u32) {
        self.snap_cue = Some(Deadline::after(duration_ms));
    }

    fn clear_snap_cue(&mut self) {
        self.snap_cue = None;
    }
}
