use serde::Serialize;

use crate::core::Vec2;
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};

use super::WidgetCore;

/// Snapshot reported to `getStatus` callers
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStatus {
    pub spinning: bool,
    pub logo_found: bool,
    pub reduced_motion: bool,
    pub physics_enabled: bool,
    pub physics_active: bool,
    pub is_dragging: bool,
    pub position: Vec2,
    pub rest_position: Vec2,
    pub rotation: f64,
}

pub(super) fn snapshot<R, O, S>(widget: &WidgetCore<R, O, S>) -> WidgetStatus
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    WidgetStatus {
        spinning: widget.spin.is_spinning(),
        logo_found: widget.logo_found,
        reduced_motion: widget.spin.reduced_motion(),
        physics_enabled: widget.phase.is_enabled(),
        physics_active: widget.phase.is_simulating(),
        is_dragging: widget.phase.is_dragging(),
        position: widget.motion.position,
        rest_position: widget.rest_position,
        rotation: widget.motion.rotation,
    }
}
