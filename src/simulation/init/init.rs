use crate::core::Vec2;
use crate::domain::{EntrySpin, Phase, PhysicsConfig};
use crate::host::{FrameQueue, FrameScheduler, ObstacleList, ObstacleProvider, RenderSink, TransformBuffer};
use crate::systems::physics::Motion;

use super::WidgetCore;

pub(super) fn create_widget_core(viewport_width: f64, viewport_height: f64) -> WidgetCore {
    create_widget_core_with_parts(
        PhysicsConfig::default(),
        TransformBuffer::new(viewport_width, viewport_height),
        ObstacleList::default(),
        FrameQueue::new(),
    )
}

pub(super) fn create_widget_core_with_parts<R, O, S>(
    config: PhysicsConfig,
    sink: R,
    obstacles: O,
    scheduler: S,
) -> WidgetCore<R, O, S>
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log_warn!("invalid physics config ({}), using defaults", e);
            PhysicsConfig::default()
        }
    };

    WidgetCore {
        config,
        phase: Phase::Disabled,
        motion: Motion::default(),
        rest_position: Vec2::zero(),
        last_pointer: Vec2::zero(),
        spin: EntrySpin::default(),
        logo_found: false,
        sink,
        obstacles,
        scheduler,
        pending_frame: None,
        last_frame_ms: None,
        frames_simulated: 0,
        transform_applied: false,
    }
}

/// Back to the freshly constructed physics state; collaborators, config
/// and page state are kept
pub(super) fn reset_state<R, O, S>(widget: &mut WidgetCore<R, O, S>) {
    widget.phase = Phase::Disabled;
    widget.motion = Motion::default();
    widget.rest_position = Vec2::zero();
    widget.last_pointer = Vec2::zero();
    widget.pending_frame = None;
    widget.last_frame_ms = None;
    widget.frames_simulated = 0;
    widget.transform_applied = false;
}
