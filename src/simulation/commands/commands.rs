use crate::core::Vec2;
use crate::domain::Phase;
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};

use super::{render, WidgetCore};

pub(super) fn begin_drag<R, O, S>(widget: &mut WidgetCore<R, O, S>, pointer: Vec2)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_enabled() {
        return;
    }
    if !pointer.is_finite() {
        log_warn!("drag ignored: non-finite pointer ({}, {})", pointer.x, pointer.y);
        return;
    }

    // Dragging overrides physics: the pending frame must never run
    widget.cancel_pending_frame();
    widget.phase = Phase::Dragging;
    widget.last_pointer = pointer;
    widget.motion.velocity = Vec2::zero();

    widget.sink.set_dragging(true);
    widget.sink.clear_snap_cue();
}

/// Follow the pointer by deltas; the widget is never teleported to it
pub(super) fn update_drag<R, O, S>(widget: &mut WidgetCore<R, O, S>, pointer: Vec2)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_dragging() {
        return;
    }
    if !pointer.is_finite() {
        log_warn!("drag move ignored: non-finite pointer ({}, {})", pointer.x, pointer.y);
        return;
    }

    let delta = pointer - widget.last_pointer;
    widget.motion.position += delta;

    // Release velocity reflects the last few moves, not the whole drag
    let keep = widget.config.drag_smoothing;
    widget.motion.velocity = widget.motion.velocity * keep + delta * (1.0 - keep);

    widget.last_pointer = pointer;
    render::render(widget);
}

pub(super) fn end_drag<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_dragging() {
        return;
    }

    widget.sink.set_dragging(false);
    widget.phase = Phase::Simulating;
    widget.frames_simulated = 0;
    widget.last_frame_ms = None;
    widget.pending_frame = Some(widget.scheduler.request_frame());

    if widget.config.verbose {
        let v = widget.motion.velocity;
        log_debug!("released with velocity ({}, {})", v.x, v.y);
    }
}

pub(super) fn set_position<R, O, S>(widget: &mut WidgetCore<R, O, S>, x: f64, y: f64)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    let at = Vec2::new(x, y);
    if !at.is_finite() {
        log_warn!("set_position ignored: non-finite input ({}, {})", x, y);
        return;
    }

    widget.motion.position = at;
    widget.rest_position = at;
    if widget.phase.is_enabled() {
        render::render(widget);
    }

    log_info!("logo position set to ({}, {})", x, y);
}

pub(super) fn reset_position<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_enabled() {
        return;
    }
    widget.snap_to_rest();
}
