use crate::core::Vec2;
use crate::domain::Phase;
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};
use crate::systems::physics::Motion;

use super::{init, WidgetCore};

pub(super) fn enable<R, O, S>(widget: &mut WidgetCore<R, O, S>, at: Vec2)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if widget.phase.is_enabled() {
        return;
    }
    if !at.is_finite() {
        log_warn!("enable ignored: non-finite position ({}, {})", at.x, at.y);
        return;
    }

    // The element stays exactly where it is drawn: no render here
    widget.motion = Motion::at(at);
    widget.rest_position = at;
    widget.last_pointer = at;
    widget.logo_found = true;
    widget.transform_applied = false;
    widget.frames_simulated = 0;
    widget.phase = Phase::Idle;

    log_info!("logo physics enabled at ({}, {})", at.x, at.y);
}

pub(super) fn disable<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_enabled() {
        return;
    }

    widget.cancel_pending_frame();
    widget.sink.apply_transform(None);
    widget.sink.set_dragging(false);
    widget.sink.clear_snap_cue();
    init::reset_state(widget);

    log_info!("logo physics disabled");
}

pub(super) fn route_changed<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    log_info!("route changed, resetting logo physics and spin state");
    disable(widget);
    widget.spin.reset();
    widget.logo_found = false;
}
