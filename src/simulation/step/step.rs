use crate::host::{FrameHandle, FrameScheduler, ObstacleProvider, RenderSink};
use crate::systems::physics::{
    apply_magnet, integrate, reachable_box, resolve_bounds, resolve_obstacles, time_scale,
    MagnetOutcome,
};

use super::{render, WidgetCore};

/// One frame of simulation:
/// integrate -> viewport edges -> obstacles -> magnet -> render -> rest check
pub(super) fn simulation_step<R, O, S>(widget: &mut WidgetCore<R, O, S>, dt_ms: f64)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.phase.is_simulating() {
        return;
    }

    let scale = time_scale(&widget.config, dt_ms);
    integrate(&mut widget.motion, &widget.config, scale);

    let margin = widget.config.margin();
    let restitution = widget.config.bounce_restitution;
    let verbose = widget.config.verbose;

    let viewport = widget.sink.viewport();
    resolve_bounds(&mut widget.motion, viewport, margin, restitution, |wall| {
        if verbose {
            log_debug!("bounced off {:?} edge", wall);
        }
    });

    // Obstacles are resolved in provider order, each one against the
    // position left by the previous one, and never pushed off screen
    let reach = reachable_box(viewport, margin);
    let contacts = resolve_obstacles(
        &mut widget.motion,
        widget.obstacles.obstacles(),
        &reach,
        margin,
        restitution,
        |face| {
            if verbose {
                log_debug!("bounced off {:?} face of obstacle", face);
            }
        },
    );
    if contacts > 0 {
        // An obstacle wider than the viewport can still push past an edge
        resolve_bounds(&mut widget.motion, viewport, margin, restitution, |_| {});
    }

    if !widget.motion.position.is_finite() || !widget.motion.velocity.is_finite() {
        log_warn!("simulation produced a non-finite state, returning to rest");
        widget.snap_to_rest();
        return;
    }

    // An anchor closer to an edge than the margin is out of reach; pull
    // toward the nearest reachable point so the snap can still fire
    let target = reach.clamp(widget.rest_position);
    match apply_magnet(&mut widget.motion, target, &widget.config) {
        MagnetOutcome::Snap => {
            widget.snap_to_rest();
            return;
        }
        MagnetOutcome::Captured if verbose => log_debug!("magnet captured the logo"),
        _ => {}
    }

    widget.frames_simulated += 1;
    render::render(widget);

    let speed = widget.motion.speed();
    if speed <= widget.config.rest_speed {
        widget.stop_simulation();
        if verbose {
            log_debug!("came to rest after {} frames, speed {:.3}", widget.frames_simulated, speed);
        }
    }
}

pub(super) fn on_frame<R, O, S>(widget: &mut WidgetCore<R, O, S>, handle: FrameHandle, timestamp_ms: f64) -> bool
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if widget.pending_frame != Some(handle) {
        if widget.config.verbose {
            log_debug!("dropping stale frame {:?}", handle);
        }
        return widget.pending_frame.is_some();
    }
    widget.pending_frame = None;

    if !widget.phase.is_simulating() {
        return false;
    }

    let nominal_ms = 1000.0 / widget.config.reference_hz;
    let dt_ms = match widget.last_frame_ms {
        Some(prev) if timestamp_ms.is_finite() && timestamp_ms > prev => timestamp_ms - prev,
        _ => nominal_ms,
    };
    if timestamp_ms.is_finite() {
        widget.last_frame_ms = Some(timestamp_ms);
    }

    simulation_step(widget, dt_ms);

    if widget.phase.is_simulating() {
        widget.pending_frame = Some(widget.scheduler.request_frame());
    }
    widget.pending_frame.is_some()
}
