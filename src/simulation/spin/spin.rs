use crate::core::Vec2;
use crate::domain::SpinStyle;
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};

use super::{lifecycle, WidgetCore};

pub(super) fn start_spin<R, O, S>(widget: &mut WidgetCore<R, O, S>, reason: &str) -> bool
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.spin.start(reason) {
        log_info!("logo has already spun once, skipping: {}", reason);
        return false;
    }
    log_info!("logo spin started: {}", reason);
    true
}

pub(super) fn stop_spin<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if widget.spin.is_spinning() {
        log_info!("logo spin stopped");
    }
    widget.spin.stop();
}

/// The entry animation ended on the page; `at` is the logo's visual center.
/// A full spin hands over to physics, the reduced-motion pulse does not.
pub(super) fn finish_spin<R, O, S>(widget: &mut WidgetCore<R, O, S>, at: Vec2)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    if !widget.spin.is_spinning() {
        return;
    }
    let style = widget.spin.style();
    widget.spin.stop();

    if style == SpinStyle::Spin {
        log_info!("logo spin completed, enabling physics");
        lifecycle::enable(widget, at);
    }
}
