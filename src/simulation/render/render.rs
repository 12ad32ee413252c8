use crate::host::{FrameScheduler, ObstacleProvider, RenderSink, Transform};

use super::WidgetCore;

/// Push `translate(position - rest) rotate(rotation)` to the sink.
///
/// Offsets and rotation within `transform_epsilon` leave the element on its
/// natural placement: nothing is written, or a previous transform is cleared.
pub(super) fn render<R, O, S>(widget: &mut WidgetCore<R, O, S>)
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    let offset = widget.motion.position - widget.rest_position;
    let rotation = widget.motion.rotation;
    let eps = widget.config.transform_epsilon;

    if offset.x.abs() > eps || offset.y.abs() > eps || rotation.abs() > eps {
        widget.sink.apply_transform(Some(Transform { translate: offset, rotation }));
        widget.transform_applied = true;
    } else if widget.transform_applied {
        widget.sink.apply_transform(None);
        widget.transform_applied = false;
    }
}
