use crate::domain::{ConfigError, PhysicsConfig};
use crate::host::{FrameScheduler, ObstacleProvider, RenderSink};

use super::WidgetCore;

pub(super) fn set_config<R, O, S>(widget: &mut WidgetCore<R, O, S>, config: PhysicsConfig) -> Result<(), ConfigError>
where
    R: RenderSink,
    O: ObstacleProvider,
    S: FrameScheduler,
{
    config.validate()?;
    widget.config = config;
    Ok(())
}
