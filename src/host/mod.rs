//! Collaborators of the widget controller
//!
//! - render sink: receives the transform and visual cues
//! - obstacle provider: page regions to bounce off
//! - frame scheduler: drives the simulation one display frame at a time
//!
//! Each comes with the in-memory implementation the wasm facade uses.

mod frames;
mod obstacles;
mod render;

pub use frames::{FrameHandle, FrameQueue, FrameScheduler};
pub use obstacles::{ObstacleList, ObstacleProvider};
pub use render::{RenderSink, Transform, TransformBuffer};
