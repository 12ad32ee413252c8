//! Widget physics - per-frame Euler integration
//!
//! Key concepts:
//! - Velocity persists across frames and is in pixels per frame
//! - Gravity accelerates the widget downward each frame
//! - Friction decays velocity multiplicatively
//! - Viewport edges and obstacle rectangles reflect velocity, scaled by restitution
//! - A magnet pulls the widget back to its rest position and snaps it there

mod collision;
mod forces;
mod magnet;
mod types;

pub use collision::{reachable_box, resolve_bounds, resolve_obstacle, resolve_obstacles};
pub use forces::{integrate, time_scale};
pub use magnet::apply_magnet;
pub use types::{Face, MagnetOutcome, Motion, Wall};
