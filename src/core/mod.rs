//! Core math, time and logging shared by every layer

#[macro_use]
pub mod log;
pub mod clock;
pub mod rect;
pub mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
