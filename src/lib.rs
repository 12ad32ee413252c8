//! GeloLabs logo physics - draggable, throwable site logo in WASM
//!
//! The logo can be picked up, thrown around the viewport, bounces off the
//! edges and page obstacles, and is pulled back to its home by a magnet.
//!
//! Architecture:
//! - core/        - vector math, rectangles, logging, clock
//! - domain/      - tunables and controller phase
//! - systems/     - pure physics (forces, collisions, magnet)
//! - host/        - render sink, obstacle source, frame scheduler
//! - simulation/  - the widget controller
//! - api/         - wasm facade and message protocol

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod host;
pub mod simulation;
pub mod api;

pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    log_info!("GeloLabs logo physics v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get module version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::LogoWidget;
pub use crate::core::{Rect, Vec2};
pub use domain::{ConfigError, EntrySpin, Phase, PhysicsConfig, SpinStyle, StepMode};
pub use simulation::{WidgetCore, WidgetStatus};
