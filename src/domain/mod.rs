pub mod config;
pub mod phase;
pub mod spin;

pub use config::{ConfigError, PhysicsConfig, StepMode};
pub use phase::Phase;
pub use spin::{EntrySpin, SpinStyle};
