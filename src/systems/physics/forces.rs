use crate::domain::{PhysicsConfig, StepMode};

use super::types::Motion;

/// Largest frame-time multiple the scaled integrator accepts (a tab waking
/// from the background reports one huge frame)
const MAX_TIME_SCALE: f64 = 4.0;

/// Frame-time multiple for this step: always 1 in per-frame mode
pub fn time_scale(config: &PhysicsConfig, dt_ms: f64) -> f64 {
    match config.step_mode {
        StepMode::PerFrame => 1.0,
        StepMode::Scaled => {
            if !dt_ms.is_finite() || dt_ms <= 0.0 {
                return 1.0;
            }
            let frame_ms = 1000.0 / config.reference_hz;
            (dt_ms / frame_ms).clamp(0.0, MAX_TIME_SCALE)
        }
    }
}

/// Gravity, friction, spin and displacement for one step.
///
/// `scale` is the frame-time multiple from [`time_scale`].
#[inline]
pub fn integrate(motion: &mut Motion, config: &PhysicsConfig, scale: f64) {
    motion.velocity.y += config.gravity * scale;

    let friction = if scale == 1.0 { config.friction } else { config.friction.powf(scale) };
    motion.velocity *= friction;

    // Spin follows horizontal motion
    motion.rotation_velocity = motion.velocity.x * config.spin_factor;
    motion.rotation += motion.rotation_velocity * scale;
    motion.rotation_velocity *= config.spin_damping;

    motion.position += motion.velocity * scale;
}
