use crate::core::Vec2;
use crate::domain::PhysicsConfig;

use super::types::{MagnetOutcome, Motion};

/// Attract the widget toward `rest`.
///
/// Within `magnetic_radius` the pull is added to the velocity; within
/// `capture_radius` it replaces the velocity outright so the widget cannot
/// orbit the anchor. The caller performs the snap when `Snap` is returned.
pub fn apply_magnet(motion: &mut Motion, rest: Vec2, config: &PhysicsConfig) -> MagnetOutcome {
    let distance = motion.position.distance(rest);
    if distance >= config.magnetic_radius {
        return MagnetOutcome::OutOfRange;
    }

    // Stronger the closer it gets
    let strength = (config.magnetic_radius - distance) / config.magnetic_radius * config.magnetic_strength;
    let pull = (rest - motion.position) * strength;

    let outcome = if distance < config.capture_radius {
        motion.velocity = pull * config.capture_gain;
        MagnetOutcome::Captured
    } else {
        motion.velocity += pull;
        MagnetOutcome::Pulled
    };

    if distance < config.snap_radius {
        return MagnetOutcome::Snap;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, vx: f64, vy: f64) -> Motion {
        let mut m = Motion::at(Vec2::new(x, y));
        m.velocity = Vec2::new(vx, vy);
        m
    }

    #[test]
    fn far_away_is_untouched() {
        let config = PhysicsConfig::default();
        let mut m = at(200.0, 0.0, 4.0, 0.0);
        assert_eq!(apply_magnet(&mut m, Vec2::zero(), &config), MagnetOutcome::OutOfRange);
        assert_eq!(m.velocity, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn outer_ring_blends_pull_into_velocity() {
        let config = PhysicsConfig::default();
        let mut m = at(40.0, 0.0, 4.0, 0.0);

        assert_eq!(apply_magnet(&mut m, Vec2::zero(), &config), MagnetOutcome::Pulled);

        // strength = 40/80 * 0.3 = 0.15, pull = -40 * 0.15 = -6
        assert!((m.velocity.x - (4.0 - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn capture_ring_overrides_velocity() {
        let config = PhysicsConfig::default();
        let mut m = at(20.0, 0.0, 50.0, -7.0);

        assert_eq!(apply_magnet(&mut m, Vec2::zero(), &config), MagnetOutcome::Captured);

        // strength = 60/80 * 0.3 = 0.225, pull = -4.5, override x3
        assert!((m.velocity.x + 13.5).abs() < 1e-12);
        assert_eq!(m.velocity.y, 0.0);
    }

    #[test]
    fn inside_snap_radius_requests_snap() {
        let config = PhysicsConfig::default();
        let mut m = at(5.0, 5.0, 1.0, 1.0);
        assert_eq!(apply_magnet(&mut m, Vec2::zero(), &config), MagnetOutcome::Snap);
    }

    #[test]
    fn zero_radius_disables_the_magnet() {
        let config = PhysicsConfig {
            magnetic_radius: 0.0,
            capture_radius: 0.0,
            snap_radius: 0.0,
            ..PhysicsConfig::default()
        };
        let mut m = at(0.0, 0.0, 1.0, 0.0);
        assert_eq!(apply_magnet(&mut m, Vec2::zero(), &config), MagnetOutcome::OutOfRange);
    }
}
