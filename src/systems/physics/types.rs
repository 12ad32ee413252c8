use crate::core::Vec2;

/// Kinematic state the integrator works on
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    /// Widget center (viewport pixels)
    pub position: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    /// Degrees
    pub rotation: f64,
    /// Degrees per frame
    pub rotation_velocity: f64,
}

impl Motion {
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Drop all movement, keep the position
    pub fn halt(&mut self) {
        self.velocity = Vec2::zero();
        self.rotation = 0.0;
        self.rotation_velocity = 0.0;
    }
}

/// Viewport edge the widget bounced off
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Obstacle face the widget was pushed out through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
}

/// What the magnet did this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MagnetOutcome {
    /// Farther than the magnetic radius
    OutOfRange,
    /// Pull added to the current velocity
    Pulled,
    /// Velocity replaced by the pull
    Captured,
    /// Close enough to snap onto the rest position
    Snap,
}
