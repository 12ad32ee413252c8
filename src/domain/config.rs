use serde::{Deserialize, Serialize};

/// How frame time feeds the integrator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepMode {
    /// One step per frame with per-frame constants, whatever the refresh rate
    #[default]
    PerFrame,
    /// Gravity, displacement, spin and friction scaled by elapsed time
    /// relative to `reference_hz`
    Scaled,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid physics config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` must be a finite number")]
    NotFinite(&'static str),
    #[error("`{field}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("radii must satisfy snapRadius <= captureRadius <= magneticRadius (got {snap}, {capture}, {magnetic})")]
    RadiusOrder { snap: f64, capture: f64, magnetic: f64 },
}

/// Tunables for the logo widget.
///
/// Velocities are in pixels per frame and accelerations in pixels per
/// frame squared: the values are tuned for a ~60 Hz display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub bounce_restitution: f64,
    pub friction: f64,
    pub magnetic_radius: f64,
    pub magnetic_strength: f64,
    /// Inside this distance the magnet replaces the velocity instead of adding to it
    pub capture_radius: f64,
    pub capture_gain: f64,
    pub snap_radius: f64,
    /// Edge length of the (square) widget; the collision margin is half of it
    pub widget_size: f64,
    /// Simulation stops once speed drops to this
    pub rest_speed: f64,
    /// Weight of the previous velocity when blending in a drag delta
    pub drag_smoothing: f64,
    pub spin_factor: f64,
    pub spin_damping: f64,
    pub transform_epsilon: f64,
    pub snap_cue_ms: u32,
    pub step_mode: StepMode,
    pub reference_hz: f64,
    pub verbose: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            bounce_restitution: 0.68,
            friction: 0.995,
            magnetic_radius: 80.0,
            magnetic_strength: 0.3,
            capture_radius: 30.0,
            capture_gain: 3.0,
            snap_radius: 10.0,
            widget_size: 48.0,
            rest_speed: 0.05,
            drag_smoothing: 0.5,
            spin_factor: 2.0,
            spin_damping: 0.98,
            transform_epsilon: 0.1,
            snap_cue_ms: 300,
            step_mode: StepMode::PerFrame,
            reference_hz: 60.0,
            verbose: false,
        }
    }
}

impl PhysicsConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Collision margin: distance from the widget center to its edge
    pub fn margin(&self) -> f64 {
        self.widget_size / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("bounceRestitution", self.bounce_restitution),
            ("friction", self.friction),
            ("magneticRadius", self.magnetic_radius),
            ("magneticStrength", self.magnetic_strength),
            ("captureRadius", self.capture_radius),
            ("captureGain", self.capture_gain),
            ("snapRadius", self.snap_radius),
            ("widgetSize", self.widget_size),
            ("restSpeed", self.rest_speed),
            ("dragSmoothing", self.drag_smoothing),
            ("spinFactor", self.spin_factor),
            ("spinDamping", self.spin_damping),
            ("transformEpsilon", self.transform_epsilon),
            ("referenceHz", self.reference_hz),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(field));
            }
        }

        check_range("bounceRestitution", self.bounce_restitution, 0.0, 1.0)?;
        check_range("friction", self.friction, 0.0, 1.0)?;
        check_range("dragSmoothing", self.drag_smoothing, 0.0, 1.0)?;
        check_range("spinDamping", self.spin_damping, 0.0, 1.0)?;
        check_range("widgetSize", self.widget_size, f64::MIN_POSITIVE, f64::MAX)?;
        check_range("referenceHz", self.reference_hz, 1.0, 1000.0)?;
        check_range("restSpeed", self.rest_speed, 0.0, f64::MAX)?;
        check_range("snapRadius", self.snap_radius, 0.0, f64::MAX)?;

        if self.snap_radius > self.capture_radius || self.capture_radius > self.magnetic_radius {
            return Err(ConfigError::RadiusOrder {
                snap: self.snap_radius,
                capture: self.capture_radius,
                magnetic: self.magnetic_radius,
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { field, value, min, max });
    }
    Ok(())
}
