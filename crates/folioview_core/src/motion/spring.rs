//! Spring smoothing for the progress signal.
//!
//! # Responsibility
//! - Filter the raw scroll fraction through a damped second-order spring so
//!   the displayed bar never jitters with individual scroll events.
//!
//! # Invariants
//! - The default constants are over-critically damped: a step input is
//!   tracked without sustained oscillation.
//! - Once settled, `value()` equals the target exactly.
//! - Stepping is stable for arbitrary non-negative `dt` (large frames are
//!   internally sub-stepped).

/// Default spring constants used for the navbar progress bar.
pub const DEFAULT_STIFFNESS: f64 = 140.0;
pub const DEFAULT_DAMPING: f64 = 24.0;
pub const DEFAULT_MASS: f64 = 0.4;

/// Displacement below which the spring snaps to its target.
const REST_DISPLACEMENT: f64 = 1e-4;
/// Speed below which the spring snaps to its target.
const REST_SPEED: f64 = 1e-4;
/// Largest integration step; longer frames are split.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

/// Tunable spring constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
        }
    }
}

impl SpringConfig {
    /// Damping ratio of the configured system; `1.0` is critical damping,
    /// larger values cannot overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Damped second-order integrator tracking a moving target.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Creates a spring at rest on `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Moves the tracking target without disturbing the current state.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    ///
    /// Semi-implicit Euler, sub-stepped so one long frame cannot destabilize
    /// the integration.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let accel = (self.config.stiffness * (self.target - self.value)
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.value).abs() <= REST_DISPLACEMENT
            && self.velocity.abs() <= REST_SPEED
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Current filtered value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current tracking target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the spring has snapped onto its target.
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Spring, SpringConfig};

    #[test]
    fn default_config_is_over_critically_damped() {
        assert!(SpringConfig::default().damping_ratio() > 1.0);
    }

    #[test]
    fn zero_or_negative_dt_is_a_no_op() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);

        assert_eq!(spring.step(0.0), 0.0);
        assert_eq!(spring.step(-0.1), 0.0);
        assert!(!spring.is_settled());
    }

    #[test]
    fn long_frame_matches_sub_stepped_stability() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);

        // One five-second frame must land settled, not diverge.
        let value = spring.step(5.0);
        assert_eq!(value, 1.0);
        assert!(spring.is_settled());
    }
}
