use crate::core::data::complex::Complex;
use crate::core::data::view::JuliaParameter;

pub const SWEEP_RADIUS: f64 = 0.7885;
/// Radians added per tick.
pub const SWEEP_STEP: f64 = 0.02;

/// Walks the Julia constant around a circle of radius [`SWEEP_RADIUS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JuliaSweep {
    angle: f64,
    running: bool,
}

impl JuliaSweep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `false` if the sweep was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.running = true;
        true
    }

    /// Returns `false` if the sweep was not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Steps the angle and returns the constant for the new position.
    pub fn advance(&mut self) -> JuliaParameter {
        self.angle += SWEEP_STEP;
        Complex::from_polar(SWEEP_RADIUS, self.angle)
    }
}
