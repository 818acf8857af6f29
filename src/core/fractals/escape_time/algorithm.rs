use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::view::JuliaParameter;
use crate::core::errors::ParameterError;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::f64::consts::LN_2;

/// Squared escape radius.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluator shared by every fractal variant.
///
/// The variants differ only in the starting iterate and the step function;
/// the loop, the escape test and the smoothing are common.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKind,
    julia: JuliaParameter,
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = f64;

    fn compute(&self, point: Complex) -> Self::Success {
        self.continuous_count(point)
    }
}

impl EscapeTimeAlgorithm {
    /// `julia` is only read by [`FractalKind::Julia`].
    pub fn new(
        kind: FractalKind,
        julia: JuliaParameter,
        max_iterations: u32,
    ) -> Result<Self, ParameterError> {
        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations);
        }

        Ok(Self {
            kind,
            julia,
            max_iterations,
        })
    }

    pub fn mandelbrot(max_iterations: u32) -> Result<Self, ParameterError> {
        Self::new(FractalKind::Mandelbrot, Complex::ZERO, max_iterations)
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Whole number of steps taken before escape, `max_iterations` if the
    /// point never escaped.
    #[must_use]
    pub fn escape_count(&self, point: Complex) -> u32 {
        self.iterate(point).0
    }

    /// Smoothed iteration count in `[0, max_iterations]`.
    ///
    /// Exactly `max_iterations` marks an interior point; no smoothing is
    /// applied in that case.
    #[must_use]
    pub fn continuous_count(&self, point: Complex) -> f64 {
        let (iterations, z) = self.iterate(point);

        if iterations == self.max_iterations {
            return f64::from(self.max_iterations);
        }

        smooth(iterations, z)
    }

    fn iterate(&self, point: Complex) -> (u32, Complex) {
        let (mut z, c) = match self.kind {
            FractalKind::Julia => (point, self.julia),
            FractalKind::Mandelbrot | FractalKind::BurningShip | FractalKind::Tricorn => {
                (Complex::ZERO, point)
            }
        };

        let mut iterations = 0;

        while iterations < self.max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
            z = step(self.kind, z, c);
            iterations += 1;
        }

        (iterations, z)
    }
}

fn step(kind: FractalKind, z: Complex, c: Complex) -> Complex {
    let real = z.real * z.real - z.imag * z.imag + c.real;
    let cross = z.real * z.imag;

    match kind {
        FractalKind::Mandelbrot | FractalKind::Julia => z * z + c,
        FractalKind::BurningShip => Complex {
            real,
            imag: 2.0 * cross.abs() + c.imag,
        },
        FractalKind::Tricorn => Complex {
            real,
            imag: -2.0 * cross + c.imag,
        },
    }
}

// |z|² >= 4 at escape keeps both logarithm arguments at or above 1.
fn smooth(iterations: u32, z: Complex) -> f64 {
    let log_zn = z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;

    // very fast escapes smooth below zero; NaN also lands on 0 here
    (f64::from(iterations) + 1.0 - nu).max(0.0)
}
