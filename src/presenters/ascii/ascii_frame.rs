use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::bounds::{Bounds, BoundsError};
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::complex::Complex;
use crate::core::errors::ParameterError;
use std::error::Error;
use std::fmt;

/// Glyphs from empty to dense; index 0 is a space.
pub const GLYPH_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/*tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

pub const DEFAULT_ASCII_WIDTH: u32 = 80;
pub const DEFAULT_ASCII_HEIGHT: u32 = 40;
pub const DEFAULT_ASCII_ITERATIONS: u32 = 30;

const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub enum AsciiFrameError {
    CanvasSize(CanvasSizeError),
    Bounds(BoundsError),
    Parameter(ParameterError),
}

impl fmt::Display for AsciiFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasSize(err) => write!(f, "invalid frame size: {}", err),
            Self::Bounds(err) => write!(f, "invalid frame bounds: {}", err),
            Self::Parameter(err) => write!(f, "invalid parameter: {}", err),
        }
    }
}

impl Error for AsciiFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CanvasSize(err) => Some(err),
            Self::Bounds(err) => Some(err),
            Self::Parameter(err) => Some(err),
        }
    }
}

impl From<CanvasSizeError> for AsciiFrameError {
    fn from(err: CanvasSizeError) -> Self {
        Self::CanvasSize(err)
    }
}

impl From<BoundsError> for AsciiFrameError {
    fn from(err: BoundsError) -> Self {
        Self::Bounds(err)
    }
}

impl From<ParameterError> for AsciiFrameError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

/// A text-mode Mandelbrot frame over fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsciiFrame {
    canvas: CanvasSize,
    bounds: Bounds,
    max_iterations: u32,
}

impl AsciiFrame {
    /// Frame over real `[-2, 1]` and imaginary `[-1, 1]`.
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, AsciiFrameError> {
        let bounds = Bounds::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0))?;

        Self::with_bounds(width, height, max_iterations, bounds)
    }

    pub fn with_bounds(
        width: u32,
        height: u32,
        max_iterations: u32,
        bounds: Bounds,
    ) -> Result<Self, AsciiFrameError> {
        let canvas = CanvasSize::new(width, height)?;

        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations.into());
        }

        Ok(Self {
            canvas,
            bounds,
            max_iterations,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Rows joined by `\n`, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let glyphs: Vec<char> = GLYPH_RAMP.chars().collect();
        let counts = generate_fractal(
            self.canvas,
            self.bounds,
            &InclusiveEscapeCount {
                max_iterations: self.max_iterations,
            },
        );
        let max_iterations = self.max_iterations;

        counts
            .chunks(self.canvas.width() as usize)
            .map(|row| {
                row.iter()
                    .map(|&count| glyphs[glyph_index(count, max_iterations, glyphs.len())])
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Whole Mandelbrot escape counts. Unlike the shared evaluator, an iterate
// sitting exactly on |z| = 2 keeps going, so c = -2 stays in the set.
struct InclusiveEscapeCount {
    max_iterations: u32,
}

impl FractalAlgorithm for InclusiveEscapeCount {
    type Success = u32;

    fn compute(&self, point: Complex) -> Self::Success {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while iterations < self.max_iterations && z.real.hypot(z.imag) <= ESCAPE_RADIUS {
            z = z * z + point;
            iterations += 1;
        }

        iterations
    }
}

fn glyph_index(count: u32, max_iterations: u32, glyph_count: usize) -> usize {
    let scaled = f64::from(count) / f64::from(max_iterations) * (glyph_count - 1) as f64;

    (scaled as usize).min(glyph_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_seventy_one_glyphs() {
        assert_eq!(GLYPH_RAMP.chars().count(), 71);
        assert!(GLYPH_RAMP.starts_with(' '));
        assert!(GLYPH_RAMP.ends_with('$'));
    }

    #[test]
    fn zero_sizes_and_iterations_are_rejected() {
        assert!(matches!(
            AsciiFrame::new(0, 40, 30),
            Err(AsciiFrameError::CanvasSize(_))
        ));
        assert!(matches!(
            AsciiFrame::new(80, 0, 30),
            Err(AsciiFrameError::CanvasSize(_))
        ));
        assert_eq!(
            AsciiFrame::new(80, 40, 0),
            Err(AsciiFrameError::Parameter(ParameterError::ZeroMaxIterations))
        );
    }

    #[test]
    fn glyph_index_spans_the_ramp() {
        assert_eq!(glyph_index(0, 30, 71), 0);
        assert_eq!(glyph_index(15, 30, 71), 35);
        assert_eq!(glyph_index(30, 30, 71), 70);
        assert_eq!(glyph_index(1, 30, 71), 2);
    }

    #[test]
    fn small_frame_matches_known_output() {
        let frame = AsciiFrame::new(10, 5, 20).unwrap();

        assert_eq!(
            frame.render(),
            "`:lll<1<l:\n`ll<_$$$wl\n`<[$w$$$$l\n`<[$w$$$$l\n`ll<_$$$wl"
        );
    }

    #[test]
    fn iterates_landing_on_the_escape_radius_stay_inside() {
        let count = InclusiveEscapeCount { max_iterations: 30 };

        assert_eq!(count.compute(Complex::new(-2.0, 0.0)), 30);
        assert_eq!(count.compute(Complex::new(0.0, 0.0)), 30);
        assert_eq!(count.compute(Complex::new(0.5, 0.5)), 5);
        assert_eq!(count.compute(Complex::new(3.0, 0.0)), 1);
    }

    #[test]
    fn default_frame_has_expected_shape() {
        let text = AsciiFrame::new(
            DEFAULT_ASCII_WIDTH,
            DEFAULT_ASCII_HEIGHT,
            DEFAULT_ASCII_ITERATIONS,
        )
        .unwrap()
        .render();

        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), 40);
        assert!(rows.iter().all(|row| row.chars().count() == 80));
        assert!(!text.ends_with('\n'));
        // row 20 is the real axis; (-0.5, 0) sits inside the set
        assert_eq!(rows[20].chars().nth(40), Some('$'));
        // and its left edge is c = -2, which never leaves the radius
        assert_eq!(rows[20].chars().next(), Some('$'));
    }
}
