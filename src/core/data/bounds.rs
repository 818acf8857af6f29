use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::view::{View, WORLD_HEIGHT};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundsError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "bounds size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for BoundsError {}

/// Visible rectangle of the complex plane.
///
/// `y_min` is the imaginary value of the top pixel row, so the imaginary
/// axis grows downwards on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, BoundsError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // also rejects NaN
        if !(width > 0.0 && height > 0.0) {
            return Err(BoundsError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min: top_left.real,
            x_max: bottom_right.real,
            y_min: top_left.imag,
            y_max: bottom_right.imag,
        })
    }

    /// Bounds of `view` on a canvas of the given size. The imaginary span is
    /// always `WORLD_HEIGHT / zoom`; the real span follows the aspect ratio.
    #[must_use]
    pub fn from_view(view: &View, canvas: CanvasSize) -> Self {
        let range = WORLD_HEIGHT / view.zoom();
        let half_width = range * canvas.aspect_ratio() / 2.0;
        let half_height = range / 2.0;
        let center = view.center();

        Self {
            x_min: center.real - half_width,
            x_max: center.real + half_width,
            y_min: center.imag - half_height,
            y_max: center.imag + half_height,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
