use crate::core::data::complex::Complex;
use crate::core::errors::ParameterError;

/// Height of the visible imaginary span at zoom 1.
pub const WORLD_HEIGHT: f64 = 3.0;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_JULIA_PARAMETER: JuliaParameter = Complex::new(-0.7, 0.27015);

/// The fixed additive constant of the Julia iteration.
pub type JuliaParameter = Complex;

/// Camera state over the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl View {
    pub fn new(center: Complex, zoom: f64, max_iterations: u32) -> Result<Self, ParameterError> {
        validate_zoom(zoom)?;

        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations);
        }

        Ok(Self {
            center,
            zoom,
            max_iterations,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub(crate) fn set_center(&mut self, center: Complex) {
        self.center = center;
    }

    pub(crate) fn set_zoom(&mut self, zoom: f64) -> Result<(), ParameterError> {
        validate_zoom(zoom)?;

        self.zoom = zoom;
        Ok(())
    }

    pub(crate) fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ParameterError> {
        if max_iterations == 0 {
            return Err(ParameterError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    /// Restores center and zoom; the iteration cap is kept.
    pub(crate) fn reset(&mut self) {
        self.center = DEFAULT_CENTER;
        self.zoom = DEFAULT_ZOOM;
    }
}

fn validate_zoom(zoom: f64) -> Result<(), ParameterError> {
    if !(zoom > 0.0 && zoom.is_finite()) {
        return Err(ParameterError::NonPositiveZoom(zoom));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = View::default();

        assert_eq!(view.center(), Complex::new(-0.5, 0.0));
        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_new_rejects_non_positive_zoom() {
        assert_eq!(
            View::new(Complex::ZERO, 0.0, 10),
            Err(ParameterError::NonPositiveZoom(0.0))
        );
        assert_eq!(
            View::new(Complex::ZERO, -1.0, 10),
            Err(ParameterError::NonPositiveZoom(-1.0))
        );
        assert!(View::new(Complex::ZERO, f64::INFINITY, 10).is_err());
        assert!(View::new(Complex::ZERO, f64::NAN, 10).is_err());
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            View::new(Complex::ZERO, 1.0, 0),
            Err(ParameterError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_set_zoom_failure_leaves_view_unchanged() {
        let mut view = View::default();

        assert!(view.set_zoom(-3.0).is_err());
        assert_eq!(view.zoom(), 1.0);
    }

    #[test]
    fn test_reset_keeps_iteration_cap() {
        let mut view = View::new(Complex::new(0.3, 0.4), 12.0, 500).unwrap();

        view.reset();

        assert_eq!(view.center(), DEFAULT_CENTER);
        assert_eq!(view.zoom(), DEFAULT_ZOOM);
        assert_eq!(view.max_iterations(), 500);
    }
}
