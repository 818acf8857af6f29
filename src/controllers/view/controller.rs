use crate::core::actions::generate_raster::render_settings::RenderSettings;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::bounds::Bounds;
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::complex::Complex;
use crate::core::data::view::{DEFAULT_JULIA_PARAMETER, JuliaParameter, View};
use crate::core::errors::ParameterError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::screen_to_complex::screen_to_complex;
use log::{debug, warn};

/// Owns the view, the Julia constant and the canvas size.
///
/// Every operation only updates state; rendering is left to the caller.
/// Failed operations leave the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    view: View,
    julia: JuliaParameter,
    canvas: CanvasSize,
}

impl ViewController {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self::with_view(View::default(), DEFAULT_JULIA_PARAMETER, canvas)
    }

    #[must_use]
    pub fn with_view(view: View, julia: JuliaParameter, canvas: CanvasSize) -> Self {
        Self {
            view,
            julia,
            canvas,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn julia(&self) -> JuliaParameter {
        self.julia
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_view(&self.view, self.canvas)
    }

    /// Complex point currently under the given screen position.
    #[must_use]
    pub fn point_at(&self, pixel_x: f64, pixel_y: f64) -> Complex {
        screen_to_complex(pixel_x, pixel_y, &self.view, self.canvas)
    }

    /// Recenters on the point under the pixel and multiplies zoom by `factor`.
    pub fn zoom_in(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) -> Result<(), ParameterError> {
        validate_factor(factor)?;
        self.zoom_about(pixel_x, pixel_y, self.view.zoom() * factor)
    }

    /// Recenters on the point under the pixel and divides zoom by `factor`.
    pub fn zoom_out(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) -> Result<(), ParameterError> {
        validate_factor(factor)?;
        self.zoom_about(pixel_x, pixel_y, self.view.zoom() / factor)
    }

    /// Shifts the view opposite to a drag of `(delta_x, delta_y)` pixels.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) -> Result<(), ParameterError> {
        if !(delta_x.is_finite() && delta_y.is_finite()) {
            warn!("rejected pan by ({}, {})", delta_x, delta_y);
            return Err(ParameterError::NonFinitePanDelta {
                dx: delta_x,
                dy: delta_y,
            });
        }

        let bounds = self.bounds();
        let center = self.view.center();

        self.view.set_center(Complex {
            real: center.real - (delta_x / f64::from(self.canvas.width())) * bounds.width(),
            imag: center.imag - (delta_y / f64::from(self.canvas.height())) * bounds.height(),
        });

        debug!("panned to {:?}", self.view.center());
        Ok(())
    }

    /// Back to the default center and zoom; the iteration cap is kept.
    pub fn reset_view(&mut self) {
        self.view.reset();
        debug!("view reset");
    }

    pub fn set_julia_params(&mut self, real: f64, imag: f64) {
        self.julia = Complex { real, imag };
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ParameterError> {
        self.view.set_max_iterations(max_iterations).inspect_err(|err| {
            warn!("{}", err);
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasSizeError> {
        self.canvas = CanvasSize::new(width, height)?;
        Ok(())
    }

    /// Value copy of the current state for one generation.
    #[must_use]
    pub fn snapshot(&self, fractal: FractalKind, colour_scheme: ColourSchemeKind) -> RenderSettings {
        RenderSettings {
            fractal,
            colour_scheme,
            view: self.view,
            julia: self.julia,
            canvas: self.canvas,
        }
    }

    fn zoom_about(&mut self, pixel_x: f64, pixel_y: f64, zoom: f64) -> Result<(), ParameterError> {
        let target = self.point_at(pixel_x, pixel_y);

        // zoom first so a rejected value leaves the center alone too
        self.view.set_zoom(zoom).inspect_err(|err| {
            warn!("{}", err);
        })?;
        self.view.set_center(target);

        debug!("zoom {} centered on {:?}", zoom, target);
        Ok(())
    }
}

fn validate_factor(factor: f64) -> Result<(), ParameterError> {
    if !(factor > 0.0 && factor.is_finite()) {
        warn!("rejected zoom factor {}", factor);
        return Err(ParameterError::NonPositiveZoomFactor(factor));
    }

    Ok(())
}
