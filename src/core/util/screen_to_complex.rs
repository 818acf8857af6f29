use crate::core::data::bounds::Bounds;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::view::View;

/// Maps a screen position to the complex plane under `view`.
///
/// Positions outside the canvas are not clamped; they extrapolate linearly,
/// which is what the pan and zoom arithmetic relies on.
#[must_use]
pub fn screen_to_complex(x: f64, y: f64, view: &View, canvas: CanvasSize) -> Complex {
    screen_to_complex_in_bounds(x, y, Bounds::from_view(view, canvas), canvas)
}

/// Same mapping against bounds that were already derived for the frame.
#[must_use]
pub fn screen_to_complex_in_bounds(x: f64, y: f64, bounds: Bounds, canvas: CanvasSize) -> Complex {
    let real = bounds.x_min() + (x / f64::from(canvas.width())) * bounds.width();
    let imag = bounds.y_min() + (y / f64::from(canvas.height())) * bounds.height();

    Complex { real, imag }
}
