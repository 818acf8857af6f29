use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::bounds::Bounds;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::util::screen_to_complex::screen_to_complex_in_bounds;

/// Evaluates `algorithm` for every pixel of `canvas`, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    canvas: CanvasSize,
    bounds: Bounds,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    (0..canvas.height())
        .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .map(|(x, y)| {
            let point = screen_to_complex_in_bounds(f64::from(x), f64::from(y), bounds, canvas);
            algorithm.compute(point)
        })
        .collect()
}
