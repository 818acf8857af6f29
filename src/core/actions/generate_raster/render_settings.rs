use crate::core::actions::generate_raster::errors::GenerateRasterError;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::bounds::Bounds;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view::{JuliaParameter, View};
use crate::core::fractals::fractal_kinds::FractalKind;

/// Everything one generation reads, copied by value when it starts so that
/// later view changes cannot leak into a frame in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub fractal: FractalKind,
    pub colour_scheme: ColourSchemeKind,
    pub view: View,
    pub julia: JuliaParameter,
    pub canvas: CanvasSize,
}

impl RenderSettings {
    /// Builds settings from the string selectors used at the render
    /// boundary. Unknown selectors fail here, before any pixel work.
    pub fn from_selectors(
        fractal: &str,
        colour_scheme: &str,
        view: View,
        julia: JuliaParameter,
        width: u32,
        height: u32,
    ) -> Result<Self, GenerateRasterError> {
        Ok(Self {
            fractal: fractal.parse()?,
            colour_scheme: colour_scheme.parse()?,
            view,
            julia,
            canvas: CanvasSize::new(width, height)?,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_view(&self.view, self.canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::errors::SelectorError;

    #[test]
    fn from_selectors_parses_known_names() {
        let settings = RenderSettings::from_selectors(
            "burning-ship",
            "electric",
            View::default(),
            Complex::ZERO,
            32,
            16,
        )
        .unwrap();

        assert_eq!(settings.fractal, FractalKind::BurningShip);
        assert_eq!(settings.colour_scheme, ColourSchemeKind::Electric);
        assert_eq!(settings.canvas, CanvasSize::new(32, 16).unwrap());
    }

    #[test]
    fn from_selectors_rejects_unknown_fractal() {
        let result = RenderSettings::from_selectors(
            "newton",
            "hot",
            View::default(),
            Complex::ZERO,
            32,
            16,
        );

        assert_eq!(
            result,
            Err(GenerateRasterError::Selector(SelectorError::UnknownFractal(
                "newton".to_string()
            )))
        );
    }

    #[test]
    fn from_selectors_rejects_unknown_colour_scheme() {
        let result = RenderSettings::from_selectors(
            "julia",
            "plasma",
            View::default(),
            Complex::ZERO,
            32,
            16,
        );

        assert_eq!(
            result,
            Err(GenerateRasterError::Selector(
                SelectorError::UnknownColourScheme("plasma".to_string())
            ))
        );
    }

    #[test]
    fn from_selectors_rejects_empty_canvas() {
        let result =
            RenderSettings::from_selectors("julia", "hot", View::default(), Complex::ZERO, 0, 16);

        assert!(matches!(result, Err(GenerateRasterError::CanvasSize(_))));
    }
}
