use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// Colours continuous escape counts with one of the fixed schemes.
///
/// Counts at or above `max_iterations` are interior points and come out
/// black without consulting the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeColourMap {
    kind: ColourSchemeKind,
    max_iterations: u32,
}

impl ColourMap<f64> for EscapeColourMap {
    type Failure = ColourMapError;

    fn map(&self, count: f64) -> Result<Colour, Self::Failure> {
        if !count.is_finite() || count < 0.0 {
            return Err(ColourMapError::CountOutOfRange {
                count,
                max_iterations: self.max_iterations,
            });
        }

        let t = count / f64::from(self.max_iterations);

        if t >= 1.0 {
            return Ok(Colour::BLACK);
        }

        Ok(self.kind.colour_at(t))
    }
}

impl EscapeColourMap {
    #[must_use]
    pub fn new(kind: ColourSchemeKind, max_iterations: u32) -> Self {
        Self {
            kind,
            max_iterations,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ColourSchemeKind {
        self.kind
    }
}
