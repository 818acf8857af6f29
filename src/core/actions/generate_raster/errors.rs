use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::canvas_size::CanvasSizeError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::errors::{ParameterError, SelectorError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateRasterError {
    Selector(SelectorError),
    Parameter(ParameterError),
    CanvasSize(CanvasSizeError),
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
    Incomplete { rows_completed: u32, height: u32 },
}

impl fmt::Display for GenerateRasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(err) => write!(f, "invalid selector: {}", err),
            Self::Parameter(err) => write!(f, "invalid parameter: {}", err),
            Self::CanvasSize(err) => write!(f, "invalid canvas: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Incomplete {
                rows_completed,
                height,
            } => write!(
                f,
                "raster incomplete: {} of {} rows written",
                rows_completed, height
            ),
        }
    }
}

impl Error for GenerateRasterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Selector(err) => Some(err),
            Self::Parameter(err) => Some(err),
            Self::CanvasSize(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Incomplete { .. } => None,
        }
    }
}

impl From<SelectorError> for GenerateRasterError {
    fn from(err: SelectorError) -> Self {
        Self::Selector(err)
    }
}

impl From<ParameterError> for GenerateRasterError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

impl From<CanvasSizeError> for GenerateRasterError {
    fn from(err: CanvasSizeError) -> Self {
        Self::CanvasSize(err)
    }
}

impl From<ColourMapError> for GenerateRasterError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GenerateRasterError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
