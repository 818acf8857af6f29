use std::error::Error;
use std::fmt;

/// A selector string that names no known fractal or colour scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    UnknownFractal(String),
    UnknownColourScheme(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFractal(name) => write!(f, "unknown fractal type '{}'", name),
            Self::UnknownColourScheme(name) => write!(f, "unknown colour scheme '{}'", name),
        }
    }
}

impl Error for SelectorError {}

/// A view or render parameter that would produce a degenerate view.
///
/// These are rejected rather than clamped; the state the operation was
/// applied to is left unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParameterError {
    NonPositiveZoom(f64),
    NonPositiveZoomFactor(f64),
    ZeroMaxIterations,
    ZeroBatchRows,
    NonFinitePanDelta { dx: f64, dy: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom(zoom) => {
                write!(f, "zoom must be positive and finite, got {}", zoom)
            }
            Self::NonPositiveZoomFactor(factor) => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::ZeroBatchRows => write!(f, "row batch size must be greater than zero"),
            Self::NonFinitePanDelta { dx, dy } => {
                write!(f, "pan delta must be finite, got ({}, {})", dx, dy)
            }
        }
    }
}

impl Error for ParameterError {}
