use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapError {
    CountOutOfRange { count: f64, max_iterations: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange {
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "escape count {} outside of [0, {}]",
                    count, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}
