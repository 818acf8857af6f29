use std::error::Error;
use std::fmt;

/// A failed generation, reported through the presenter port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_generation() {
        let err = RenderError {
            generation: 7,
            message: "batch size must be at least one row".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "generation 7 failed: batch size must be at least one row"
        );
    }
}
