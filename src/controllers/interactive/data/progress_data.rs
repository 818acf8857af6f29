/// Fraction of rows written so far, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressData {
    pub generation: u64,
    pub fraction: f64,
}
