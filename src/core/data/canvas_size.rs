use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasSizeError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for CanvasSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "canvas {}x{} is too large to allocate", width, height)
            }
        }
    }
}

impl Error for CanvasSizeError {}

/// Pixel dimensions of the render target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width == 0 || height == 0 {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(CanvasSizeError::TooLarge { width, height })?;

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_new_valid() {
        let canvas = CanvasSize::new(80, 40).unwrap();

        assert_eq!(canvas.width(), 80);
        assert_eq!(canvas.height(), 40);
        assert_eq!(canvas.pixel_count(), 3200);
        assert_eq!(canvas.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_canvas_size_single_pixel_is_valid() {
        assert!(CanvasSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_canvas_size_dimensions_must_be_positive() {
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(CanvasSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            CanvasSize::new(10, 0),
            Err(CanvasSizeError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_canvas_size_rejects_sizes_whose_buffer_overflows() {
        assert_eq!(
            CanvasSize::new(u32::MAX, u32::MAX),
            Err(CanvasSizeError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_canvas_size_contains_point() {
        let canvas = CanvasSize::new(10, 5).unwrap();

        assert!(canvas.contains_point(Point { x: 0, y: 0 }));
        assert!(canvas.contains_point(Point { x: 9, y: 4 }));
        assert!(!canvas.contains_point(Point { x: 10, y: 4 }));
        assert!(!canvas.contains_point(Point { x: 9, y: 5 }));
    }
}
