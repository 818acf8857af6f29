use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        canvas: CanvasSize,
    },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    pixel.x,
                    pixel.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA bytes for a whole canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A fully transparent black buffer.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    pub fn from_data(canvas: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// RGBA bytes of one pixel, `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        if !self.canvas.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Some(rgba)
    }

    /// Writes an opaque pixel.
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.canvas.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                canvas: self.canvas,
            });
        }

        let index = self.index_of(pixel);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = u8::MAX;

        Ok(())
    }

    /// RGB triples with the alpha channel dropped.
    pub fn rgb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|rgba| rgba[..3].iter().copied())
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.canvas.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL
    }
}
