use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (P6) PPM: header, then RGB triples.
pub fn encode_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let canvas = buffer.canvas();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", canvas.width(), canvas.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&buffer.rgb_bytes().collect::<Vec<u8>>())?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        encode_ppm(buffer, BufWriter::new(File::create(filepath)?))?;
        info!("wrote {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn encode_writes_header_then_rgb_without_alpha() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 1).unwrap());
        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 4, g: 5, b: 6 })
            .unwrap();

        let mut out = Vec::new();
        encode_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(out, expected);
    }

    #[test]
    fn present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("ppm-presenter-{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(CanvasSize::new(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);

        fs::remove_dir_all(&dir).unwrap();
    }
}
