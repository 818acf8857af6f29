use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_raster::errors::GenerateRasterError;
use crate::core::actions::generate_raster::raster_job::generate_raster;
use crate::core::actions::generate_raster::render_settings::RenderSettings;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Renders one frame to completion and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, settings: RenderSettings) -> Result<(), GenerateRasterError> {
        info!(
            "rendering {} with {} colours at {}x{}, {} iterations",
            settings.fractal,
            settings.colour_scheme,
            settings.canvas.width(),
            settings.canvas.height(),
            settings.view.max_iterations()
        );

        let start = Instant::now();
        let buffer = generate_raster(settings, |progress| {
            debug!("{:.0}% of rows", progress * 100.0);
        })?;

        info!("duration: {:?}", start.elapsed());
        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => self.presenter.present(buffer, filepath),
            None => {
                warn!("nothing rendered yet, {} not written", filepath.as_ref().display());
                Ok(())
            }
        }
    }
}
