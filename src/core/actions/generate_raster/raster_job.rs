use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_raster::errors::GenerateRasterError;
use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
use crate::core::actions::generate_raster::render_settings::RenderSettings;
use crate::core::colour_mapping::map::EscapeColourMap;
use crate::core::data::bounds::Bounds;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::errors::ParameterError;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::util::screen_to_complex::screen_to_complex_in_bounds;
use log::{debug, trace};

/// Rows rendered between two suspension points.
pub const DEFAULT_BATCH_ROWS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BatchOutcome {
    /// More rows remain; `progress` is the fraction of rows written so far.
    Pending { progress: f64 },
    /// Every row has been written.
    Complete,
}

/// A raster generation that advances one row batch per [`step`](Self::step).
///
/// The job owns its buffer until every row is written; only then can
/// [`into_buffer`](Self::into_buffer) hand it out.
#[derive(Debug)]
pub struct RasterJob {
    settings: RenderSettings,
    algorithm: EscapeTimeAlgorithm,
    colour_map: EscapeColourMap,
    bounds: Bounds,
    buffer: PixelBuffer,
    next_row: u32,
    batch_rows: u32,
}

impl RasterJob {
    pub fn new(settings: RenderSettings) -> Result<Self, GenerateRasterError> {
        Self::with_batch_rows(settings, DEFAULT_BATCH_ROWS)
    }

    pub fn with_batch_rows(
        settings: RenderSettings,
        batch_rows: u32,
    ) -> Result<Self, GenerateRasterError> {
        if batch_rows == 0 {
            return Err(ParameterError::ZeroBatchRows.into());
        }

        let max_iterations = settings.view.max_iterations();
        let algorithm = EscapeTimeAlgorithm::new(settings.fractal, settings.julia, max_iterations)?;
        let colour_map = EscapeColourMap::new(settings.colour_scheme, max_iterations);

        debug!(
            "raster job: {} / {} at {}x{}, zoom {}, {} iterations",
            settings.fractal,
            settings.colour_scheme,
            settings.canvas.width(),
            settings.canvas.height(),
            settings.view.zoom(),
            max_iterations
        );

        Ok(Self {
            settings,
            algorithm,
            colour_map,
            bounds: settings.bounds(),
            buffer: PixelBuffer::new(settings.canvas),
            next_row: 0,
            batch_rows,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn rows_completed(&self) -> u32 {
        self.next_row
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(self.next_row) / f64::from(self.settings.canvas.height())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_row >= self.settings.canvas.height()
    }

    /// Renders the next batch of rows.
    pub fn step(&mut self) -> Result<BatchOutcome, GenerateRasterError> {
        let canvas = self.settings.canvas;
        let end_row = self
            .next_row
            .saturating_add(self.batch_rows)
            .min(canvas.height());

        for y in self.next_row..end_row {
            for x in 0..canvas.width() {
                let point =
                    screen_to_complex_in_bounds(f64::from(x), f64::from(y), self.bounds, canvas);
                let colour = self.colour_map.map(self.algorithm.compute(point))?;

                self.buffer.set_pixel(Point { x, y }, colour)?;
            }
        }

        trace!("rows {}..{} of {}", self.next_row, end_row, canvas.height());
        self.next_row = end_row;

        if self.is_complete() {
            Ok(BatchOutcome::Complete)
        } else {
            Ok(BatchOutcome::Pending {
                progress: self.progress(),
            })
        }
    }

    pub fn into_buffer(self) -> Result<PixelBuffer, GenerateRasterError> {
        if !self.is_complete() {
            return Err(GenerateRasterError::Incomplete {
                rows_completed: self.next_row,
                height: self.settings.canvas.height(),
            });
        }

        Ok(self.buffer)
    }
}

/// Drives a job to completion without yielding.
///
/// `on_progress` sees a strictly increasing fraction per batch, ending with
/// exactly `1.0`.
pub fn generate_raster(
    settings: RenderSettings,
    mut on_progress: impl FnMut(f64),
) -> Result<PixelBuffer, GenerateRasterError> {
    let mut job = RasterJob::new(settings)?;

    loop {
        match job.step()? {
            BatchOutcome::Pending { progress } => on_progress(progress),
            BatchOutcome::Complete => {
                on_progress(1.0);
                break;
            }
        }
    }

    job.into_buffer()
}
