mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::ascii::{AsciiConfigError, ascii_app, ascii_frame_from_matches};
pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::cli::render_config::{RenderConfig, RenderConfigError, render_app};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::progress_data::ProgressData;
pub use crate::controllers::interactive::errors::render_error::RenderError;
pub use crate::controllers::interactive::julia_sweep::{JuliaSweep, SWEEP_RADIUS, SWEEP_STEP};
pub use crate::controllers::interactive::task_queue::{Task, TaskQueue};
pub use crate::controllers::interactive::{InteractiveController, PresenterPort, RenderEvent};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::view::ViewController;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_raster::errors::GenerateRasterError;
pub use crate::core::actions::generate_raster::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_raster::raster_job::{
    BatchOutcome, DEFAULT_BATCH_ROWS, RasterJob, generate_raster,
};
pub use crate::core::actions::generate_raster::render_settings::RenderSettings;
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::colour_mapping::map::EscapeColourMap;
pub use crate::core::data::bounds::{Bounds, BoundsError};
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view::{
    DEFAULT_CENTER, DEFAULT_JULIA_PARAMETER, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM, JuliaParameter,
    View, WORLD_HEIGHT,
};
pub use crate::core::errors::{ParameterError, SelectorError};
pub use crate::core::fractals::escape_time::algorithm::{EscapeTimeAlgorithm, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::util::screen_to_complex::{screen_to_complex, screen_to_complex_in_bounds};
pub use crate::presenters::ascii::ascii_frame::{
    AsciiFrame, AsciiFrameError, DEFAULT_ASCII_HEIGHT, DEFAULT_ASCII_ITERATIONS,
    DEFAULT_ASCII_WIDTH, GLYPH_RAMP,
};
pub use crate::presenters::file::ppm::{PpmFilePresenter, encode_ppm};
