pub mod errors;
pub mod ports;
pub mod raster_job;
pub mod render_settings;
