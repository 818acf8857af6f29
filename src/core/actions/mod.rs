pub mod generate_fractal;
pub mod generate_raster;
