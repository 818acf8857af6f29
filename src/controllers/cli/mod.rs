pub mod args;
pub mod ascii;
pub mod render;
pub mod render_config;
