pub mod bounds;
pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod view;
