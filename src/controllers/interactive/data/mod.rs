pub mod frame_data;
pub mod progress_data;
