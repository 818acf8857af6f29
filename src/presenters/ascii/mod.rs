pub mod ascii_frame;
