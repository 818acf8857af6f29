pub mod screen_to_complex;
