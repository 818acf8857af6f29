pub mod ascii;
pub mod file;
