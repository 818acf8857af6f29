pub mod errors;
pub mod kinds;
pub mod map;
pub mod transfer;
