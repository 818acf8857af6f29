use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;
}
