use crate::controllers::cli::args::{ArgError, parse_value, validate_positive_integer};
use crate::presenters::ascii::ascii_frame::{AsciiFrame, AsciiFrameError};
use clap::{App, Arg, ArgMatches};
use std::error::Error;
use std::fmt;

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const MAX_ITER: &str = "max-iter";

#[derive(Debug, Clone, PartialEq)]
pub enum AsciiConfigError {
    Arg(ArgError),
    Frame(AsciiFrameError),
}

impl fmt::Display for AsciiConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arg(err) => write!(f, "{}", err),
            Self::Frame(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AsciiConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arg(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<ArgError> for AsciiConfigError {
    fn from(err: ArgError) -> Self {
        Self::Arg(err)
    }
}

impl From<AsciiFrameError> for AsciiConfigError {
    fn from(err: AsciiFrameError) -> Self {
        Self::Frame(err)
    }
}

pub fn ascii_frame_from_matches(matches: &ArgMatches) -> Result<AsciiFrame, AsciiConfigError> {
    Ok(AsciiFrame::new(
        parse_value(matches, WIDTH)?,
        parse_value(matches, HEIGHT)?,
        parse_value(matches, MAX_ITER)?,
    )?)
}

pub fn ascii_app<'a, 'b>() -> App<'a, 'b> {
    App::new("ascii-mandelbrot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("ASCII Mandelbrot generator")
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .takes_value(true)
                .default_value("80")
                .validator(validate_positive_integer)
                .help("Output width in characters"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .takes_value(true)
                .default_value("40")
                .validator(validate_positive_integer)
                .help("Output height in characters"),
        )
        .arg(
            Arg::with_name(MAX_ITER)
                .long(MAX_ITER)
                .takes_value(true)
                .default_value("30")
                .validator(validate_positive_integer)
                .help("Maximum number of iterations"),
        )
}
