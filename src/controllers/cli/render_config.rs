use crate::controllers::cli::args::{
    ArgError, complex_value, parse_value, validate_complex, validate_positive_float,
    validate_positive_integer, value_of,
};
use crate::core::actions::generate_raster::errors::GenerateRasterError;
use crate::core::actions::generate_raster::render_settings::RenderSettings;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::view::View;
use crate::core::errors::ParameterError;
use crate::core::fractals::fractal_kinds::FractalKind;
use clap::{App, Arg, ArgMatches};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

const FRACTAL: &str = "fractal";
const COLOURS: &str = "colours";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const ITERATIONS: &str = "iterations";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const JULIA: &str = "julia";
const OUTPUT: &str = "output";

#[derive(Debug, Clone, PartialEq)]
pub enum RenderConfigError {
    Arg(ArgError),
    Parameter(ParameterError),
    Settings(GenerateRasterError),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arg(err) => write!(f, "{}", err),
            Self::Parameter(err) => write!(f, "{}", err),
            Self::Settings(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arg(err) => Some(err),
            Self::Parameter(err) => Some(err),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<ArgError> for RenderConfigError {
    fn from(err: ArgError) -> Self {
        Self::Arg(err)
    }
}

impl From<ParameterError> for RenderConfigError {
    fn from(err: ParameterError) -> Self {
        Self::Parameter(err)
    }
}

impl From<GenerateRasterError> for RenderConfigError {
    fn from(err: GenerateRasterError) -> Self {
        Self::Settings(err)
    }
}

/// One still frame and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub settings: RenderSettings,
    pub output: PathBuf,
}

impl RenderConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, RenderConfigError> {
        let view = View::new(
            complex_value(matches, CENTER)?,
            parse_value(matches, ZOOM)?,
            parse_value(matches, ITERATIONS)?,
        )?;

        let settings = RenderSettings::from_selectors(
            value_of(matches, FRACTAL)?,
            value_of(matches, COLOURS)?,
            view,
            complex_value(matches, JULIA)?,
            parse_value(matches, WIDTH)?,
            parse_value(matches, HEIGHT)?,
        )?;

        Ok(Self {
            settings,
            output: PathBuf::from(value_of(matches, OUTPUT)?),
        })
    }
}

fn validate_fractal(s: String) -> Result<(), String> {
    s.parse::<FractalKind>().map(|_| ()).map_err(|err| err.to_string())
}

fn validate_colours(s: String) -> Result<(), String> {
    s.parse::<ColourSchemeKind>()
        .map(|_| ())
        .map_err(|err| err.to_string())
}

pub fn render_app<'a, 'b>() -> App<'a, 'b> {
    App::new("escape-time-explorer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders one escape-time fractal frame to a PPM file")
        .arg(
            Arg::with_name(FRACTAL)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrot")
                .validator(validate_fractal)
                .help("mandelbrot, julia, burning-ship or tricorn"),
        )
        .arg(
            Arg::with_name(COLOURS)
                .long(COLOURS)
                .short("c")
                .takes_value(true)
                .default_value("hot")
                .validator(validate_colours)
                .help("hot, cool, rainbow, monochrome or electric"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .takes_value(true)
                .default_value("800")
                .validator(validate_positive_integer)
                .help("Image width in pixels"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .takes_value(true)
                .default_value("600")
                .validator(validate_positive_integer)
                .help("Image height in pixels"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(validate_positive_integer)
                .help("Iteration cap"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0")
                .validator(validate_complex)
                .help("View center as re,im"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1")
                .validator(validate_positive_float)
                .help("Zoom level; 1 shows an imaginary span of 3"),
        )
        .arg(
            Arg::with_name(JULIA)
                .long(JULIA)
                .short("j")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.7,0.27015")
                .validator(validate_complex)
                .help("Julia constant as re,im"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("output/fractal.ppm")
                .help("Output file"),
        )
}
