use crate::core::data::complex::Complex;
use clap::ArgMatches;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    Missing(&'static str),
    Invalid { arg: &'static str, value: String },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(arg) => write!(f, "missing value for --{}", arg),
            Self::Invalid { arg, value } => write!(f, "invalid value '{}' for --{}", value, arg),
        }
    }
}

impl Error for ArgError {}

/// Splits `"l<sep>r"` and parses both halves.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (left, right) = s.split_once(separator)?;

    match (left.trim().parse(), right.trim().parse()) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

/// Parses `"re,im"`.
pub fn parse_complex(s: &str) -> Option<Complex> {
    parse_pair::<f64>(s, ',')
        .filter(|(real, imag)| real.is_finite() && imag.is_finite())
        .map(|(real, imag)| Complex { real, imag })
}

pub fn validate_complex(s: String) -> Result<(), String> {
    parse_complex(&s)
        .map(|_| ())
        .ok_or_else(|| format!("could not parse '{}' as re,im", s))
}

/// Accepts integers greater than zero.
pub fn validate_positive_integer(s: String) -> Result<(), String> {
    match s.parse::<u32>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("could not parse '{}' as a whole number", s)),
    }
}

pub fn validate_positive_float(s: String) -> Result<(), String> {
    match s.parse::<f64>() {
        Ok(value) if value > 0.0 && value.is_finite() => Ok(()),
        Ok(_) => Err("must be positive and finite".to_string()),
        Err(_) => Err(format!("could not parse '{}' as a number", s)),
    }
}

pub fn value_of<'a>(matches: &'a ArgMatches, arg: &'static str) -> Result<&'a str, ArgError> {
    matches.value_of(arg).ok_or(ArgError::Missing(arg))
}

pub fn parse_value<T: FromStr>(matches: &ArgMatches, arg: &'static str) -> Result<T, ArgError> {
    let value = value_of(matches, arg)?;

    value.parse().map_err(|_| ArgError::Invalid {
        arg,
        value: value.to_string(),
    })
}

pub fn complex_value(matches: &ArgMatches, arg: &'static str) -> Result<Complex, ArgError> {
    let value = value_of(matches, arg)?;

    parse_complex(value).ok_or_else(|| ArgError::Invalid {
        arg,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_separator() {
        assert_eq!(parse_pair::<u32>("800x600", 'x'), Some((800, 600)));
        assert_eq!(parse_pair::<f64>("-0.5, 0.25", ','), Some((-0.5, 0.25)));
        assert_eq!(parse_pair::<u32>("800", 'x'), None);
        assert_eq!(parse_pair::<u32>("800xsix", 'x'), None);
    }

    #[test]
    fn parse_complex_rejects_non_finite_parts() {
        assert_eq!(parse_complex("-0.7,0.27015"), Some(Complex::new(-0.7, 0.27015)));
        assert_eq!(parse_complex("inf,0"), None);
        assert_eq!(parse_complex("NaN,1"), None);
    }

    #[test]
    fn positive_integer_validator() {
        assert!(validate_positive_integer("30".to_string()).is_ok());
        assert!(validate_positive_integer("0".to_string()).is_err());
        assert!(validate_positive_integer("-4".to_string()).is_err());
        assert!(validate_positive_integer("ten".to_string()).is_err());
    }

    #[test]
    fn positive_float_validator() {
        assert!(validate_positive_float("0.5".to_string()).is_ok());
        assert!(validate_positive_float("0".to_string()).is_err());
        assert!(validate_positive_float("inf".to_string()).is_err());
    }
}
