use crate::core::colour_mapping::transfer;
use crate::core::data::colour::Colour;
use crate::core::errors::SelectorError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKind {
    #[default]
    Hot,
    Cool,
    Rainbow,
    Monochrome,
    Electric,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[
        Self::Hot,
        Self::Cool,
        Self::Rainbow,
        Self::Monochrome,
        Self::Electric,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Cool => "Cool",
            Self::Rainbow => "Rainbow",
            Self::Monochrome => "Monochrome",
            Self::Electric => "Electric",
        }
    }

    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cool => "cool",
            Self::Rainbow => "rainbow",
            Self::Monochrome => "monochrome",
            Self::Electric => "electric",
        }
    }

    /// Colour for a normalised escape value `t` in `[0, 1)`.
    #[must_use]
    pub fn colour_at(self, t: f64) -> Colour {
        match self {
            Self::Hot => transfer::hot(t),
            Self::Cool => transfer::cool(t),
            Self::Rainbow => transfer::rainbow(t),
            Self::Monochrome => transfer::monochrome(t),
            Self::Electric => transfer::electric(t),
        }
    }
}

impl FromStr for ColourSchemeKind {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| SelectorError::UnknownColourScheme(s.to_string()))
    }
}

impl fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourSchemeKind::ALL.first(),
            Some(&ColourSchemeKind::default())
        );
    }

    #[test]
    fn selectors_round_trip() {
        for &kind in ColourSchemeKind::ALL {
            assert_eq!(kind.selector().parse::<ColourSchemeKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert_eq!(
            "sepia".parse::<ColourSchemeKind>(),
            Err(SelectorError::UnknownColourScheme("sepia".to_string()))
        );
    }

    #[test]
    fn schemes_produce_distinct_palettes() {
        for t in [0.25, 0.5, 0.75] {
            for (i, a) in ColourSchemeKind::ALL.iter().enumerate() {
                for b in &ColourSchemeKind::ALL[i + 1..] {
                    assert_ne!(a.colour_at(t), b.colour_at(t), "{} and {} at {}", a, b, t);
                }
            }
        }
    }

    #[test]
    fn dispatch_matches_transfer_functions() {
        assert_eq!(ColourSchemeKind::Hot.colour_at(0.4), transfer::hot(0.4));
        assert_eq!(ColourSchemeKind::Cool.colour_at(0.4), transfer::cool(0.4));
        assert_eq!(ColourSchemeKind::Rainbow.colour_at(0.4), transfer::rainbow(0.4));
        assert_eq!(
            ColourSchemeKind::Monochrome.colour_at(0.4),
            transfer::monochrome(0.4)
        );
        assert_eq!(
            ColourSchemeKind::Electric.colour_at(0.4),
            transfer::electric(0.4)
        );
    }
}
