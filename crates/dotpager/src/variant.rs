//! Indicator variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The visual style of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Dots that stretch into a dash when active.
    #[default]
    #[serde(alias = "dash")]
    Morse,
    /// Dots that grow when active.
    #[serde(alias = "bead")]
    Beads,
    /// Segments with a highlight sliding along them.
    Train,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Morse, Variant::Beads, Variant::Train];

    /// The lowercase name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Morse => "morse",
            Variant::Beads => "beads",
            Variant::Train => "train",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator variant '{0}' (expected morse, beads, or train)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morse" | "dash" => Ok(Variant::Morse),
            "beads" | "bead" => Ok(Variant::Beads),
            "train" => Ok(Variant::Train),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("morse".parse(), Ok(Variant::Morse));
        assert_eq!("Dash".parse(), Ok(Variant::Morse));
        assert_eq!("bead".parse(), Ok(Variant::Beads));
        assert_eq!(" train ".parse(), Ok(Variant::Train));
        assert!("zigzag".parse::<Variant>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }
}
