use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::equipment_error::EquipmentError;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateKind {
    #[default]
    Standard,
    Bumper,
    Magnet,
}

impl PlateKind {
    #[must_use]
    pub fn standard() -> Self {
        PlateKind::Standard
    }

    #[must_use]
    pub fn bumper() -> Self {
        PlateKind::Bumper
    }

    #[must_use]
    pub fn magnet() -> Self {
        PlateKind::Magnet
    }

    /// Label attached to loaded parts of this kind. Standard plates are unlabeled.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PlateKind::Standard => "",
            PlateKind::Bumper => "bumper",
            PlateKind::Magnet => "magnet",
        }
    }

    /// Magnets only ride along; a combination needs at least one plate that loads on its own.
    #[must_use]
    pub fn loads_alone(&self) -> bool {
        !matches!(self, PlateKind::Magnet)
    }
}

impl Display for PlateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlateKind::Standard => write!(f, "Standard"),
            PlateKind::Bumper => write!(f, "Bumper"),
            PlateKind::Magnet => write!(f, "Magnet"),
        }
    }
}

impl FromStr for PlateKind {
    type Err = EquipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "s" | "standard" => Ok(PlateKind::Standard),
            "b" | "bumper" => Ok(PlateKind::Bumper),
            "m" | "magnet" => Ok(PlateKind::Magnet),
            other => Err(EquipmentError::UnknownPlateKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(PlateKind::Standard.label(), "");
        assert_eq!(PlateKind::Bumper.label(), "bumper");
        assert_eq!(PlateKind::Magnet.label(), "magnet");
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("b".parse::<PlateKind>().unwrap(), PlateKind::Bumper);
        assert_eq!("Magnet".parse::<PlateKind>().unwrap(), PlateKind::Magnet);
        assert_eq!("".parse::<PlateKind>().unwrap(), PlateKind::Standard);
        assert!("iron".parse::<PlateKind>().is_err());
    }
}
