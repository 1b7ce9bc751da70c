use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::equipment_error::EquipmentError;

/// How plates go onto an apparatus: on one side, or mirrored on both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingMode {
    Single,
    #[default]
    Dual,
}

impl LoadingMode {
    #[must_use]
    pub fn single() -> Self {
        LoadingMode::Single
    }

    #[must_use]
    pub fn dual() -> Self {
        LoadingMode::Dual
    }

    /// Multiplier from the sum of selected plates to the loaded total.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match self {
            LoadingMode::Single => 1.0,
            LoadingMode::Dual => 2.0,
        }
    }

    /// How many selectable items `count` owned copies make. Dual loading needs a pair per item.
    #[must_use]
    pub fn usable(&self, count: u32) -> usize {
        match self {
            LoadingMode::Single => count as usize,
            LoadingMode::Dual => (count / 2) as usize,
        }
    }
}

impl Display for LoadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadingMode::Single => write!(f, "single"),
            LoadingMode::Dual => write!(f, "dual"),
        }
    }
}

impl FromStr for LoadingMode {
    type Err = EquipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" | "single" => Ok(LoadingMode::Single),
            "d" | "dual" => Ok(LoadingMode::Dual),
            other => Err(EquipmentError::UnknownLoadingMode(other.to_string())),
        }
    }
}
