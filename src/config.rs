//! Serializable gym configuration.
//!
//! ```json
//! {
//!   "equipment": {
//!     "barbell": { "type": "plates", "mode": "dual",
//!                  "plates": [{ "weight": 20, "count": 2, "kind": "bumper" }] },
//!     "dumbbells": { "type": "fixed", "base": [10, 12.5], "extras": [0.5], "max_extras": 1 },
//!     "pullup": { "type": "bodyweight" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    discrete_set::DiscreteSet, equipment::Equipment, equipment_error::EquipmentError, gym::Gym,
    loading_mode::LoadingMode, plate::Plate, plate_inventory::PlateInventory,
    plate_kind::PlateKind,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlateConfig {
    pub weight: f64,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub kind: PlateKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EquipmentConfig {
    Bodyweight,
    Fixed {
        base: Vec<f64>,
        #[serde(default)]
        extras: Vec<f64>,
        #[serde(default)]
        max_extras: usize,
    },
    Plates {
        #[serde(default)]
        mode: LoadingMode,
        plates: Vec<PlateConfig>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GymConfig {
    #[serde(default)]
    pub equipment: BTreeMap<String, EquipmentConfig>,
}

fn default_count() -> u32 {
    2
}

impl GymConfig {
    ///
    /// # Errors
    /// If `json` is not a valid gym configuration.
    ///
    pub fn from_json(json: &str) -> Result<Self, EquipmentError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// # Errors
    /// If the configuration cannot be serialized.
    ///
    pub fn to_json(&self) -> Result<String, EquipmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// # Errors
    /// If any equipment holds an invalid weight or count.
    ///
    pub fn build(&self) -> Result<Gym, EquipmentError> {
        let equipment = self
            .equipment
            .iter()
            .map(|(name, config)| Ok((name.clone(), config.build()?)))
            .collect::<Result<BTreeMap<_, _>, EquipmentError>>()?;
        Ok(Gym::new(equipment))
    }
}

impl EquipmentConfig {
    ///
    /// # Errors
    /// If any weight or count is invalid.
    ///
    pub fn build(&self) -> Result<Equipment, EquipmentError> {
        match self {
            EquipmentConfig::Bodyweight => Ok(Equipment::Bodyweight),
            EquipmentConfig::Fixed {
                base,
                extras,
                max_extras,
            } => Ok(Equipment::Fixed(DiscreteSet::from_unsorted(
                base.clone(),
                extras.clone(),
                *max_extras,
            )?)),
            EquipmentConfig::Plates { mode, plates } => {
                let plates = plates
                    .iter()
                    .sorted_by(|a, b| b.weight.total_cmp(&a.weight))
                    .map(|p| Plate::new(p.weight, p.count, p.kind))
                    .collect::<Result<Vec<_>, _>>()?;
                let inventory = PlateInventory::new(plates)?;
                Ok(Equipment::plates(inventory, *mode))
            }
        }
    }
}

fn plates(weights: &[(f64, u32)], kind: PlateKind) -> Vec<PlateConfig> {
    weights
        .iter()
        .map(|(weight, count)| PlateConfig {
            weight: *weight,
            count: *count,
            kind,
        })
        .collect()
}

impl Default for GymConfig {
    /// A small home gym, in kilograms.
    fn default() -> Self {
        let big_plates = plates(
            &[
                (20.0, 2),
                (15.0, 2),
                (10.0, 2),
                (5.0, 2),
                (2.5, 12),
                (1.25, 8),
            ],
            PlateKind::Standard,
        );

        let equipment = BTreeMap::from([
            (
                "barbell".to_string(),
                EquipmentConfig::Plates {
                    mode: LoadingMode::Dual,
                    plates: big_plates
                        .iter()
                        .cloned()
                        .chain(plates(&[(25.0, 2), (10.0, 2)], PlateKind::Bumper))
                        .collect(),
                },
            ),
            (
                "dumbbell".to_string(),
                EquipmentConfig::Plates {
                    mode: LoadingMode::Dual,
                    plates: plates(&[(2.5, 4), (1.25, 4), (0.5, 4)], PlateKind::Standard),
                },
            ),
            (
                "landmine".to_string(),
                EquipmentConfig::Plates {
                    mode: LoadingMode::Single,
                    plates: big_plates,
                },
            ),
            (
                "kettlebells".to_string(),
                EquipmentConfig::Fixed {
                    base: vec![8.0, 12.0, 16.0, 20.0, 24.0],
                    extras: vec![],
                    max_extras: 0,
                },
            ),
            (
                "fixed dumbbells".to_string(),
                EquipmentConfig::Fixed {
                    base: vec![5.0, 7.5, 10.0, 12.5, 15.0, 17.5, 20.0],
                    extras: vec![0.5, 1.0],
                    max_extras: 2,
                },
            ),
            ("pullup".to_string(), EquipmentConfig::Bodyweight),
        ]);

        GymConfig { equipment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_equipment_types() {
        let config = GymConfig::from_json(
            r#"{
                "equipment": {
                    "barbell": { "type": "plates", "mode": "dual", "plates": [
                        { "weight": 10, "count": 4 },
                        { "weight": 25, "count": 2, "kind": "bumper" }
                    ] },
                    "dumbbells": { "type": "fixed", "base": [20, 10], "extras": [2, 3], "max_extras": 1 },
                    "pullup": { "type": "bodyweight" }
                }
            }"#,
        )
        .unwrap();

        let gym = config.build().unwrap();
        assert_eq!(
            gym.names().collect::<Vec<_>>(),
            vec!["barbell", "dumbbells", "pullup"]
        );

        let Equipment::Plates { inventory, mode } = gym.get("barbell").unwrap() else {
            panic!("barbell should be plate loaded");
        };
        assert_eq!(*mode, LoadingMode::Dual);
        assert_eq!(inventory.plates()[0].kind(), PlateKind::Bumper);

        let dumbbells = gym.get("dumbbells").unwrap().achievable().unwrap();
        assert_eq!(dumbbells.totals(), vec![10.0, 12.0, 13.0, 20.0, 22.0, 23.0]);
    }

    #[test]
    fn plate_defaults() {
        let config: PlateConfig = serde_json::from_str(r#"{ "weight": 5 }"#).unwrap();
        assert_eq!(config.count, 2);
        assert_eq!(config.kind, PlateKind::Standard);
    }

    #[test]
    fn invalid_plates_fail_to_build() {
        let config = GymConfig::from_json(
            r#"{ "equipment": { "bar": { "type": "plates", "plates": [{ "weight": 0 }] } } }"#,
        )
        .unwrap();
        assert!(matches!(
            config.build(),
            Err(EquipmentError::NonPositiveWeight(_))
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            GymConfig::from_json(r#"{ "equipment": { "bar": { "type": "rope" } } }"#),
            Err(EquipmentError::Config(_))
        ));
    }

    #[test]
    fn default_gym_builds_and_round_trips() {
        let config = GymConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GymConfig::from_json(&json).unwrap(), config);

        let gym = config.build().unwrap();
        assert!(gym.get("barbell").is_ok());
        assert!(gym.get("pullup").is_ok());
    }
}
