use std::fmt::Display;

use crate::{equipment_error::EquipmentError, plate_kind::PlateKind};

/// One physically distinct plate (or bumper, or magnet) and how many the user owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plate {
    weight: f64,
    count: u32,
    kind: PlateKind,
}

impl Plate {
    ///
    /// # Errors
    /// If the weight is not a positive finite number or the count is zero.
    ///
    pub fn new(weight: f64, count: u32, kind: PlateKind) -> Result<Self, EquipmentError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(EquipmentError::NonPositiveWeight(weight));
        }
        if count == 0 {
            return Err(EquipmentError::ZeroCount(weight));
        }
        Ok(Plate {
            weight,
            count,
            kind,
        })
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn kind(&self) -> PlateKind {
        self.kind
    }

    ///
    /// # Errors
    /// If any weight is invalid or `count` is zero.
    ///
    pub fn from_weights(
        weights: &[f64],
        count: u32,
        kind: PlateKind,
    ) -> Result<Vec<Plate>, EquipmentError> {
        weights
            .iter()
            .map(|w| Plate::new(*w, count, kind))
            .collect()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PlateKind::Standard => write!(f, "{}x{}", self.weight, self.count),
            kind => write!(f, "{}x{} {}", self.weight, self.count, kind.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_plates() {
        assert!(matches!(
            Plate::new(0.0, 2, PlateKind::Standard),
            Err(EquipmentError::NonPositiveWeight(_))
        ));
        assert!(matches!(
            Plate::new(f64::NAN, 2, PlateKind::Standard),
            Err(EquipmentError::NonPositiveWeight(_))
        ));
        assert!(matches!(
            Plate::new(20.0, 0, PlateKind::Bumper),
            Err(EquipmentError::ZeroCount(_))
        ));
    }

    #[test]
    fn from_weights_shares_count_and_kind() {
        let plates = Plate::from_weights(&[20.0, 10.0], 4, PlateKind::Bumper).unwrap();
        assert_eq!(plates.len(), 2);
        assert!(plates.iter().all(|p| p.count() == 4 && p.kind() == PlateKind::Bumper));
    }

    #[test]
    fn display() {
        assert_eq!(Plate::new(2.5, 4, PlateKind::Standard).unwrap().to_string(), "2.5x4");
        assert_eq!(Plate::new(25.0, 2, PlateKind::Bumper).unwrap().to_string(), "25x2 bumper");
    }
}
