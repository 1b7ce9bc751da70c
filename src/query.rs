use std::{fmt::Display, str::FromStr};

use crate::{equipment::Equipment, equipment_error::EquipmentError, loaded_weight::LoadedWeight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Closest,
    BelowOrEqual,
    AboveOrEqual,
    StepBelow,
    StepAbove,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Direction::Closest => "",
            Direction::BelowOrEqual => "-",
            Direction::AboveOrEqual => "+",
            Direction::StepBelow => "<",
            Direction::StepAbove => ">",
        }
    }
}

/// A weight lookup as typed on the command line: `55` for the closest
/// loadable weight, `55-` / `55+` for the closest at or below / at or above,
/// `55<` / `55>` for one step down / up from an achievable weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Query {
    pub weight: f64,
    pub direction: Direction,
}

impl Query {
    #[must_use]
    pub fn new(weight: f64, direction: Direction) -> Self {
        Query { weight, direction }
    }

    #[must_use]
    pub fn resolve(&self, equipment: &Equipment) -> Option<LoadedWeight> {
        match self.direction {
            Direction::Closest => Some(equipment.closest(self.weight)),
            Direction::BelowOrEqual => Some(equipment.closest_below_or_equal(self.weight)),
            Direction::AboveOrEqual => equipment.closest_above_or_equal(self.weight),
            Direction::StepBelow => equipment.step_below(self.weight),
            Direction::StepAbove => equipment.step_above(self.weight),
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.weight, self.direction.suffix())
    }
}

impl FromStr for Query {
    type Err = EquipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (weight, direction) = match s.chars().last() {
            Some('-') => (&s[..s.len() - 1], Direction::BelowOrEqual),
            Some('+') => (&s[..s.len() - 1], Direction::AboveOrEqual),
            Some('<') => (&s[..s.len() - 1], Direction::StepBelow),
            Some('>') => (&s[..s.len() - 1], Direction::StepAbove),
            _ => (s, Direction::Closest),
        };
        let weight = weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w >= 0.0)
            .ok_or_else(|| EquipmentError::InvalidQuery(s.to_string()))?;
        Ok(Query { weight, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discrete_set::DiscreteSet;

    #[test]
    fn parses_directions() {
        assert_eq!("55".parse::<Query>().unwrap(), Query::new(55.0, Direction::Closest));
        assert_eq!("55-".parse::<Query>().unwrap(), Query::new(55.0, Direction::BelowOrEqual));
        assert_eq!("12.5+".parse::<Query>().unwrap(), Query::new(12.5, Direction::AboveOrEqual));
        assert_eq!("20<".parse::<Query>().unwrap(), Query::new(20.0, Direction::StepBelow));
        assert_eq!(" 20> ".parse::<Query>().unwrap(), Query::new(20.0, Direction::StepAbove));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Query>().is_err());
        assert!("kg".parse::<Query>().is_err());
        assert!("-5".parse::<Query>().is_err());
        assert!("5-+".parse::<Query>().is_err());
    }

    #[test]
    fn display_round_trips_suffix() {
        assert_eq!(Query::new(20.0, Direction::StepBelow).to_string(), "20<");
    }

    #[test]
    fn resolves_against_equipment() {
        let equipment = Equipment::Fixed(DiscreteSet::new(vec![10.0, 20.0], vec![], 0).unwrap());
        let resolve = |q: &str| q.parse::<Query>().unwrap().resolve(&equipment).map(|w| w.total());

        assert_eq!(resolve("16"), Some(20.0));
        assert_eq!(resolve("16-"), Some(10.0));
        assert_eq!(resolve("25+"), Some(20.0));
        assert_eq!(resolve("20<"), Some(10.0));
        assert_eq!(resolve("20>"), None);
    }
}
