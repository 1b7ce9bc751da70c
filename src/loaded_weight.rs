use std::fmt::Display;

use crate::{plate_kind::PlateKind, weight::approx_eq};

/// A single item put on the apparatus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub weight: f64,
    pub kind: PlateKind,
}

impl Part {
    #[must_use]
    pub fn new(weight: f64, kind: PlateKind) -> Self {
        Part { weight, kind }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            "" => write!(f, "{}", self.weight),
            label => write!(f, "{} {label}", self.weight),
        }
    }
}

/// One concrete way of reaching `total`. Parts are listed in loading order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedWeight {
    total: f64,
    parts: Vec<Part>,
}

impl LoadedWeight {
    #[must_use]
    pub fn new(total: f64, parts: Vec<Part>) -> Self {
        LoadedWeight { total, parts }
    }

    /// Nothing loaded.
    #[must_use]
    pub fn zero() -> Self {
        LoadedWeight::default()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn part_weights(&self) -> Vec<f64> {
        self.parts.iter().map(|p| p.weight).collect()
    }

    #[must_use]
    pub fn part_labels(&self) -> Vec<String> {
        self.parts.iter().map(|p| p.label().to_string()).collect()
    }

    #[must_use]
    pub fn has_bumper(&self) -> bool {
        self.parts.iter().any(|p| p.kind == PlateKind::Bumper)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.parts.is_empty() && approx_eq(self.total, 0.0)
    }
}

impl Display for LoadedWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self.parts.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{} [{}]", self.total, parts.join(", "))
    }
}
