use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquipmentError {
    #[error("Weight must be positive, got {0}.")]
    NonPositiveWeight(f64),

    #[error("Plate of {0} must have at least one copy.")]
    ZeroCount(f64),

    #[error("Plates must be ordered heaviest first (out of order at index {0}).")]
    UnsortedPlates(usize),

    #[error("Weights must be ascending and unique (out of order at index {0}).")]
    UnsortedWeights(usize),

    #[error("Unknown plate kind '{0}'.")]
    UnknownPlateKind(String),

    #[error("Unknown loading mode '{0}'.")]
    UnknownLoadingMode(String),

    #[error("No equipment named '{0}'.")]
    UnknownEquipment(String),

    #[error("Invalid query '{0}'.")]
    InvalidQuery(String),

    #[error("Invalid gym configuration: {0}")]
    Config(#[from] serde_json::Error),
}
