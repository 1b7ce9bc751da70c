#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

pub(crate) mod search;
pub(crate) mod weight_cache;

pub mod achievable_table;
pub mod bridge;
pub mod config;
pub mod discrete_set;
pub mod equipment;
pub mod equipment_error;
pub mod gym;
pub mod loaded_weight;
pub mod loading_mode;
pub mod plate;
pub mod plate_inventory;
pub mod plate_kind;
pub mod query;
pub mod weight;
