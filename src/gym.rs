use std::collections::BTreeMap;

use crate::{
    equipment::Equipment, equipment_error::EquipmentError, loaded_weight::LoadedWeight,
    query::Query,
};

/// Everything a user trains with, by name.
#[derive(Clone, Debug, Default)]
pub struct Gym {
    equipment: BTreeMap<String, Equipment>,
}

impl Gym {
    #[must_use]
    pub fn new(equipment: BTreeMap<String, Equipment>) -> Self {
        Gym { equipment }
    }

    pub fn insert(&mut self, name: impl Into<String>, equipment: Equipment) -> Option<Equipment> {
        self.equipment.insert(name.into(), equipment)
    }

    pub fn remove(&mut self, name: &str) -> Option<Equipment> {
        self.equipment.remove(name)
    }

    ///
    /// # Errors
    /// If no equipment is named `name`.
    ///
    pub fn get(&self, name: &str) -> Result<&Equipment, EquipmentError> {
        self.equipment
            .get(name)
            .ok_or_else(|| EquipmentError::UnknownEquipment(name.to_string()))
    }

    ///
    /// # Errors
    /// If no equipment is named `name`.
    ///
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Equipment, EquipmentError> {
        self.equipment
            .get_mut(name)
            .ok_or_else(|| EquipmentError::UnknownEquipment(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.equipment.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Equipment)> {
        self.equipment.iter().map(|(name, e)| (name.as_str(), e))
    }

    ///
    /// # Errors
    /// If no equipment is named `name`.
    ///
    pub fn resolve(
        &self,
        name: &str,
        query: &Query,
    ) -> Result<Option<LoadedWeight>, EquipmentError> {
        Ok(query.resolve(self.get(name)?))
    }
}
