use crate::domain::model::City;
use crate::utils::error::{CityError, Result};

/// Owns a set of cities, unique by value equality. Elements are kept in
/// insertion order internally; `get_cities` hands out sorted snapshots.
///
/// Single-threaded by design: callers sharing a list across threads must
/// wrap the whole thing in their own lock.
#[derive(Debug, Default)]
pub struct CityList {
    cities: Vec<City>,
}

impl CityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a city. Rejects duplicates and leaves the list unchanged.
    pub fn add(&mut self, city: City) -> Result<()> {
        if self.cities.contains(&city) {
            tracing::warn!("rejected duplicate city: {}", city);
            return Err(CityError::DuplicateCity(city));
        }

        tracing::debug!("adding city: {}", city);
        self.cities.push(city);
        Ok(())
    }

    /// Removes the city equal to `city`. Fails if none is present, leaving
    /// the list unchanged.
    pub fn delete(&mut self, city: &City) -> Result<()> {
        match self.cities.iter().position(|existing| existing == city) {
            Some(index) => {
                self.cities.remove(index);
                tracing::debug!("deleted city: {}", city);
                Ok(())
            }
            None => {
                tracing::warn!("cannot delete, city not in list: {}", city);
                Err(CityError::CityNotFound(city.clone()))
            }
        }
    }

    pub fn has_city(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    pub fn count_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns an independently owned copy of the contents, sorted by city
    /// name and then province name. The internal order is untouched and
    /// mutating the returned vector has no effect on the list.
    pub fn get_cities(&self) -> Vec<City> {
        let mut snapshot = self.cities.clone();
        snapshot.sort();
        snapshot
    }
}
