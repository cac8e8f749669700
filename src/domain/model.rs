use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A named city together with its province. Value semantics: two cities are
/// equal iff both fields match exactly (case-sensitive, no normalization).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    city_name: String,
    province_name: String,
}

impl City {
    pub fn new(city_name: &str, province_name: &str) -> Self {
        Self {
            city_name: city_name.to_string(),
            province_name: province_name.to_string(),
        }
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn province_name(&self) -> &str {
        &self.province_name
    }
}

impl Ord for City {
    // Sort by city name first, then by province name.
    fn cmp(&self, other: &Self) -> Ordering {
        self.city_name
            .cmp(&other.city_name)
            .then_with(|| self.province_name.cmp(&other.province_name))
    }
}

impl PartialOrd for City {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city_name, self.province_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(city: &City) -> u64 {
        let mut hasher = DefaultHasher::new();
        city.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_is_structural() {
        let a = City::new("Regina", "Saskatchewan");
        let b = City::new("Regina", "Saskatchewan");
        assert_eq!(a, b);
        assert_ne!(a, City::new("Regina", "saskatchewan"));
        assert_ne!(a, City::new("Winnipeg", "Saskatchewan"));
    }

    #[test]
    fn test_equal_cities_hash_identically() {
        let a = City::new("Toronto", "Ontario");
        let b = City::new("Toronto", "Ontario");
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_ordering_by_city_then_province() {
        let edmonton = City::new("Edmonton", "Alberta");
        let toronto_mb = City::new("Toronto", "Manitoba");
        let toronto_on = City::new("Toronto", "Ontario");

        assert!(edmonton < toronto_mb);
        assert!(toronto_mb < toronto_on);
        assert_eq!(
            toronto_on.cmp(&City::new("Toronto", "Ontario")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_ordering_consistent_with_equality() {
        let a = City::new("Halifax", "Nova Scotia");
        let b = City::new("Halifax", "Nova Scotia");
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_renders_city_comma_province() {
        let city = City::new("Victoria", "British Columbia");
        assert_eq!(city.to_string(), "Victoria, British Columbia");
    }

    #[test]
    fn test_empty_fields_are_allowed() {
        let city = City::new("", "");
        assert_eq!(city.city_name(), "");
        assert_eq!(city.province_name(), "");
        assert_eq!(city.to_string(), ", ");
    }
}
