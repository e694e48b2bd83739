use crate::models::Property;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use tracing::debug;

/// Static villa catalog, read-only for the lifetime of a session
const CATALOG_JSON: &str = include_str!("villas.json");

/// The immutable set of villas available for discovery.
///
/// Loaded once at startup; all engine operations borrow from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Load and validate the embedded catalog
    pub fn load() -> Result<Self> {
        let properties: Vec<Property> =
            serde_json::from_str(CATALOG_JSON).context("Failed to parse embedded villa catalog")?;
        let catalog = Self::from_properties(properties)?;
        debug!("Loaded catalog with {} villas", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from an explicit property list, enforcing id uniqueness
    pub fn from_properties(properties: Vec<Property>) -> Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                bail!("Duplicate villa id in catalog: {}", property.id);
            }
        }
        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a villa by its catalog id
    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyStatus;

    fn sample(id: &str) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Villa {id}"),
            location: "Test".to_string(),
            description: String::new(),
            status: PropertyStatus::Available,
            price_per_night: 100_000,
            capacity: 4,
            bedrooms: 2,
            bathrooms: 1,
            image: String::new(),
            images: vec![],
            amenities: vec![],
            address: None,
            nearest_airport: None,
            airport_distance: None,
            airport_time: None,
            access_info: None,
        }
    }

    #[test]
    fn embedded_catalog_loads_and_ids_are_unique() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("1").is_some());
        assert!(catalog.find("999").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::from_properties(vec![sample("1"), sample("2"), sample("1")]);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Duplicate villa id"), "{message}");
        assert!(message.contains('1'));
    }

    #[test]
    fn embedded_catalog_has_no_unknown_statuses() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog
            .properties()
            .iter()
            .all(|p| p.status != PropertyStatus::Unknown));
    }
}
