use crate::models::PropertyStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Facet option domains derived from the catalog: the distinct locations and
/// the upper bound for the price facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetDomains {
    /// Distinct location values, lexicographically ordered for stable display
    pub locations: Vec<String>,
    /// Highest observed nightly price, floored at the display ceiling
    pub max_price: i64,
}

/// Mutable filter state for the discovery view.
///
/// Empty sets and zero lower bounds mean "no constraint" for their facet.
/// The price bounds always satisfy `price_min <= price_max`; the setters
/// clamp the edited value rather than rejecting the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_query: String,
    pub selected_statuses: BTreeSet<PropertyStatus>,
    pub selected_locations: BTreeSet<String>,
    price_min: i64,
    price_max: i64,
    pub min_bedrooms: u32,
    pub min_capacity: u32,
}

impl FilterSpec {
    /// A spec with every facet cleared and the price range spanning the
    /// whole domain. Also serves as the reset target.
    pub fn cleared(domains: &FacetDomains) -> Self {
        Self {
            search_query: String::new(),
            selected_statuses: BTreeSet::new(),
            selected_locations: BTreeSet::new(),
            price_min: 0,
            price_max: domains.max_price,
            min_bedrooms: 0,
            min_capacity: 0,
        }
    }

    pub fn price_min(&self) -> i64 {
        self.price_min
    }

    pub fn price_max(&self) -> i64 {
        self.price_max
    }

    /// Set the lower price bound, clamped so it never exceeds the upper one
    pub fn set_price_min(&mut self, value: i64) {
        self.price_min = value.max(0).min(self.price_max);
    }

    /// Set the upper price bound, clamped so it never drops below the lower one
    pub fn set_price_max(&mut self, value: i64) {
        self.price_max = value.max(self.price_min);
    }

    /// Add the status to the selection if absent, remove it if present
    pub fn toggle_status(&mut self, status: PropertyStatus) {
        if !self.selected_statuses.remove(&status) {
            self.selected_statuses.insert(status);
        }
    }

    /// Add the location to the selection if absent, remove it if present
    pub fn toggle_location(&mut self, location: &str) {
        if !self.selected_locations.remove(location) {
            self.selected_locations.insert(location.to_string());
        }
    }
}
