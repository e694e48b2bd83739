use crate::filter::spec::{FacetDomains, FilterSpec};
use crate::models::{Property, PropertyStatus};

/// The price facet always offers at least this ceiling, so the slider stays
/// usable even for an empty or uniformly cheap catalog.
const MIN_PRICE_CEILING: i64 = 300_000;

/// Filtered villas grouped for display: guest-held properties first,
/// bookable ones second.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub reserved_or_owned: Vec<&'a Property>,
    pub available: Vec<&'a Property>,
}

/// Derive the facet option domains from the catalog
pub fn derive_facet_domains(catalog: &[Property]) -> FacetDomains {
    let mut locations: Vec<String> = catalog.iter().map(|p| p.location.clone()).collect();
    locations.sort();
    locations.dedup();

    let max_price = catalog
        .iter()
        .map(|p| p.price_per_night)
        .max()
        .unwrap_or(0)
        .max(MIN_PRICE_CEILING);

    FacetDomains {
        locations,
        max_price,
    }
}

/// Project the catalog through the filter spec.
///
/// A villa passes only when every active facet accepts it; the text query
/// matches case-insensitively against name, location or description. The
/// result keeps the catalog's relative order.
pub fn apply_filters<'a>(catalog: &'a [Property], spec: &FilterSpec) -> Vec<&'a Property> {
    catalog.iter().filter(|p| matches(p, spec)).collect()
}

fn matches(property: &Property, spec: &FilterSpec) -> bool {
    if !spec.search_query.is_empty() {
        let query = spec.search_query.to_lowercase();
        let hit = property.name.to_lowercase().contains(&query)
            || property.location.to_lowercase().contains(&query)
            || property.description.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    if !spec.selected_statuses.is_empty() && !spec.selected_statuses.contains(&property.status) {
        return false;
    }

    if !spec.selected_locations.is_empty()
        && !spec.selected_locations.contains(&property.location)
    {
        return false;
    }

    if property.price_per_night < spec.price_min() || property.price_per_night > spec.price_max() {
        return false;
    }

    if property.bedrooms < spec.min_bedrooms {
        return false;
    }

    if property.capacity < spec.min_capacity {
        return false;
    }

    true
}

/// Split filtered villas into the two display groups.
///
/// Villas with an unrecognized status land in neither group.
pub fn partition_by_status<'a>(filtered: &[&'a Property]) -> Partition<'a> {
    let mut partition = Partition::default();
    for &property in filtered {
        match property.status {
            PropertyStatus::Reserved | PropertyStatus::Owned => {
                partition.reserved_or_owned.push(property)
            }
            PropertyStatus::Available => partition.available.push(property),
            PropertyStatus::Unknown => {}
        }
    }
    partition
}

/// Number of active facets, for the filter-button badge.
///
/// The text query is not counted; it has its own clear control.
pub fn active_filter_count(spec: &FilterSpec, domains: &FacetDomains) -> usize {
    let price_narrowed = spec.price_min() > 0 || spec.price_max() < domains.max_price;
    spec.selected_statuses.len()
        + spec.selected_locations.len()
        + usize::from(price_narrowed)
        + usize::from(spec.min_bedrooms > 0)
        + usize::from(spec.min_capacity > 0)
}
