pub mod engine;
pub mod spec;

pub use engine::{
    active_filter_count, apply_filters, derive_facet_domains, partition_by_status, Partition,
};
pub use spec::{FacetDomains, FilterSpec};
