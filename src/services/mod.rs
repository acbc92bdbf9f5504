pub mod duplicate_finder;

pub use duplicate_finder::{DuplicateFinderService, group_by_hash, size_candidates};
