pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ports;
pub mod services;

pub use domain::{ContentHash, DiscoveredFile, DuplicateGroup, HashedFile, ScanConfig, ScanReport, ScanResult};
pub use error::{ExitCode, ScanError};
pub use services::DuplicateFinderService;
