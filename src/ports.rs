use crate::domain::{ContentHash, DiscoveredFile, HashAlgorithm, ScanConfig, ScanResult};
use crate::error::ScanError;
use anyhow::Result;
use std::path::Path;

/// Walks `config.root` and lists every regular file with its size.
pub trait FileSystemPort {
    fn scan_files(&self, config: &ScanConfig, reporter: &dyn ReporterPort) -> Vec<DiscoveredFile>;
}

/// Streams a file through a digest `chunk_size` bytes at a time.
pub trait HashingPort {
    fn hash_file(
        &self,
        path: &Path,
        algorithm: HashAlgorithm,
        chunk_size: usize,
    ) -> Result<ContentHash, ScanError>;
}

/// Diagnostics sink for the core. The core never logs on its own.
pub trait ReporterPort {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait OutputPort {
    fn write_results(&self, results: &ScanResult) -> Result<()>;
}

pub trait ProgressPort {
    fn start(&self, total: u64);
    fn update(&self, processed: u64);
    fn finish(&self);
}
