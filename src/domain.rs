use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[".DS_Store"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    XxHash64,
    XxHash3,
    Blake3,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::XxHash64 => "xxhash64",
            HashAlgorithm::XxHash3 => "xxhash3",
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

/// Lowercase hex digest of a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A regular file found by the catalog walk. Only its size is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub size: u64,
}

impl DiscoveredFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }

    /// Consumes the record once its content has been digested.
    pub fn into_hashed(self, hash: ContentHash) -> HashedFile {
        HashedFile {
            path: self.path,
            size: self.size,
            hash,
        }
    }
}

/// A size-collision candidate whose content has been digested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashedFile {
    pub path: PathBuf,
    pub size: u64,
    pub hash: ContentHash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    hash: ContentHash,
    files: Vec<HashedFile>,
}

impl DuplicateGroup {
    /// Returns `None` unless there are at least two members, all carrying `hash`.
    pub fn new(hash: ContentHash, files: Vec<HashedFile>) -> Option<Self> {
        if files.len() < 2 || files.iter().any(|f| f.hash != hash) {
            return None;
        }
        Some(Self { hash, files })
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn files(&self) -> &[HashedFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn size(&self) -> u64 {
        self.files[0].size
    }

    pub fn wasted_space(&self) -> u64 {
        self.size() * self.duplicate_count() as u64
    }

    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub exclude_names: BTreeSet<String>,
    pub chunk_size: usize,
    pub hash_algorithm: HashAlgorithm,
    pub thread_count: Option<usize>,
    pub follow_symlinks: bool,
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_names: DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            hash_algorithm: HashAlgorithm::XxHash64,
            thread_count: None,
            follow_symlinks: false,
            verbose: false,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_excluded_name(mut self, name: impl Into<String>) -> Self {
        self.exclude_names.insert(name.into());
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    pub fn with_thread_count(mut self, threads: usize) -> Self {
        self.thread_count = Some(threads);
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_names.contains(file_name)
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub root: PathBuf,
    pub files: Vec<DiscoveredFile>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl ScanResult {
    pub fn new(root: PathBuf, files: Vec<DiscoveredFile>, duplicates: Vec<DuplicateGroup>) -> Self {
        Self {
            root,
            files,
            duplicates,
        }
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    pub fn duplicate_groups(&self) -> usize {
        self.duplicates.len()
    }

    pub fn group(&self, hash: &ContentHash) -> Option<&DuplicateGroup> {
        self.duplicates.iter().find(|g| g.hash() == hash)
    }

    pub fn total_duplicate_files(&self) -> usize {
        self.duplicates.iter().map(|g| g.duplicate_count()).sum()
    }

    pub fn total_wasted_space(&self) -> u64 {
        self.duplicates.iter().map(|g| g.wasted_space()).sum()
    }

    pub fn to_report(&self) -> ScanReport {
        ScanReport {
            path: path_string(&self.root),
            duplicate: self
                .duplicates
                .iter()
                .map(|g| {
                    let paths = g.paths().map(path_string).collect();
                    (g.hash().to_string(), paths)
                })
                .collect(),
            files: self.files.iter().map(|f| path_string(&f.path)).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_report())
    }
}

/// The persisted summary document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub path: String,
    pub duplicate: BTreeMap<String, Vec<String>>,
    pub files: Vec<String>,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
