use crate::domain::{ContentHash, DiscoveredFile, DuplicateGroup, HashedFile, ScanConfig, ScanResult};
use crate::error::ScanError;
use crate::ports::{FileSystemPort, HashingPort, ProgressPort, ReporterPort};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct DuplicateFinderService<F, H, P, R> {
    filesystem: F,
    hasher: H,
    progress: P,
    reporter: R,
}

impl<F, H, P, R> DuplicateFinderService<F, H, P, R>
where
    F: FileSystemPort,
    H: HashingPort + Sync,
    P: ProgressPort + Sync,
    R: ReporterPort,
{
    pub fn new(filesystem: F, hasher: H, progress: P, reporter: R) -> Self {
        Self {
            filesystem,
            hasher,
            progress,
            reporter,
        }
    }

    /// Runs one full pass over `config.root`: size partition, hashing of
    /// the size collisions, then hash partition.
    ///
    /// Files that cannot be read are reported through the reporter and left
    /// out of every group. Only configuration problems are returned as errors.
    pub fn find_duplicates(&self, config: &ScanConfig) -> Result<ScanResult, ScanError> {
        if config.chunk_size == 0 {
            return Err(ScanError::InvalidConfig("chunk size must be positive".into()));
        }
        if config.thread_count == Some(0) {
            return Err(ScanError::InvalidConfig("thread count must be positive".into()));
        }

        let files = self.filesystem.scan_files(config, &self.reporter);
        self.reporter.info(&format!("Found {} files", files.len()));

        let candidates = size_candidates(&files);
        self.reporter.info(&format!(
            "{} files share their size with another file",
            candidates.len()
        ));

        let duplicates = if candidates.is_empty() {
            Vec::new()
        } else {
            group_by_hash(self.hash_candidates(candidates, config)?)
        };

        Ok(ScanResult::new(config.root.clone(), files, duplicates))
    }

    fn hash_candidates(
        &self,
        candidates: Vec<DiscoveredFile>,
        config: &ScanConfig,
    ) -> Result<Vec<HashedFile>, ScanError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.thread_count {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        let hasher = &self.hasher;
        let progress = &self.progress;
        let counter = AtomicUsize::new(0);

        progress.start(candidates.len() as u64);
        let outcomes: Vec<(DiscoveredFile, Result<ContentHash, ScanError>)> = pool.install(|| {
            candidates
                .into_par_iter()
                .map(|file| {
                    let outcome = hasher.hash_file(&file.path, config.hash_algorithm, config.chunk_size);
                    let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
                    progress.update(done as u64);
                    (file, outcome)
                })
                .collect()
        });
        progress.finish();

        let mut hashed = Vec::with_capacity(outcomes.len());
        for (file, outcome) in outcomes {
            match outcome {
                Ok(hash) => {
                    if config.verbose {
                        self.reporter
                            .info(&format!("{} {}", hash, file.path.display()));
                    }
                    hashed.push(file.into_hashed(hash));
                }
                Err(e) => self.reporter.warning(&e.to_string()),
            }
        }
        Ok(hashed)
    }
}

/// Keeps the files whose size occurs at least twice, in their original order.
pub fn size_candidates(files: &[DiscoveredFile]) -> Vec<DiscoveredFile> {
    let mut size_counts: HashMap<u64, usize> = HashMap::new();
    for file in files {
        *size_counts.entry(file.size).or_default() += 1;
    }

    files
        .iter()
        .filter(|file| size_counts[&file.size] > 1)
        .cloned()
        .collect()
}

/// Groups hashed files by digest. Groups come out in order of first
/// appearance and keep their members in input order.
pub fn group_by_hash(files: Vec<HashedFile>) -> Vec<DuplicateGroup> {
    let mut order: Vec<ContentHash> = Vec::new();
    let mut hash_groups: HashMap<ContentHash, Vec<HashedFile>> = HashMap::new();
    for file in files {
        let members = hash_groups.entry(file.hash.clone()).or_insert_with(|| {
            order.push(file.hash.clone());
            Vec::new()
        });
        members.push(file);
    }

    order
        .into_iter()
        .filter_map(|hash| {
            let members = hash_groups.remove(&hash)?;
            DuplicateGroup::new(hash, members)
        })
        .collect()
}
