use crate::domain::{DiscoveredFile, ScanConfig};
use crate::error::ScanError;
use crate::ports::{FileSystemPort, ReporterPort};
use ignore::WalkBuilder;
use std::fs;

pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemPort for FileSystemAdapter {
    fn scan_files(&self, config: &ScanConfig, reporter: &dyn ReporterPort) -> Vec<DiscoveredFile> {
        // Every file counts, hidden or gitignored alike. Sorted entries keep
        // the order stable between runs over the same tree.
        let walker = WalkBuilder::new(&config.root)
            .standard_filters(false)
            .follow_links(config.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        reporter.warning(&ScanError::Walk(e).to_string());
                        return None;
                    }
                };
                // Unfollowed symlinks are still listed when they point at a
                // regular file; the metadata check below resolves them.
                let file_type = entry.file_type()?;
                if !(file_type.is_file() || file_type.is_symlink()) {
                    return None;
                }
                let excluded = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| config.is_excluded(name));
                if excluded {
                    return None;
                }

                let path = entry.path();
                match fs::metadata(path) {
                    Ok(metadata) if metadata.is_file() => {
                        Some(DiscoveredFile::new(path.to_path_buf(), metadata.len()))
                    }
                    Ok(_) => None,
                    Err(source) => {
                        let err = ScanError::Metadata {
                            path: path.to_path_buf(),
                            source,
                        };
                        reporter.warning(&err.to_string());
                        None
                    }
                }
            })
            .collect()
    }
}
