use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the scanning core.
///
/// Per-file variants (`Walk`, `Metadata`, `Hash`) never abort a scan; the
/// detector reports them and moves on. `InvalidConfig` and `ThreadPool`
/// propagate to the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory entry: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to hash '{path}': {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build hashing thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Process exit statuses, following BSD sysexits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    /// Missing or invalid target path.
    Usage = 64,
    /// The JSON dump could not be written.
    CantCreate = 73,
    /// Logging, thread pool or scan settings could not be set up.
    Config = 78,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_sysexits() {
        assert_eq!(ExitCode::Ok.as_i32(), 0);
        assert_eq!(ExitCode::Usage.as_i32(), 64);
        assert_eq!(ExitCode::CantCreate.as_i32(), 73);
        assert_eq!(ExitCode::Config.as_i32(), 78);
    }

    #[test]
    fn hash_error_names_the_file() {
        let err = ScanError::Hash {
            path: PathBuf::from("/tmp/gone"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/gone"));
    }
}
