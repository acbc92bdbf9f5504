use crate::domain::{DEFAULT_CHUNK_SIZE, HashAlgorithm, ScanConfig};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, ValueEnum)]
pub enum HashAlgorithmChoice {
    #[value(help = "Fast non-cryptographic hash")]
    Xxhash64,
    #[value(help = "xxHash variant, fast non-cryptographic hash")]
    Xxhash3,
    #[value(help = "Cryptographic hash")]
    Blake3,
    #[value(help = "Cryptographic hash")]
    Sha256,
}

impl From<HashAlgorithmChoice> for HashAlgorithm {
    fn from(choice: HashAlgorithmChoice) -> Self {
        match choice {
            HashAlgorithmChoice::Xxhash64 => HashAlgorithm::XxHash64,
            HashAlgorithmChoice::Xxhash3 => HashAlgorithm::XxHash3,
            HashAlgorithmChoice::Blake3 => HashAlgorithm::Blake3,
            HashAlgorithmChoice::Sha256 => HashAlgorithm::Sha256,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "dupscan")]
#[command(about = "Find duplicate files under a directory by size, then content hash")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'p', long = "path", help = "Directory to check for duplicates")]
    pub path: PathBuf,

    #[arg(long = "debug", help = "Print debug messages to stderr")]
    pub debug: bool,

    #[arg(long = "logfile", help = "Also write log lines to report.log")]
    pub logfile: bool,

    #[arg(
        long = "log-dir",
        help = "Directory for report.log",
        default_value = "."
    )]
    pub log_dir: PathBuf,

    #[arg(long = "dump", help = "Write a JSON summary to dump_<pid>.json")]
    pub dump: bool,

    #[arg(
        long = "dump-dir",
        help = "Directory for the JSON summary",
        default_value = "."
    )]
    pub dump_dir: PathBuf,

    #[arg(
        short = 'j',
        long = "threads",
        help = "Number of threads to use for hashing"
    )]
    pub threads: Option<usize>,

    #[arg(
        long = "chunk-size",
        help = "Read block size in bytes used while hashing",
        default_value_t = DEFAULT_CHUNK_SIZE
    )]
    pub chunk_size: usize,

    #[arg(
        short = 'a',
        long = "algorithm",
        help = "Hash algorithm to use",
        value_enum,
        default_value = "xxhash64"
    )]
    pub hash_algorithm: HashAlgorithmChoice,

    #[arg(
        short = 'x',
        long = "exclude",
        help = "File name to skip, in addition to .DS_Store",
        action = clap::ArgAction::Append
    )]
    pub exclude: Vec<String>,

    #[arg(
        short = 'L',
        long = "follow-symlinks",
        help = "Follow symbolic links"
    )]
    pub follow_symlinks: bool,

    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(
        long = "json",
        help = "Print the JSON summary to stdout instead of the text listing"
    )]
    pub json: bool,

    #[arg(
        long = "summary-only",
        help = "Show only summary statistics, not the duplicate groups"
    )]
    pub summary_only: bool,
}

impl Cli {
    pub fn to_scan_config(&self, root: &Path) -> ScanConfig {
        let mut config = ScanConfig::new()
            .with_root(root)
            .with_chunk_size(self.chunk_size)
            .with_hash_algorithm(self.hash_algorithm.clone().into())
            .with_follow_symlinks(self.follow_symlinks)
            .with_verbose(self.debug);

        if let Some(threads) = self.threads {
            config = config.with_thread_count(threads);
        }
        for name in &self.exclude {
            config = config.with_excluded_name(name.clone());
        }

        config
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.logfile.then(|| crate::logging::log_file_path(&self.log_dir))
    }

    pub fn dump_file(&self) -> PathBuf {
        self.dump_dir.join(format!("dump_{}.json", std::process::id()))
    }
}
