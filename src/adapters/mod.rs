pub mod filesystem;
pub mod multi_hasher;
pub mod output;
pub mod progress;
pub mod reporter;

pub use filesystem::FileSystemAdapter;
pub use multi_hasher::MultiAlgorithmHasher;
pub use output::{ConsoleOutputAdapter, JsonOutputAdapter, render_groups};
pub use progress::{NoProgress, ProgressBarAdapter};
pub use reporter::{LogReporter, SilentReporter};
