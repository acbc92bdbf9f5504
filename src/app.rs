use crate::adapters::{
    ConsoleOutputAdapter, FileSystemAdapter, JsonOutputAdapter, LogReporter, MultiAlgorithmHasher,
    ProgressBarAdapter, render_groups,
};
use crate::cli::Cli;
use crate::error::ExitCode;
use crate::logging::init_logging;
use crate::ports::OutputPort;
use crate::services::DuplicateFinderService;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resolves `path` to an absolute directory, or `None` if it is not one.
pub fn validate_path(path: &Path) -> Option<PathBuf> {
    if !path.is_dir() {
        return None;
    }
    std::path::absolute(path).ok()
}

pub fn run(cli: &Cli) -> ExitCode {
    let start_time = Instant::now();

    if let Err(e) = init_logging(cli.debug, cli.log_file().as_deref()) {
        eprintln!("{:#}", e);
        return ExitCode::Config;
    }
    debug!("Arguments: {:?}", cli);

    let Some(root) = validate_path(&cli.path) else {
        error!("Path is not a folder: {}", cli.path.display());
        return ExitCode::Usage;
    };
    info!("Path: '{}'", root.display());

    let config = cli.to_scan_config(&root);
    let finder = DuplicateFinderService::new(
        FileSystemAdapter::new(),
        MultiAlgorithmHasher::new(),
        ProgressBarAdapter::new().with_quiet(cli.quiet),
        LogReporter,
    );
    let results = match finder.find_duplicates(&config) {
        Ok(results) => results,
        Err(e) => {
            error!("{}", e);
            return ExitCode::Config;
        }
    };
    let elapsed = start_time.elapsed();

    if !results.duplicates.is_empty() {
        info!("Result:\n{}", render_groups(&results).trim_end());
    }

    let output: Box<dyn OutputPort> = if cli.json {
        Box::new(JsonOutputAdapter::with_stdout())
    } else {
        Box::new(ConsoleOutputAdapter::new().with_summary_only(cli.summary_only))
    };
    if let Err(e) = output.write_results(&results) {
        error!("Failed to print results: {:#}", e);
    }

    if cli.dump {
        let dump_file = cli.dump_file();
        if let Err(e) = JsonOutputAdapter::with_file(&dump_file).write_results(&results) {
            error!("New report has not been created.");
            debug!("New report cannot be saved: {:#}", e);
            return ExitCode::CantCreate;
        }
        info!("New report has been created: {}", dump_file.display());
    }

    info!("Number of files: {}", results.total_files());
    info!("Elapse time: {:.2} s", elapsed.as_secs_f64());
    ExitCode::Ok
}
