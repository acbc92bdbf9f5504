use crate::domain::ScanResult;
use crate::ports::OutputPort;
use anyhow::{Context, Result};
use console::style;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

struct OutputWriter {
    output_file: Option<PathBuf>,
}

impl OutputWriter {
    fn new() -> Self {
        Self { output_file: None }
    }

    fn with_file(path: &Path) -> Self {
        Self {
            output_file: Some(path.to_path_buf()),
        }
    }

    fn write_content(&self, content: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write '{}'", path.display()))?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// One block per duplicate group: the hash, then each member path.
pub fn render_groups(results: &ScanResult) -> String {
    let mut output = String::new();
    for group in &results.duplicates {
        let _ = write!(output, "- Same files ({}):", group.hash());
        for path in group.paths() {
            let _ = write!(output, "\n -> '{}'", path.display());
        }
        output.push('\n');
    }
    output
}

pub struct ConsoleOutputAdapter {
    writer: OutputWriter,
    summary_only: bool,
}

impl ConsoleOutputAdapter {
    pub fn new() -> Self {
        Self {
            writer: OutputWriter::new(),
            summary_only: false,
        }
    }

    pub fn with_summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }

    fn format_text(&self, results: &ScanResult) -> String {
        let mut output = String::new();
        if results.duplicates.is_empty() {
            let _ = writeln!(output, "{}", style("No duplicate files found.").green());
        } else if !self.summary_only {
            output.push_str(&render_groups(results));
        }

        let _ = writeln!(
            output,
            "{} files scanned ({} bytes), {} duplicate groups, {} duplicate files, {} bytes reclaimable",
            style(results.total_files()).bold(),
            results.total_size(),
            style(results.duplicate_groups()).bold(),
            style(results.total_duplicate_files()).yellow(),
            style(results.total_wasted_space()).yellow(),
        );
        output
    }
}

impl Default for ConsoleOutputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for ConsoleOutputAdapter {
    fn write_results(&self, results: &ScanResult) -> Result<()> {
        self.writer.write_content(&self.format_text(results))
    }
}

pub struct JsonOutputAdapter {
    writer: OutputWriter,
}

impl JsonOutputAdapter {
    pub fn with_file(path: &Path) -> Self {
        Self {
            writer: OutputWriter::with_file(path),
        }
    }

    pub fn with_stdout() -> Self {
        Self {
            writer: OutputWriter::new(),
        }
    }
}

impl OutputPort for JsonOutputAdapter {
    fn write_results(&self, results: &ScanResult) -> Result<()> {
        let json = results.to_json()?;
        self.writer.write_content(&format!("{}\n", json))
    }
}
