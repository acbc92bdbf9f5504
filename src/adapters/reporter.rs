use crate::ports::ReporterPort;
use log::{error, info, warn};

/// Forwards core diagnostics to the `log` facade.
pub struct LogReporter;

impl ReporterPort for LogReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Drops every diagnostic.
pub struct SilentReporter;

impl ReporterPort for SilentReporter {
    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
