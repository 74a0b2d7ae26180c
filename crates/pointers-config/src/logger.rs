//! Logger injected into configuration loading.

/// Receives informational messages from configuration loading.
pub trait InfoLogger {
    /// Record an informational message.
    fn info(&self, message: &str);
}

/// Forwards messages to the [`log`] facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl InfoLogger for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }
}
