use colored::Colorize;

/// User-facing notification channel
///
/// Receives the fixed failure message once per failed cycle. Diagnostic
/// detail never goes through here; it is logged with `tracing`.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes notifications to stderr, keeping stdout for rendered cards
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}
