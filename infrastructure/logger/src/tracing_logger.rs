use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the `emasjid` target, so
/// `RUST_LOG=emasjid=debug` isolates them from HTTP and sqlx noise.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "emasjid", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "emasjid", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "emasjid", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "emasjid", "{}", message);
    }
}
