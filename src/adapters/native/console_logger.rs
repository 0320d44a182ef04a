use crate::ports::LoggerPort;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;

const TARGET: &str = "s3upload";

/// Native logger forwarding to the `log` facade.
///
/// Nothing is printed until a logger backend is installed
/// (see `facades::native::init_logging`).
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            timers: Mutex::new(HashMap::new()),
        }
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn time(&self, label: &str) {
        self.timers.lock().insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.timers.lock().remove(label) {
            Some(started) => {
                log::debug!(target: TARGET, "{label}: {:?}", started.elapsed());
            }
            None => log::warn!(target: TARGET, "Timer '{label}' does not exist"),
        }
    }
}
