use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Set up env_logger once per process; `RUST_LOG` overrides the defaults
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("screamsheet", log::LevelFilter::Debug)
            .filter_module("screamsheet_lib", log::LevelFilter::Debug)
            // genpdf and the HTTP stack are chatty at info
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("genpdf", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        debug!("Logger ready");
    });
}

/// One-line log formats shared by providers, sources and sheets
pub struct LogContext;

impl LogContext {
    /// A request to a remote API; `elapsed_ms` is set once it has answered
    pub fn api_call(provider: &str, endpoint: &str, outcome: &str, elapsed_ms: Option<u64>) {
        match elapsed_ms {
            Some(ms) => info!("{}: GET {} -> {} ({}ms)", provider, endpoint, outcome, ms),
            None => debug!("{}: GET {}", provider, endpoint),
        }
    }

    pub fn snapshot(action: &str, path: &Path) {
        debug!("Snapshot: {} {}", action, path.display());
    }

    /// Whether a section made it into the document
    pub fn section(title: &str, flowables: Option<usize>) {
        match flowables {
            Some(count) => info!("Section '{}': {} flowables", title, count),
            None => info!("Section '{}': nothing to print, skipped", title),
        }
    }

    /// A failure swallowed at a provider boundary
    pub fn degraded(context: &str, err: &dyn std::error::Error) {
        warn!("{}: {} (printing without it)", context, err);
    }

    pub fn error_with_context(err: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, err);
    }
}

/// Wall-clock timer for one sheet run
pub struct TimedOperation {
    start: Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting {}", operation);
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
        }
    }

    /// Log the elapsed time with a detail such as the output path
    pub fn finish_with_info(self, detail: &str) -> u64 {
        let elapsed = self.start.elapsed().as_millis() as u64;
        info!("Done: {} in {}ms ({})", self.operation, elapsed, detail);
        elapsed
    }
}
