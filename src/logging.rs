//! Logging infrastructure - structured tracing for the built-ins layer
//!
//! Design: Uses `tracing` for structured logging with:
//! - Per-target filtering through `EnvFilter` (`RUST_LOG` wins when set)
//! - Compact or JSON output, to stderr or a file
//! - Zero cost when no subscriber is installed

use crate::config::RuntimeConfig;
use once_cell::sync::OnceCell;
use std::io;
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

pub use tracing::{debug, error, info, trace, warn};

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Targets whose events follow the configured level
const TARGETS: [&str; 3] = ["pythonic", "builtins", "runtime"];

/// Initialize logging from `PYTHONIC_LOG_*` environment variables
pub fn init() {
    init_with_config(&RuntimeConfig::from_env());
}

/// Initialize logging with an explicit configuration
///
/// Only the first call in a process installs a subscriber.
pub fn init_with_config(config: &RuntimeConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let settings = &config.log;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(filter_directives(&settings.level().as_str().to_lowercase()))
        });

        let span_events = if settings.spans {
            FmtSpan::ENTER | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let writer = match &settings.file {
            Some(path) => file_writer(Path::new(path)),
            None => BoxMakeWriter::new(io::stderr),
        };

        let layer = fmt::layer()
            .with_writer(writer)
            .with_span_events(span_events)
            .with_target(true)
            .with_ansi(settings.file.is_none())
            .with_line_number(cfg!(debug_assertions));

        let layer = if settings.json {
            layer.json().with_filter(filter).boxed()
        } else {
            layer.compact().with_filter(filter).boxed()
        };

        // The host program may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_ok() {
            info!(target: "runtime", "pythonic logging initialized");
        }
    });
}

/// `EnvFilter` directives enabling `level` on every crate target
fn filter_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Check if logging is initialized
pub fn is_initialized() -> bool {
    LOGGER_INITIALIZED.get().is_some()
}

fn file_writer(path: &Path) -> BoxMakeWriter {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "pythonic.log".into());

    BoxMakeWriter::new(tracing_appender::rolling::never(directory, file_name))
}

/// Log a builtin function call
#[inline]
pub fn log_builtin_call(name: &str) {
    trace!(target: "builtins", name, "builtin function called");
}

/// Log a materialization of `len` elements into a fresh container
#[inline]
pub fn log_materialize(name: &str, len: i64) {
    trace!(target: "builtins", name, len, "materializing sequence");
}
