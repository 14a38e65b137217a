//! Log routing
//!
//! The terminal is owned by the TUI while it runs, so log lines go to a file
//! in the config directory instead of stdout or stderr.

use std::io;
use std::path::Path;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file written next to the config file
pub const LOG_FILE_NAME: &str = "gate-tui.log";

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "gate_tui=info";

/// Build a subscriber that appends to `dir/gate-tui.log`
///
/// Keep the guard alive for as long as logging should work; dropping it
/// flushes pending lines.
pub fn file_subscriber(
    dir: &Path,
) -> io::Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;

    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer),
    );

    Ok((subscriber, guard))
}
