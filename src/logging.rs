use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Keeps the file writer flushing until the process exits.
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging. The default level is `info`; when `debug` is set the
/// level becomes `debug` and `RUST_LOG` may override it.
///
/// When `log_file` is given, output is additionally written to that file
/// through a non-blocking appender.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_layer = log_file.and_then(|path| {
        let dir = path.parent().map(PathBuf::from).unwrap_or_default();
        let name = path.file_name()?.to_os_string();
        if !dir.as_os_str().is_empty() {
            if let Err(err) = std::fs::create_dir_all(&dir) {
                eprintln!("failed to create log directory {}: {err}", dir.display());
                return None;
            }
        }
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        Some(fmt::layer().with_ansi(false).with_writer(writer))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}
