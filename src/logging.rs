//! File-based logging bootstrap.
//!
//! All diagnostics go to a log file, never to the terminal: once the
//! renderer owns the alternate screen, anything printed to stdout or stderr
//! would be drawn over the scene. This includes panics, so the panic hook is
//! replaced outright instead of chained.

use std::panic;
use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

const LOG_BASENAME: &str = "tui-orbit";
const MAX_PANIC_PAYLOAD_CHARS: usize = 200;

/// Start file logging under `dir` and install the panic hook.
///
/// The returned handle must stay alive for the life of the process; dropping
/// it shuts the logger down and loses buffered lines.
pub fn init(dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let handle = Logger::try_with_env_or_str("info")
        .context("invalid log specification")?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    install_panic_hook();

    Ok(handle)
}

/// Route panic messages into the log file.
///
/// The default hook is not chained: it writes to stderr, which is invisible
/// (and corrupting) while the terminal is in raw mode. Faulting tasks are
/// caught and reported by the scheduler; this hook covers the payload text.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = flatten(crate::sched::payload_text(info.payload()));
        log::error!("panic at {location}: {payload}");
    }));
}

fn flatten(text: &str) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    let mut capped: String = flat.chars().take(MAX_PANIC_PAYLOAD_CHARS).collect();
    if flat.chars().count() > MAX_PANIC_PAYLOAD_CHARS {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn flatten_strips_newlines_and_caps_length() {
        assert_eq!(flatten("one\ntwo\rthree"), "one two three");

        let long = "x".repeat(MAX_PANIC_PAYLOAD_CHARS + 50);
        let capped = flatten(&long);
        assert_eq!(capped.chars().count(), MAX_PANIC_PAYLOAD_CHARS + 3);
        assert!(capped.ends_with("..."));
    }

    #[test]
    fn init_creates_the_directory_and_a_handle() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("logs");

        let handle = init(&nested).expect("init should succeed");
        assert!(nested.is_dir());

        log::info!("logging smoke line");
        handle.flush();

        let has_log_file = std::fs::read_dir(&nested)
            .expect("read log dir")
            .filter_map(|e| e.ok())
            .any(|e| e.path().extension().is_some_and(|ext| ext == "log"));
        assert!(has_log_file);
    }
}
