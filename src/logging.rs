use anyhow::anyhow;
use anyhow::Result;
use std::io::Write;

/// Installs a logger that writes just the rendered message to stderr, one line per record.
/// `max_level` comes from the command line and defaults to info, which keeps the debug-level
/// trace records for each computation quiet.
pub(crate) fn init(max_level: log::LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(StderrLogger)).map_err(|_| anyhow!("Failed to set logger"))?;
    log::set_max_level(max_level);
    Ok(())
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // If a write to stderr fails, there's not a lot we can do, so we just ignore it.
            let _ = writeln!(std::io::stderr().lock(), "{}", record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}
