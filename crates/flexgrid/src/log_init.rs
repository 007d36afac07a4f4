use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::{GridError, Result};

struct FileLogger {
    file_path: String,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Sends all `log` output at debug level and above to the file at `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: &str) -> Result<()> {
    OpenOptions::new().create(true).append(true).open(path)?;

    let logger = FileLogger {
        file_path: path.to_string(),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| GridError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
