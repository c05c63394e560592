use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct FileLogger {
    path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(
                    file,
                    "[{}] {} - {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a file-backed logger. Call once at startup; embedding
/// applications that bring their own logger should skip this.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(FileLogger { path: path.into() }))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_writes_to_file() {
        let path = std::env::temp_dir().join("studio-log-test.log");
        let _ = std::fs::remove_file(&path);
        // set_boxed_logger only succeeds once per process; ignore if some
        // other test got there first.
        if init_logger(&path).is_ok() {
            log::debug!("hello from the studio logger");
            let contents = std::fs::read_to_string(&path).unwrap_or_default();
            assert!(contents.contains("hello from the studio logger"));
        }
    }
}
