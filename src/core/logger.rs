use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::{
    Error,
    Result,
};

// The terminal belongs to the UI, so records only ever go to a file.
static FILE_LOGGER: FileLogger = FileLogger { sink: Mutex::new(None) };

struct FileLogger {
    sink: Mutex<Option<File>>,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Some(file) = sink.as_mut() {
            _ = writeln!(file,
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            if let Some(file) = sink.as_mut() {
                _ = file.flush();
            }
        }
    }
}

pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let file = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("Opening log file {} error: {e}", path)))?),
        None => None,
    };

    let enabled = file.is_some();
    if let Ok(mut sink) = FILE_LOGGER.sink.lock() {
        *sink = file;
    }

    // set_logger only succeeds once per process; later calls just swap the sink.
    _ = log::set_logger(&FILE_LOGGER);
    log::set_max_level(if enabled { level } else { LevelFilter::Off });
    Ok(())
}

pub fn teardown() {
    log::logger().flush();
    if let Ok(mut sink) = FILE_LOGGER.sink.lock() {
        *sink = None;
    }
    log::set_max_level(LevelFilter::Off);
}
