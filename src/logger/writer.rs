//! Log file writer

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;

/// Opens the configured log file, creating its directory first.
///
/// The returned writer serializes concurrent log lines.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    let open_error = |source| LoggerError::OpenFile {
        path: config.path.clone(),
        source,
    };

    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(open_error)?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options.open(&config.path).map_err(open_error)?;
    Ok(Mutex::new(file))
}
