//! CLI argument validation functions
//!
//! Custom value parsers for arguments clap cannot validate on its own.

use jiff::civil::DateTime;
use std::fs;
use std::path::PathBuf;

use crate::models::BuildStatus;

/// Validate that a file path exists and is readable
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Parse a build completion time
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the format the notification shows, and
/// ISO 8601 civil datetimes such as `2013-05-01T10:00:00`.
pub fn validate_timestamp(value: &str) -> Result<DateTime, String> {
    DateTime::strptime("%Y-%m-%d %H:%M:%S", value)
        .or_else(|_| value.parse::<DateTime>())
        .map_err(|_| {
            format!(
                "Timestamp must look like 'YYYY-MM-DD HH:MM:SS', got: '{}'",
                value
            )
        })
}

pub fn validate_build_status(value: &str) -> Result<BuildStatus, String> {
    value.parse::<BuildStatus>().map_err(|e| e.to_string())
}

pub fn validate_build_name(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("Build name cannot be empty".to_string());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_timestamp_formats() {
        let expected = date(2013, 5, 1).at(10, 0, 0, 0);
        assert_eq!(validate_timestamp("2013-05-01 10:00:00").unwrap(), expected);
        assert_eq!(validate_timestamp("2013-05-01T10:00:00").unwrap(), expected);
        assert!(validate_timestamp("01/05/2013 10:00").is_err());
        assert!(validate_timestamp("2013-13-01 10:00:00").is_err());
    }

    #[test]
    fn test_validate_build_status() {
        assert_eq!(validate_build_status("failure").unwrap(), BuildStatus::Failure);
        let err = validate_build_status("red").unwrap_err();
        assert!(err.contains("Invalid build status"));
    }

    #[test]
    fn test_validate_build_name() {
        assert_eq!(validate_build_name("nightly").unwrap(), "nightly");
        assert!(validate_build_name("   ").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logger]").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        assert!(validate_config_file_path("/no/such/config.toml").is_err());

        let dir = tempfile::TempDir::new().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }
}
