//! Custom error types for launchpad.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for launchpad operations.
#[derive(Error, Debug)]
pub enum LaunchpadError {
    // Project path errors
    #[error("Project path does not exist: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to scan project tree at {}: {source}", root.display())]
    ScanFailed {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using LaunchpadError
pub type Result<T> = std::result::Result<T, LaunchpadError>;

impl LaunchpadError {
    /// Create a scan failure for the given project root
    pub fn scan_failed(
        root: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::ScanFailed {
            root: root.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

// Wraps in Other variant for generic I/O errors
impl From<std::io::Error> for LaunchpadError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_failed_message_includes_root() {
        let err = LaunchpadError::scan_failed(
            "/srv/app",
            std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ),
        );

        let msg = err.to_string();
        assert!(msg.contains("/srv/app"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_errors_convert_to_other() {
        let err: LaunchpadError =
            std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, LaunchpadError::Other(_)));
    }
}
