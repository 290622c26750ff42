//! Error types for token loading.
//!
//! The resolution and aggregation passes are total; errors only come from
//! reading token files and configuration.

use std::path::PathBuf;

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading tokens or configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read token file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON token dictionary.
    #[error("Invalid JSON tokens: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML token dictionary or configuration.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is not one of the supported token formats.
    #[error("Unsupported token file format '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let err = Error::io(
            "tokens/base.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("tokens/base.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn unsupported_format_display() {
        let err = Error::unsupported_format("tokens/base.yaml");
        assert!(err.to_string().contains("base.yaml"));
    }
}
