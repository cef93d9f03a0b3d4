//! Error types for loading customizations.
//!
//! Resolution itself never fails: every resolver function is total and falls
//! back to a default instead of erroring. Only reading and parsing
//! customization files can go wrong, and those paths return [`LustreError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a customization or applying a preset.
#[derive(Debug, Error)]
pub enum LustreError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a flat map of scalar values.
    #[error("{}", parse_message(path.as_ref(), message))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML/JSON parser.
        message: String,
    },

    /// The file extension is not one of [`CONFIG_EXTENSIONS`](crate::CONFIG_EXTENSIONS).
    #[error("unsupported customization format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// No color preset is registered under this key.
    #[error("unknown color preset: {0}")]
    UnknownPreset(String),
}

fn parse_message(path: Option<&PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to parse customization {}: {}", p.display(), message),
        None => format!("failed to parse customization: {}", message),
    }
}

impl LustreError {
    /// Attaches a file path to a [`Parse`](LustreError::Parse) error.
    pub(crate) fn at_path(self, at: impl Into<PathBuf>) -> Self {
        match self {
            LustreError::Parse { message, .. } => LustreError::Parse {
                path: Some(at.into()),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for LustreError {
    fn from(err: serde_yaml::Error) -> Self {
        LustreError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LustreError {
    fn from(err: serde_json::Error) -> Self {
        LustreError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

/// Result type for lustre loading operations.
pub type Result<T> = std::result::Result<T, LustreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_without_path() {
        let err = LustreError::Parse {
            path: None,
            message: "expected a map".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse customization: expected a map"
        );
    }

    #[test]
    fn test_parse_error_at_path() {
        let err = LustreError::Parse {
            path: None,
            message: "bad".to_string(),
        }
        .at_path("theme.yaml");
        assert!(err.to_string().contains("theme.yaml"));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_at_path_leaves_other_errors_alone() {
        let err = LustreError::UnknownPreset("neon".into()).at_path("x.yaml");
        assert!(matches!(err, LustreError::UnknownPreset(ref k) if k == "neon"));
    }

    #[test]
    fn test_unknown_preset_display() {
        let err = LustreError::UnknownPreset("neon".into());
        assert_eq!(err.to_string(), "unknown color preset: neon");
    }

    #[test]
    fn test_read_error_has_source() {
        use std::error::Error as _;
        let err = LustreError::Read {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.yaml"));
    }
}
