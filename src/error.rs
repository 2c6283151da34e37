use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A dataset file that could not be decoded, carrying the offending source
/// for miette
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} dataset '{file}'")]
#[diagnostic(
    code(follow_graph::dataset_parse_error),
    help("Check the {format} document near the highlighted position")
)]
pub struct DatasetParseError {
    pub file: String,
    pub format: &'static str,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: DatasetDecodeError,
}

/// The parser's own explanation of why a dataset was rejected
#[derive(Error, Debug)]
pub enum DatasetDecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Failure reported by a [`crate::store::UserRelationshipStore`]
#[derive(Error, Debug, Diagnostic)]
pub enum StoreError {
    #[error("Relationship store is unavailable: {message}")]
    #[diagnostic(code(follow_graph::store::unavailable))]
    Unavailable { message: String },

    #[error("Relationship store query failed: {message}")]
    #[diagnostic(code(follow_graph::store::backend))]
    Backend { message: String },
}

#[derive(Error, Debug, Diagnostic)]
pub enum FollowGraphError {
    #[error("User '{user_id}' not found")]
    #[diagnostic(
        code(follow_graph::user_not_found),
        help("Check the user id against the users in the dataset")
    )]
    UserNotFound { user_id: String },

    #[error("Storage failure while expanding user '{user_id}'")]
    #[diagnostic(
        code(follow_graph::storage_failure),
        help("The relationship store could not be queried; no partial graph was produced")
    )]
    StorageFailure {
        user_id: String,
        #[source]
        source: StoreError,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(follow_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    DatasetParseError(Box<DatasetParseError>),

    #[error("Invalid dataset: {message}")]
    #[diagnostic(
        code(follow_graph::invalid_dataset),
        help("Every follow record must reference users declared in the dataset")
    )]
    InvalidDataset { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(follow_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(follow_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(follow_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(follow_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(follow_graph::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}

impl FollowGraphError {
    /// Wrap a store failure encountered while expanding `user_id`
    pub fn storage(user_id: &str, source: StoreError) -> Self {
        Self::StorageFailure {
            user_id: user_id.to_string(),
            source,
        }
    }

    /// Whether a caller serving the graph should answer "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_dataset_parse_error_display() {
        let source_code = "{ \"users\": [ }";
        let source = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = DatasetParseError {
            file: "network.json".to_string(),
            format: "JSON",
            source_code: NamedSource::new("network.json", source_code.to_string()),
            span: Some((13, 1).into()),
            source: source.into(),
        };

        assert_eq!(error.to_string(), "Invalid JSON dataset 'network.json'");
        let cause = std::error::Error::source(&error).unwrap().to_string();
        assert!(cause.contains("expected value"), "{cause}");
    }

    #[test]
    fn test_user_not_found() {
        let error = FollowGraphError::UserNotFound {
            user_id: "ghost".to_string(),
        };

        assert_eq!(error.to_string(), "User 'ghost' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_storage_failure_keeps_source() {
        let error = FollowGraphError::storage(
            "alice",
            StoreError::Backend {
                message: "connection reset".to_string(),
            },
        );

        assert_eq!(
            error.to_string(),
            "Storage failure while expanding user 'alice'"
        );
        assert!(!error.is_not_found());

        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(
            source.to_string(),
            "Relationship store query failed: connection reset"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = FollowGraphError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = FollowGraphError::InvalidDataset {
            message: "duplicate user 'a'".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: FollowGraphError = json_err.into();

        match error {
            FollowGraphError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
