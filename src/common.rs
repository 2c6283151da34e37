//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::traversal::DEFAULT_MAX_DEPTH;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Network dataset to read (JSON, or TOML for any other extension)
    #[arg(short, long, value_name = "PATH", env = "FOLLOW_GRAPH_DATASET")]
    pub dataset: PathBuf,

    /// How many follow hops away from the root user to expand
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "FOLLOW_GRAPH_MAX_DEPTH")]
    pub max_depth: usize,

    /// Suppress progress output on stderr
    #[arg(short, long, env = "FOLLOW_GRAPH_QUIET")]
    pub quiet: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::FollowGraphError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::FollowGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::FollowGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Shorthand for the "missing required field" configuration error
pub(crate) fn missing_field(field: &str) -> crate::error::FollowGraphError {
    crate::error::FollowGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

/// Reject blank user ids before any dataset is loaded
pub(crate) fn validate_user_id(user_id: String) -> Result<String, crate::error::FollowGraphError> {
    if user_id.trim().is_empty() {
        return Err(crate::error::FollowGraphError::ConfigurationError {
            message: "User id must not be empty".to_string(),
        });
    }
    Ok(user_id)
}
