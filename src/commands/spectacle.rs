//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleConfig;
use crate::error::FollowGraphError;

impl FromCommand for SpectacleConfig {
    fn from_command(command: Commands) -> Result<Self, FollowGraphError> {
        match command {
            Commands::Spectacle {
                user_id,
                common,
                format,
                output,
                no_highlight_circles,
            } => SpectacleConfig::builder()
                .with_user_id(user_id)
                .with_dataset(common.dataset)
                .with_max_depth(common.max_depth)
                .with_format(format)
                .with_output(output)
                .with_highlight_circles(!no_highlight_circles)
                .with_quiet(common.quiet)
                .build(),
            _ => Err(FollowGraphError::ConfigurationError {
                message: "Invalid command type for SpectacleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleConfig);

/// Execute the spectacle command for drawing the follow network
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleConfig::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::GraphFormat;
    use crate::common::CommonArgs;

    #[test]
    fn test_no_highlight_flag_inverts() {
        let config = SpectacleConfig::try_from(Commands::Spectacle {
            user_id: "alice".to_string(),
            common: CommonArgs {
                dataset: PathBuf::from("net.toml"),
                max_depth: 3,
                quiet: false,
            },
            format: GraphFormat::Dot,
            output: Some(PathBuf::from("net.dot")),
            no_highlight_circles: true,
        })
        .unwrap();

        assert!(!config.highlight_circles);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.output, Some(PathBuf::from("net.dot")));
    }
}
