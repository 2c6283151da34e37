//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TreeConfig;
use crate::error::FollowGraphError;

impl FromCommand for TreeConfig {
    fn from_command(command: Commands) -> Result<Self, FollowGraphError> {
        match command {
            Commands::Tree {
                user_id,
                common,
                format,
                output,
                compact,
            } => TreeConfig::builder()
                .with_user_id(user_id)
                .with_dataset(common.dataset)
                .with_max_depth(common.max_depth)
                .with_format(format)
                .with_output(output)
                .with_compact(compact)
                .with_quiet(common.quiet)
                .build(),
            _ => Err(FollowGraphError::ConfigurationError {
                message: "Invalid command type for TreeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeConfig);

/// Execute the tree command
pub fn execute_tree_command(command: Commands) -> Result<()> {
    let config =
        TreeConfig::from_command(command).wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::{GraphFormat, TreeFormat};
    use crate::common::CommonArgs;

    fn common() -> CommonArgs {
        CommonArgs {
            dataset: PathBuf::from("net.json"),
            max_depth: 1,
            quiet: true,
        }
    }

    #[test]
    fn test_tree_command_converts() {
        let config = TreeConfig::try_from(Commands::Tree {
            user_id: "alice".to_string(),
            common: common(),
            format: TreeFormat::Ascii,
            output: None,
            compact: false,
        })
        .unwrap();

        assert_eq!(config.user_id, "alice");
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.format, TreeFormat::Ascii);
        assert!(config.quiet);
    }

    #[test]
    fn test_wrong_command_rejected() {
        let result = TreeConfig::try_from(Commands::Spectacle {
            user_id: "alice".to_string(),
            common: common(),
            format: GraphFormat::Mermaid,
            output: None,
            no_highlight_circles: false,
        });

        assert!(matches!(
            result,
            Err(FollowGraphError::ConfigurationError { .. })
        ));
    }
}
