//! Command implementations for the follow-graph CLI
//!
//! - tree: Build the follow tree around a user
//! - spectacle: Draw the follow network around a user

pub mod spectacle;
pub mod tree;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Tree { .. } => tree::execute_tree_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
