//! # Follow Graph - Bounded-Depth Social Network Trees
//!
//! Follow Graph builds the neighbourhood of a user in a social network: the
//! users who follow them, the users they follow, and so on outward for a
//! bounded number of hops. The result is a tree meant for client-side network
//! visualization, where each user appears once and links between branches are
//! kept as id lists on every node.
//!
//! ## Main Components
//!
//! - **Store**: The [`UserRelationshipStore`](store::UserRelationshipStore)
//!   trait the builder reads from, plus an in-memory implementation loaded
//!   from JSON or TOML datasets
//! - **Graph**: The [`FollowGraphBuilder`](graph::FollowGraphBuilder)
//!   traversal, the tree types, the petgraph network view and the renderers
//! - **CLI**: `tree` and `spectacle` commands on top of the library
//!
//! ## Usage
//!
//! ### Building a follow tree
//!
//! ```
//! use follow_graph::graph::{FollowGraphBuilder, UserSummary};
//! use follow_graph::store::InMemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = InMemoryStore::new();
//! for (id, name) in [("a", "alice"), ("b", "bob"), ("c", "carol"), ("d", "dan")] {
//!     store.add_user(UserSummary::new(id, name))?;
//! }
//! store.add_follow("b", "a")?; // bob follows alice
//! store.add_follow("a", "c")?; // alice follows carol
//! store.add_follow("c", "d")?; // carol follows dan
//!
//! let root = FollowGraphBuilder::new(&store).with_max_depth(1).build("a")?;
//!
//! assert_eq!(root.followers, vec!["b"]);
//! assert_eq!(root.following, vec!["c"]);
//! assert_eq!(root.children.len(), 2);
//!
//! // carol sits at the depth limit: her edges are known, dan is not expanded
//! let carol = root.find("c").unwrap();
//! assert_eq!(carol.following, vec!["d"]);
//! assert!(carol.children.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### Serving the tree
//!
//! ```no_run
//! use std::path::Path;
//!
//! use follow_graph::error::FollowGraphError;
//! use follow_graph::graph::FollowGraphBuilder;
//! use follow_graph::store::Dataset;
//!
//! # fn main() -> miette::Result<()> {
//! let store = Dataset::parse_file(Path::new("network.json"))?.into_store()?;
//!
//! match FollowGraphBuilder::new(&store).build("alice") {
//!     Ok(tree) => println!("{}", serde_json::to_string(&tree).map_err(FollowGraphError::from)?),
//!     Err(e) if e.is_not_found() => eprintln!("404: {e}"),
//!     Err(e @ FollowGraphError::StorageFailure { .. }) => eprintln!("500: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod store;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
