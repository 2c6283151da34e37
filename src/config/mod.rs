//! # Configuration Module
//!
//! Configuration structures for the follow-graph commands. Each command has
//! its own config module with a builder implementing
//! [`ConfigBuilder`](crate::common::ConfigBuilder).
//!
//! ## Command Configurations
//!
//! - **TreeConfig**: Configuration for the `tree` command emitting the follow
//!   tree
//! - **SpectacleConfig**: Configuration for the `spectacle` command drawing
//!   the follow network
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use follow_graph::cli::{GraphFormat, TreeFormat};
//! use follow_graph::common::ConfigBuilder;
//! use follow_graph::config::{SpectacleConfig, TreeConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = TreeConfig::builder()
//!     .with_user_id("alice")
//!     .with_dataset(PathBuf::from("network.json"))
//!     .with_format(TreeFormat::Ascii)
//!     .build()?;
//! assert_eq!(tree.max_depth, 2);
//!
//! let spectacle = SpectacleConfig::builder()
//!     .with_user_id("alice")
//!     .with_dataset(PathBuf::from("network.json"))
//!     .with_format(GraphFormat::Dot)
//!     .with_max_depth(3)
//!     .build()?;
//! assert!(spectacle.highlight_circles);
//! # Ok(())
//! # }
//! ```

pub mod spectacle;
pub mod tree;

pub use spectacle::SpectacleConfig;
pub use tree::TreeConfig;
