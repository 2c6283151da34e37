//! # Follow Graph Construction and Rendering Module
//!
//! This module builds the bounded-depth follow tree around a user and turns
//! it into visualizations.
//!
//! ## Components
//!
//! ### Tree Building
//! - **FollowGraphBuilder**: Expands followers and followees level by level
//!   from a root user, claiming each user at most once
//! - **UserNode**: A user in the tree with its follower/following id lists
//! - **UserSummary**: A neighbor record as returned by the store
//!
//! ### Network View
//! - **FollowNetwork**: Directed petgraph view of the follows between users
//!   in a tree, including cross links between branches
//! - **FollowCircle**: Users that all reach each other through follows
//!
//! ### Rendering
//! - **GraphRenderer**: Renders trees as JSON or ASCII and networks as
//!   Mermaid or DOT, optionally highlighting follow circles
//!
//! ## Example
//!
//! ```
//! use follow_graph::graph::{FollowGraphBuilder, FollowNetwork, GraphRenderer, UserSummary};
//! use follow_graph::store::InMemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = InMemoryStore::new();
//! store.add_user(UserSummary::new("a", "alice"))?;
//! store.add_user(UserSummary::new("b", "bob"))?;
//! store.add_follow("a", "b")?;
//! store.add_follow("b", "a")?;
//!
//! let root = FollowGraphBuilder::new(&store).build("a")?;
//! assert_eq!(root.children.len(), 1);
//! assert!(root.children[0].children.is_empty());
//!
//! let network = FollowNetwork::from_tree(&root);
//! let circles = network.follow_circles();
//! assert_eq!(circles.len(), 1);
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&network, &circles, &mut output)?;
//! assert!(String::from_utf8(output)?.contains("digraph"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod network;
mod renderer;
mod types;

pub use builder::FollowGraphBuilder;
pub use network::{FollowCircle, FollowEdge, FollowNetwork, NetworkUser};
pub use renderer::GraphRenderer;
pub use types::{UserNode, UserNodeIter, UserSummary};
