//! Core graph types
//!
//! This module contains the data structures produced by the follow graph
//! builder and consumed by the renderers.

use serde::{Deserialize, Serialize};

/// A user as returned by the relationship store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl UserSummary {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A user in the follow tree, with the ids of its followers and followees
///
/// `children` is only populated for nodes below the maximum depth. Links to
/// users that were expanded elsewhere in the tree are only visible through
/// `followers` and `following`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNode {
    pub id: String,
    pub username: String,
    pub icon: Option<String>,
    pub followers: Vec<String>,
    pub following: Vec<String>,
    pub depth: usize,
    pub children: Vec<UserNode>,
}

impl UserNode {
    /// Create a leaf node for `user` at `depth` with its edge lists
    pub fn new(
        user: UserSummary,
        depth: usize,
        followers: Vec<String>,
        following: Vec<String>,
    ) -> Self {
        Self {
            id: user.id,
            username: user.username,
            icon: user.icon,
            followers,
            following,
            depth,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn children(&self) -> &[UserNode] {
        &self.children
    }

    /// Neighbor ids in discovery order: followers first, then followees,
    /// without duplicates
    pub fn neighbor_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.followers
            .iter()
            .chain(self.following.iter())
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn iter(&self) -> UserNodeIter<'_> {
        UserNodeIter { stack: vec![self] }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn find(&self, id: &str) -> Option<&UserNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Deepest `depth` found in this subtree
    pub fn max_depth(&self) -> usize {
        self.iter().map(|node| node.depth).max().unwrap_or(self.depth)
    }
}

pub struct UserNodeIter<'a> {
    stack: Vec<&'a UserNode>,
}

impl<'a> Iterator for UserNodeIter<'a> {
    type Item = &'a UserNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
