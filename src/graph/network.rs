//! Directed follow network over the users of a built tree

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::UserNode;

/// A user placed in the network view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkUser {
    pub id: String,
    pub username: String,
    pub depth: usize,
}

/// `source` follows `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowEdge {
    /// The follow through which the traversal discovered the child user
    ///
    /// When parent and child follow each other only the child's follow of
    /// the parent is a discovery link.
    pub discovery: bool,
}

/// Users that can all reach each other through follows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowCircle {
    members: Vec<String>,
}

impl FollowCircle {
    pub fn new(mut members: Vec<String>) -> Self {
        members.sort();
        Self { members }
    }

    /// Member ids, sorted
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Follow relations among the users present in a [`UserNode`] tree
///
/// The tree only keeps each user once, so links between users in different
/// branches survive only as id lists. This view turns those lists back into
/// edges.
#[derive(Debug, Clone, Default)]
pub struct FollowNetwork {
    graph: DiGraph<NetworkUser, FollowEdge>,
    indices: HashMap<String, NodeIndex>,
}

impl FollowNetwork {
    pub fn from_tree(root: &UserNode) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        let mut discovery_links = HashSet::new();

        for node in root.iter() {
            let idx = graph.add_node(NetworkUser {
                id: node.id.clone(),
                username: node.username.clone(),
                depth: node.depth,
            });
            indices.insert(node.id.clone(), idx);

            // Followers are claimed first, so a child that is also followed
            // back was discovered through its follow of the parent
            for child in &node.children {
                let link = if node.followers.contains(&child.id) {
                    (child.id.as_str(), node.id.as_str())
                } else {
                    (node.id.as_str(), child.id.as_str())
                };
                discovery_links.insert(link);
            }
        }

        // Every node carries its complete following list, so following alone
        // yields every edge between users in the tree
        for node in root.iter() {
            let from = indices[&node.id];
            for followee in &node.following {
                if let Some(&to) = indices.get(followee) {
                    let discovery =
                        discovery_links.contains(&(node.id.as_str(), followee.as_str()));
                    graph.add_edge(from, to, FollowEdge { discovery });
                }
            }
        }

        Self { graph, indices }
    }

    pub fn graph(&self) -> &DiGraph<NetworkUser, FollowEdge> {
        &self.graph
    }

    pub fn user_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn follow_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn index_of(&self, user_id: &str) -> Option<NodeIndex> {
        self.indices.get(user_id).copied()
    }

    pub fn follows(&self, follower: &str, following: &str) -> bool {
        match (self.index_of(follower), self.index_of(following)) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Pairs of users that follow each other, each pair ordered and sorted
    pub fn mutual_follows(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .graph
            .edge_references()
            .filter(|edge| edge.source() < edge.target())
            .filter(|edge| self.graph.contains_edge(edge.target(), edge.source()))
            .map(|edge| {
                let a = &self.graph[edge.source()].id;
                let b = &self.graph[edge.target()].id;
                if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                }
            })
            .collect();

        pairs.sort();
        pairs.dedup();
        pairs
    }

    /// Strongly connected groups of two or more users
    ///
    /// Self-follows never form a circle on their own.
    pub fn follow_circles(&self) -> Vec<FollowCircle> {
        let mut circles: Vec<FollowCircle> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                FollowCircle::new(scc.iter().map(|&idx| self.graph[idx].id.clone()).collect())
            })
            .collect();

        circles.sort_by(|a, b| a.members().cmp(b.members()));
        circles
    }
}
