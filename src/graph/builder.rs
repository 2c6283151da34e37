use std::collections::HashSet;

use log::{debug, trace};
use rayon::prelude::*;

use super::types::{UserNode, UserSummary};
use crate::constants::traversal::DEFAULT_MAX_DEPTH;
use crate::error::FollowGraphError;
use crate::progress::ProgressReporter;
use crate::store::UserRelationshipStore;

/// Builder for bounded-depth follow trees
///
/// Starting from a root user, the builder expands followers and followees
/// level by level until `max_depth` is reached. Each user is expanded at most
/// once per build; the first level to claim a user owns it and later sightings
/// are only visible through the `followers`/`following` id lists.
pub struct FollowGraphBuilder<S> {
    store: S,
    max_depth: usize,
}

/// Users already claimed by the current build
///
/// Claiming is a single check-and-insert, and a user's edges are only fetched
/// after the claim succeeds.
#[derive(Debug, Default)]
struct VisitedSet {
    ids: HashSet<String>,
}

impl VisitedSet {
    fn claim(&mut self, user_id: &str) -> bool {
        if self.ids.contains(user_id) {
            return false;
        }
        self.ids.insert(user_id.to_string())
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// A claimed user waiting for its edges and children
struct PendingNode {
    user: UserSummary,
    depth: usize,
    followers: Vec<String>,
    following: Vec<String>,
    children: Vec<usize>,
}

impl PendingNode {
    fn new(user: UserSummary, depth: usize) -> Self {
        Self {
            user,
            depth,
            followers: Vec::new(),
            following: Vec::new(),
            children: Vec::new(),
        }
    }
}

type Edges = (Vec<UserSummary>, Vec<UserSummary>);

impl<S: UserRelationshipStore> FollowGraphBuilder<S> {
    /// Create a builder over `store` with the default maximum depth
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the follow tree rooted at `root_id`
    ///
    /// Returns [`FollowGraphError::UserNotFound`] if the root does not exist
    /// and [`FollowGraphError::StorageFailure`] if any store query fails. No
    /// partial tree is returned on failure.
    pub fn build(&self, root_id: &str) -> Result<UserNode, FollowGraphError> {
        self.build_with_progress(root_id, None)
    }

    pub fn build_with_progress(
        &self,
        root_id: &str,
        progress: Option<&ProgressReporter>,
    ) -> Result<UserNode, FollowGraphError> {
        let root = self
            .store
            .find_user(root_id)
            .map_err(|e| FollowGraphError::storage(root_id, e))?
            .ok_or_else(|| FollowGraphError::UserNotFound {
                user_id: root_id.to_string(),
            })?;

        let mut visited = VisitedSet::default();
        visited.claim(&root.id);

        let mut arena = vec![PendingNode::new(root, 0)];
        let mut frontier = vec![0];
        let mut depth = 0;

        while !frontier.is_empty() {
            debug!("expanding depth {depth}: {} users", frontier.len());
            if let Some(p) = progress {
                p.expanding_level(depth, frontier.len());
            }

            // Fan out over the whole level, then fan back in before claiming
            // anything at the next depth.
            let edges: Vec<Edges> = frontier
                .par_iter()
                .map(|&idx| self.fetch_edges(&arena[idx].user.id))
                .collect::<Result<_, _>>()?;

            let mut next = Vec::new();
            for (&idx, (followers, following)) in frontier.iter().zip(edges) {
                arena[idx].followers = followers.iter().map(|u| u.id.clone()).collect();
                arena[idx].following = following.iter().map(|u| u.id.clone()).collect();

                if depth >= self.max_depth {
                    continue;
                }

                for neighbor in followers.into_iter().chain(following) {
                    if !visited.claim(&neighbor.id) {
                        trace!("skipping {}: already claimed", neighbor.id);
                        continue;
                    }

                    let child = arena.len();
                    arena.push(PendingNode::new(neighbor, depth + 1));
                    arena[idx].children.push(child);
                    next.push(child);
                }
            }

            frontier = next;
            depth += 1;
        }

        debug!(
            "follow tree for {root_id} complete: {} users within depth {}",
            visited.len(),
            self.max_depth
        );

        assemble(arena)
    }

    fn fetch_edges(&self, user_id: &str) -> Result<Edges, FollowGraphError> {
        let (followers, following) = rayon::join(
            || self.store.followers(user_id),
            || self.store.following(user_id),
        );

        let followers = followers.map_err(|e| FollowGraphError::storage(user_id, e))?;
        let following = following.map_err(|e| FollowGraphError::storage(user_id, e))?;
        Ok((followers, following))
    }
}

// Children are always pushed after their parent, so walking the arena
// backwards finishes every subtree before its parent needs it.
fn assemble(arena: Vec<PendingNode>) -> Result<UserNode, FollowGraphError> {
    let mut built: Vec<Option<UserNode>> = (0..arena.len()).map(|_| None).collect();

    for (idx, pending) in arena.into_iter().enumerate().rev() {
        let mut node = UserNode::new(
            pending.user,
            pending.depth,
            pending.followers,
            pending.following,
        );
        node.children = pending
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[idx] = Some(node);
    }

    built
        .first_mut()
        .and_then(Option::take)
        .ok_or_else(|| FollowGraphError::GraphError {
            message: "follow tree has no root".to_string(),
        })
}
