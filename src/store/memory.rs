use std::collections::{HashMap, HashSet};

use super::UserRelationshipStore;
use crate::error::{FollowGraphError, StoreError};
use crate::graph::UserSummary;

/// Follow relations indexed in both directions
///
/// Users are kept in insertion order and edges reference them by index, so
/// `followers` and `following` come back in the order the follows were added.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Vec<UserSummary>,
    user_indices: HashMap<String, usize>,
    followers: HashMap<usize, Vec<usize>>,
    following: HashMap<usize, Vec<usize>>,
    edges: HashSet<(usize, usize)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: UserSummary) -> Result<(), FollowGraphError> {
        if self.user_indices.contains_key(&user.id) {
            return Err(FollowGraphError::InvalidDataset {
                message: format!("duplicate user id '{}'", user.id),
            });
        }

        self.user_indices.insert(user.id.clone(), self.users.len());
        self.users.push(user);
        Ok(())
    }

    /// Record that `follower` follows `following`
    ///
    /// Both users must already exist. Repeated follows are ignored.
    pub fn add_follow(&mut self, follower: &str, following: &str) -> Result<(), FollowGraphError> {
        let from = self.index_of(follower)?;
        let to = self.index_of(following)?;

        if !self.edges.insert((from, to)) {
            log::debug!("ignoring duplicate follow {follower} -> {following}");
            return Ok(());
        }

        self.following.entry(from).or_default().push(to);
        self.followers.entry(to).or_default().push(from);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn follow_count(&self) -> usize {
        self.edges.len()
    }

    fn index_of(&self, user_id: &str) -> Result<usize, FollowGraphError> {
        self.user_indices
            .get(user_id)
            .copied()
            .ok_or_else(|| FollowGraphError::InvalidDataset {
                message: format!("follow references unknown user '{user_id}'"),
            })
    }

    fn summaries(&self, user_id: &str, index: &HashMap<usize, Vec<usize>>) -> Vec<UserSummary> {
        self.user_indices
            .get(user_id)
            .and_then(|idx| index.get(idx))
            .map(|neighbors| neighbors.iter().map(|&n| self.users[n].clone()).collect())
            .unwrap_or_default()
    }
}

impl UserRelationshipStore for InMemoryStore {
    fn find_user(&self, user_id: &str) -> Result<Option<UserSummary>, StoreError> {
        Ok(self
            .user_indices
            .get(user_id)
            .map(|&idx| self.users[idx].clone()))
    }

    fn followers(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError> {
        Ok(self.summaries(user_id, &self.followers))
    }

    fn following(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError> {
        Ok(self.summaries(user_id, &self.following))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(users: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for id in users {
            store
                .add_user(UserSummary::new(*id, format!("user-{id}")))
                .unwrap();
        }
        store
    }

    fn ids(users: Vec<UserSummary>) -> Vec<String> {
        users.into_iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.add_follow("c", "a").unwrap();
        store.add_follow("b", "a").unwrap();
        store.add_follow("a", "d").unwrap();
        store.add_follow("a", "b").unwrap();

        assert_eq!(ids(store.followers("a").unwrap()), vec!["c", "b"]);
        assert_eq!(ids(store.following("a").unwrap()), vec!["d", "b"]);
    }

    #[test]
    fn test_duplicate_follow_is_collapsed() {
        let mut store = store_with(&["a", "b"]);
        store.add_follow("a", "b").unwrap();
        store.add_follow("a", "b").unwrap();

        assert_eq!(store.follow_count(), 1);
        assert_eq!(ids(store.followers("b").unwrap()), vec!["a"]);
    }

    #[test]
    fn test_self_follow_is_stored() {
        let mut store = store_with(&["a"]);
        store.add_follow("a", "a").unwrap();

        assert_eq!(ids(store.followers("a").unwrap()), vec!["a"]);
        assert_eq!(ids(store.following("a").unwrap()), vec!["a"]);
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let mut store = store_with(&["a"]);
        let err = store.add_user(UserSummary::new("a", "again")).unwrap_err();
        assert!(matches!(err, FollowGraphError::InvalidDataset { .. }));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_follow_of_unknown_user_rejected() {
        let mut store = store_with(&["a"]);
        let err = store.add_follow("a", "ghost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid dataset: follow references unknown user 'ghost'"
        );
    }

    #[test]
    fn test_unknown_user_lookups() {
        let store = store_with(&["a"]);
        assert!(store.find_user("ghost").unwrap().is_none());
        assert!(store.followers("ghost").unwrap().is_empty());
        assert!(store.following("a").unwrap().is_empty());
    }
}
