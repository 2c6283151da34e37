//! # Relationship Store Module
//!
//! The follow graph builder never talks to a database directly. It reads
//! users and follow relations through the [`UserRelationshipStore`] trait,
//! which a caller can back with whatever persistence it has.
//!
//! ## Implementations
//!
//! - **InMemoryStore**: indexed follow relations held in memory
//! - **Dataset**: loads a JSON or TOML network snapshot into an
//!   `InMemoryStore`
//!
//! ## Example
//!
//! ```
//! use follow_graph::graph::UserSummary;
//! use follow_graph::store::{InMemoryStore, UserRelationshipStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = InMemoryStore::new();
//! store.add_user(UserSummary::new("a", "alice"))?;
//! store.add_user(UserSummary::new("b", "bob"))?;
//! store.add_follow("a", "b")?;
//!
//! let followers = store.followers("b")?;
//! assert_eq!(followers[0].username, "alice");
//! assert!(store.find_user("zed")?.is_none());
//! # Ok(())
//! # }
//! ```

mod dataset;
mod memory;

pub use dataset::{Dataset, DatasetFormat, FollowRecord};
pub use memory::InMemoryStore;

use crate::error::StoreError;
use crate::graph::UserSummary;

/// Read access to users and their follow relations
///
/// Implementations must be shareable across threads: the builder fetches the
/// neighbors of a whole traversal level concurrently.
pub trait UserRelationshipStore: Sync {
    /// Look up a single user, `None` if the id is unknown
    fn find_user(&self, user_id: &str) -> Result<Option<UserSummary>, StoreError>;

    /// Users following `user_id`
    fn followers(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError>;

    /// Users that `user_id` follows
    fn following(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError>;
}

impl<S: UserRelationshipStore + ?Sized> UserRelationshipStore for &S {
    fn find_user(&self, user_id: &str) -> Result<Option<UserSummary>, StoreError> {
        (**self).find_user(user_id)
    }

    fn followers(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError> {
        (**self).followers(user_id)
    }

    fn following(&self, user_id: &str) -> Result<Vec<UserSummary>, StoreError> {
        (**self).following(user_id)
    }
}
