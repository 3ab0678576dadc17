//! Storage seam for accounts.

use std::collections::HashMap;
use std::fmt::Debug;

use super::models::User;

/// Username-keyed account storage.
///
/// Implementations must key every user by its `username` at insertion time.
pub trait UserStore: Send + Debug {
    fn contains(&self, username: &str) -> bool;

    fn get(&self, username: &str) -> Option<&User>;

    fn get_mut(&mut self, username: &str) -> Option<&mut User>;

    /// Stores `user` under its current username, replacing any previous entry.
    fn insert(&mut self, user: User);

    fn remove(&mut self, username: &str) -> Option<User>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default in-memory account storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUsers {
    users: HashMap<String, User>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUsers {
    fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    fn insert(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }

    fn remove(&mut self, username: &str) -> Option<User> {
        self.users.remove(username)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
