use super::models::User;
use super::store::{InMemoryUsers, UserStore};
use crate::error::AccountError;

/// Username-keyed account registry.
///
/// The key of every entry is always the stored user's current username.
#[derive(Debug, Default)]
pub struct AccountService<S = InMemoryUsers> {
    store: S,
}

impl AccountService<InMemoryUsers> {
    pub fn new() -> Self {
        Self::with_store(InMemoryUsers::new())
    }
}

impl<S: UserStore> AccountService<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        self.store.get(username)
    }

    /// Mutable access to a stored account, e.g. to charge it for a purchase.
    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.store.get_mut(username)
    }

    /// Registers `user` unless its username is taken.
    pub fn register_user(&mut self, user: User) -> bool {
        self.try_register_user(user).is_ok()
    }

    pub fn try_register_user(&mut self, user: User) -> Result<(), AccountError> {
        if self.store.contains(&user.username) {
            tracing::debug!(username = %user.username, "registration rejected: username taken");
            return Err(AccountError::UsernameTaken(user.username));
        }

        tracing::info!(username = %user.username, "user registered");
        self.store.insert(user);
        Ok(())
    }

    /// Returns the account when both username and password match.
    ///
    /// An unknown username and a wrong password both yield `None`.
    pub fn login_user(&self, username: &str, password: &str) -> Option<&User> {
        self.try_login_user(username, password).ok()
    }

    pub fn try_login_user(&self, username: &str, password: &str) -> Result<&User, AccountError> {
        match self.store.get(username) {
            Some(user) if user.password == password => {
                tracing::info!(username, "user logged in");
                Ok(user)
            }
            _ => {
                tracing::debug!(username, "login rejected");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Rewrites the credentials of `user` and re-keys its entry.
    ///
    /// Fails without touching anything when `new_username` belongs to another
    /// entry. On success the stored account keeps its balance and purchases,
    /// is re-keyed under `new_username` only, and the caller's `user` receives
    /// the new username, password and email. A user missing from the registry
    /// is inserted as given.
    pub fn update_user_profile(
        &mut self,
        user: &mut User,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> bool {
        self.try_update_user_profile(user, new_username, new_password, new_email)
            .is_ok()
    }

    pub fn try_update_user_profile(
        &mut self,
        user: &mut User,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> Result<(), AccountError> {
        if user.username != new_username && self.store.contains(new_username) {
            tracing::debug!(
                username = %user.username,
                new_username,
                "profile update rejected: username taken"
            );
            return Err(AccountError::UsernameTaken(new_username.to_string()));
        }

        let old_username = std::mem::replace(&mut user.username, new_username.to_string());
        user.password = new_password.to_string();
        user.email = new_email.to_string();

        let entry = match self.store.remove(&old_username) {
            Some(mut stored) => {
                stored.username = user.username.clone();
                stored.password = user.password.clone();
                stored.email = user.email.clone();
                stored
            }
            None => user.clone(),
        };
        self.store.insert(entry);

        tracing::info!(old_username = %old_username, username = %user.username, "profile updated");
        Ok(())
    }
}
