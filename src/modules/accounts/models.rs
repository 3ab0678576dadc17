use bookstore_kernel::settings::UserSeed;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::models::Book;

/// A bookstore account.
///
/// Passwords are stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique key of the account
    pub username: String,
    pub password: String,
    pub email: String,
    /// Spendable balance, zero unless funded
    #[serde(default)]
    pub balance: f64,
    /// Books bought so far, in purchase order, repeats included
    #[serde(default)]
    pub purchased_books: Vec<Book>,
}

impl User {
    /// Creates an account with a zero balance.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            balance: 0.0,
            purchased_books: Vec::new(),
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn has_purchased(&self, book: &Book) -> bool {
        self.purchased_books.contains(book)
    }
}

impl From<UserSeed> for User {
    fn from(seed: UserSeed) -> Self {
        User::new(seed.username, seed.password, seed.email).with_balance(seed.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_empty_balance() {
        let user = User::new("john_doe", "password123", "john@example.com");
        assert_eq!(user.balance, 0.0);
        assert!(user.purchased_books.is_empty());
    }

    #[test]
    fn seed_carries_balance() {
        let user = User::from(UserSeed {
            username: "jane_doe".to_string(),
            password: "password456".to_string(),
            email: "jane@example.com".to_string(),
            balance: 42.5,
            purchased: vec!["Dune".to_string()],
        });
        assert_eq!(user.username, "jane_doe");
        assert_eq!(user.balance, 42.5);
        // titles are resolved against the catalog by the accounts module
        assert!(user.purchased_books.is_empty());
    }
}
