//! Failure reasons for catalog and account operations.
//!
//! The boolean and `Option` service methods collapse these into a single
//! failure signal; the `try_*` variants hand them back to callers that care.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("book '{title}' is not listed in the catalog")]
    NotListed { title: String },

    #[error("book '{title}' is already listed in the catalog")]
    AlreadyListed { title: String },

    #[error("insufficient balance: {balance:.2} available, {price:.2} required")]
    InsufficientBalance { balance: f64, price: f64 },

    #[error("user '{username}' has not purchased '{title}'")]
    NotPurchased { username: String, title: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    /// Unknown username and wrong password are reported identically.
    #[error("invalid username or password")]
    InvalidCredentials,
}
