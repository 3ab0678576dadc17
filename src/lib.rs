//! In-memory bookstore.
//!
//! [`CatalogService`] owns the ordered book catalog and [`AccountService`] the
//! username-keyed accounts. [`Bookstore`] composes both behind one mutex per
//! collection for callers that share them.

pub mod bookstore;
pub mod error;
pub mod modules;

pub use bookstore::Bookstore;
pub use error::{AccountError, CatalogError};
pub use modules::accounts::{models::User, service::AccountService, store::UserStore};
pub use modules::catalog::{models::Book, service::CatalogService, store::BookStore};
