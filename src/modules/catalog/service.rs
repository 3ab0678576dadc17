use std::cmp::Ordering;

use super::models::Book;
use super::store::{BookStore, InMemoryBooks};
use crate::error::CatalogError;
use crate::modules::accounts::models::User;

/// Book catalog: search, purchase, reviews and listing maintenance.
///
/// Every operation is a single check-then-mutate step; a failed check leaves
/// the catalog, the user and the book untouched.
#[derive(Debug, Default)]
pub struct CatalogService<S = InMemoryBooks> {
    store: S,
}

impl CatalogService<InMemoryBooks> {
    pub fn new() -> Self {
        Self::with_store(InMemoryBooks::new())
    }
}

impl<S: BookStore> CatalogService<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Books in catalog order.
    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    pub fn len(&self) -> usize {
        self.store.books().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.books().is_empty()
    }

    /// First listed book whose title is exactly `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.store.books().iter().find(|book| book.title == title)
    }

    /// Books whose title, author or genre contains `keyword`, in catalog order.
    ///
    /// Matching is case-sensitive; an empty keyword returns the whole catalog.
    pub fn search_book(&self, keyword: &str) -> Vec<Book> {
        let hits: Vec<Book> = self
            .store
            .books()
            .iter()
            .filter(|book| book.matches(keyword))
            .cloned()
            .collect();

        tracing::debug!(keyword, hits = hits.len(), "catalog search");
        hits
    }

    /// Charges `user` for a listed `book` and records the purchase.
    pub fn purchase_book(&self, user: &mut User, book: &Book) -> bool {
        self.try_purchase_book(user, book).is_ok()
    }

    pub fn try_purchase_book(&self, user: &mut User, book: &Book) -> Result<(), CatalogError> {
        if !self.store.contains(book) {
            tracing::debug!(
                username = %user.username,
                title = %book.title,
                "purchase rejected: not listed"
            );
            return Err(CatalogError::NotListed {
                title: book.title.clone(),
            });
        }

        // NaN on either side is unordered and counts as insufficient
        if matches!(
            user.balance.partial_cmp(&book.price),
            None | Some(Ordering::Less)
        ) {
            tracing::debug!(
                username = %user.username,
                title = %book.title,
                balance = user.balance,
                price = book.price,
                "purchase rejected: insufficient balance"
            );
            return Err(CatalogError::InsufficientBalance {
                balance: user.balance,
                price: book.price,
            });
        }

        user.purchased_books.push(book.clone());
        user.balance -= book.price;

        tracing::info!(
            username = %user.username,
            title = %book.title,
            balance = user.balance,
            "book purchased"
        );
        Ok(())
    }

    /// Appends `review` to a book the user has bought.
    ///
    /// The review lands on the caller's `book` and, while the book is still
    /// listed, on the catalog entry as well.
    pub fn add_book_review(
        &mut self,
        user: &User,
        book: &mut Book,
        review: impl Into<String>,
    ) -> bool {
        self.try_add_book_review(user, book, review).is_ok()
    }

    pub fn try_add_book_review(
        &mut self,
        user: &User,
        book: &mut Book,
        review: impl Into<String>,
    ) -> Result<(), CatalogError> {
        if !user.has_purchased(book) {
            tracing::debug!(
                username = %user.username,
                title = %book.title,
                "review rejected: not purchased"
            );
            return Err(CatalogError::NotPurchased {
                username: user.username.clone(),
                title: book.title.clone(),
            });
        }

        let review = review.into();
        let listed = self.store.append_review(book, review.clone());
        book.reviews.push(review);

        tracing::info!(username = %user.username, title = %book.title, listed, "review added");
        Ok(())
    }

    /// Lists `book` unless a value-equal book is already listed.
    pub fn add_book(&mut self, book: Book) -> bool {
        self.try_add_book(book).is_ok()
    }

    pub fn try_add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.store.contains(&book) {
            tracing::debug!(title = %book.title, "book already listed");
            return Err(CatalogError::AlreadyListed { title: book.title });
        }

        tracing::info!(title = %book.title, author = %book.author, "book listed");
        self.store.push(book);
        Ok(())
    }

    /// Delists the first value-equal book; reports whether one was removed.
    pub fn remove_book(&mut self, book: &Book) -> bool {
        let removed = self.store.remove_first(book);
        tracing::info!(title = %book.title, removed, "book delisted");
        removed
    }
}
