//! Storage seam for the catalog.
//!
//! [`CatalogService`](super::service::CatalogService) only talks to a
//! [`BookStore`], so the default vector can be swapped for another backend
//! without changing any service contract.

use std::fmt::Debug;

use super::models::Book;

/// Ordered book storage with value-equality lookups.
pub trait BookStore: Send + Debug {
    /// All books in catalog order.
    fn books(&self) -> &[Book];

    /// True when a value-equal book is stored.
    fn contains(&self, book: &Book) -> bool {
        self.books().contains(book)
    }

    /// Appends a book at the end of the catalog.
    fn push(&mut self, book: Book);

    /// Removes the first value-equal book; reports whether one was removed.
    fn remove_first(&mut self, book: &Book) -> bool;

    /// Appends a review to the first value-equal book; reports whether one was found.
    fn append_review(&mut self, book: &Book, review: String) -> bool;
}

/// Default in-memory catalog storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBooks {
    books: Vec<Book>,
}

impl InMemoryBooks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryBooks {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_first(&mut self, book: &Book) -> bool {
        match self.books.iter().position(|stored| stored == book) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    fn append_review(&mut self, book: &Book, review: String) -> bool {
        match self.books.iter_mut().find(|stored| **stored == *book) {
            Some(stored) => {
                stored.reviews.push(review);
                true
            }
            None => false,
        }
    }
}
