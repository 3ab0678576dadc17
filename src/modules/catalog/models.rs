use bookstore_kernel::settings::BookSeed;
use serde::{Deserialize, Serialize};

/// A book listed in the catalog.
///
/// Two books are equal when their title, author, genre and price match.
/// Reviews are not part of a book's identity: a reviewed copy still equals the
/// catalog entry it was bought from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Genre the book is shelved under
    pub genre: String,
    /// Price in the store's currency
    pub price: f64,
    /// Reviews in the order they were written
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            price,
            reviews: Vec::new(),
        }
    }

    /// True when the title, author or genre contains `keyword`.
    pub fn matches(&self, keyword: &str) -> bool {
        self.title.contains(keyword)
            || self.author.contains(keyword)
            || self.genre.contains(keyword)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.price == other.price
    }
}

impl From<BookSeed> for Book {
    fn from(seed: BookSeed) -> Self {
        Book::new(seed.title, seed.author, seed.genre, seed.price)
    }
}
