//! Catalog fixtures served by the mock API.
//!
//! The `/books` and `/authors` endpoints serve a fixed data set. The
//! fixtures are typed records rather than embedded JSON strings so the
//! wire format is pinned down by serde derives; field order and renames
//! preserve the original payloads exactly.

use serde::Serialize;

/// A book in the fixture catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// An author in the fixture catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub country_of_birth: String,
    pub year_of_birth: i32,
}

/// The full fixture data set.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<Author>,
}

impl Catalog {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}

impl Default for Catalog {
    /// Seed the catalog with the canonical fixture rows.
    fn default() -> Self {
        Self {
            books: vec![
                Book {
                    title: "The Alchemist".to_string(),
                    author: "Paulo Coelho".to_string(),
                    year: 1988,
                },
                Book {
                    title: "The Prophet".to_string(),
                    author: "Kahlil Gibran".to_string(),
                    year: 1923,
                },
            ],
            authors: vec![
                Author {
                    name: "Paulo Coelho".to_string(),
                    country_of_birth: "Brazil".to_string(),
                    year_of_birth: 1947,
                },
                Author {
                    name: "Kahlil Gibran".to_string(),
                    country_of_birth: "Lebanon".to_string(),
                    year_of_birth: 1883,
                },
            ],
        }
    }
}
