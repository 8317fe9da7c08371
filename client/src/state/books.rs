//! Render decisions for the book-list view.
//!
//! DESIGN
//! ======
//! The view only ever shows one of a handful of states. Deriving that state in
//! a plain function keeps the component a thin `match` and lets the
//! "every failure is one string" rule be tested without a browser.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::error::ApiError;
use crate::net::types::Book;

pub const SIGNED_OUT_MESSAGE: &str = "Please log in to view the book list.";
pub const LOADING_MESSAGE: &str = "Loading books...";
pub const EMPTY_MESSAGE: &str = "No books available.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookListView {
    /// No token: nothing is fetched.
    SignedOut,
    Loading,
    /// Full text shown to the user, already prefixed with `Error: `.
    Failed(String),
    Empty,
    Loaded(Vec<Book>),
}

impl BookListView {
    /// Pick the view for an optional token and the fetch outcome so far.
    pub fn resolve(has_token: bool, outcome: Option<Result<Vec<Book>, ApiError>>) -> Self {
        if !has_token {
            return Self::SignedOut;
        }
        match outcome {
            None => Self::Loading,
            Some(Err(err)) => Self::Failed(fetch_error_text(&err)),
            Some(Ok(books)) if books.is_empty() => Self::Empty,
            Some(Ok(books)) => Self::Loaded(books),
        }
    }
}

/// Single displayed string for any book fetch failure.
pub fn fetch_error_text(err: &ApiError) -> String {
    format!("Error: Error fetching books: {err}")
}
