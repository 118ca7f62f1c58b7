//! Data models for the bookshelf.
//!
//! - [`Author`]: a person who wrote zero or more books
//! - [`Book`]: a title that points at its author by id
//!
//! The relation between the two is never stored on either side. It is
//! derived at read time by scanning the store (see [`crate::storage::Store`]).

mod author;
mod book;

pub use author::Author;
pub use book::Book;

/// Identifier type shared by both collections. Matches GraphQL's `Int`.
pub type Id = i32;
