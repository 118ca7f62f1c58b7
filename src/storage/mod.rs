//! In-memory storage for authors and books.
//!
//! Both collections live in process memory and are seeded with fixture data
//! at startup. Nothing is persisted; a restart resets the store.
//!
//! ## Components
//!
//! - [`Store`]: append-only author and book collections behind one lock
//! - [`seed_authors`] / [`seed_books`]: the fixture records

mod fixtures;
mod store;

pub use fixtures::{seed_authors, seed_books};
pub use store::Store;
