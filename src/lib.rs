//! # Bookshelf - an in-memory GraphQL API for authors and books
//!
//! Two related collections live in process memory: authors, and the books
//! they wrote. A GraphQL schema exposes read queries over both plus two
//! insert mutations, served over HTTP with an interactive GraphiQL console.
//!
//! ## Features
//!
//! - **GraphQL API**: `book`, `books`, `author`, `authors`, `addBook`, `addAuthor`
//! - **Derived relations**: `Book.author` and `Author.books` are resolved by scanning
//! - **No persistence**: fixture data is compiled in and a restart resets it
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://0.0.0.0:5000/graphql
//! bookshelf
//!
//! # Run a query without starting a server
//! bookshelf query '{ authors { name books { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (Author, Book)
//! - [`server`]: HTTP transport
//! - [`storage`]: In-memory store and fixture data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `bookshelf.toml` file and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and adding authors and books.
pub mod graphql;

pub mod logging;

/// Data models for the bookshelf.
pub mod model;

pub mod server;

/// In-memory storage layer.
///
/// Holds the author and book collections behind a single lock.
pub mod storage;
