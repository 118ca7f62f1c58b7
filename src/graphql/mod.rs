//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ author(id: 1) { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addAuthor(name: "Test") { id name }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`
//!
//! `Book.author` and `Author.books` are resolved on demand by scanning the
//! [`Store`](crate::storage::Store) held in the schema data.

mod schema;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use types::*;
