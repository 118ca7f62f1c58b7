use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use tracing::info;

use crate::model::Id;
use crate::storage::Store;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    Ok(ctx.data::<Arc<Store>>()?.as_ref())
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Id) -> async_graphql::Result<Option<Book>> {
        Ok(store(ctx)?.find_book(id)?.map(Into::into))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        Ok(Some(
            store(ctx)?
                .books()?
                .into_iter()
                .map(|b| Some(b.into()))
                .collect(),
        ))
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Id) -> async_graphql::Result<Option<Author>> {
        Ok(store(ctx)?.find_author(id)?.map(Into::into))
    }

    /// List of all authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        Ok(Some(
            store(ctx)?
                .authors()?
                .into_iter()
                .map(|a| Some(a.into()))
                .collect(),
        ))
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: Id,
    ) -> async_graphql::Result<Option<Book>> {
        let book = store(ctx)?.add_book(name, author_id)?;
        info!(id = book.id, author_id, "added book");
        Ok(Some(book.into()))
    }

    /// Add an author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx)?.add_author(name)?;
        info!(id = author.id, "added author");
        Ok(Some(author.into()))
    }
}
