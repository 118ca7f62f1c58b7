use crate::model::{self, Id};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::store;

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    pub id: Id,
    pub name: String,
    pub author_id: Id,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, if they exist
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        Ok(store(ctx)?.find_author(self.author_id)?.map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// This represents a author of a book
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    pub id: Id,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Every book whose authorId matches this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        Ok(Some(
            store(ctx)?
                .books_by_author(self.id)?
                .into_iter()
                .map(|b| Some(b.into()))
                .collect(),
        ))
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
