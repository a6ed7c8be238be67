use crate::model::{Author as ModelAuthor, Book as ModelBook};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::{library, nullable_list};

/// represents an author
#[derive(SimpleObject, Clone)]
#[graphql(name = "Authors", complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = library(ctx)?.books_by(self.id).await;
        Ok(Some(nullable_list(books)))
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// represents a book
#[derive(SimpleObject, Clone)]
#[graphql(name = "Books", complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, if one exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?.author(self.author_id).await;
        Ok(author.map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
