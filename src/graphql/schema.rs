use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Library;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn library<'ctx>(ctx: &Context<'ctx>) -> async_graphql::Result<&'ctx Arc<Library>> {
    ctx.data::<Arc<Library>>()
}

/// Lists are declared `[T]`: nullable, with nullable items.
pub(super) fn nullable_list<M, T: From<M>>(items: Vec<M>) -> Vec<Option<T>> {
    items.into_iter().map(|item| Some(T::from(item))).collect()
}

/// Root Query
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A Book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(library(ctx)?.book(id).await.map(Book::from))
    }

    /// List of Books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Book>>>> {
        let books = library(ctx)?.books().await;
        Ok(Some(nullable_list(books)))
    }

    /// A single author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(library(ctx)?.author(id).await.map(Author::from))
    }

    /// List of Authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        let authors = library(ctx)?.authors().await;
        Ok(Some(nullable_list(authors)))
    }
}

/// Root Mutation
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a new book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let book = library(ctx)?.add_book(name, author_id).await?;
        Ok(Some(book.into()))
    }

    /// Add a new Author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?.add_author(name).await?;
        Ok(Some(author.into()))
    }
}
