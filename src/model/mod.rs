//! Data models for bookshelf.
//!
//! - [`Author`]: a writer, identified by a sequential integer id
//! - [`Book`]: a title that points at its author through `author_id`
//!
//! The relationship between the two is not stored on either side. It is
//! derived on demand by the store (see [`crate::storage::Library`]).

mod author;
mod book;

pub use author::Author;
pub use book::Book;

/// Identifier shared by authors and books. Assigned sequentially from 1.
pub type EntityId = i32;
