//! GraphQL schema, resolvers and HTTP endpoint for bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL at http://127.0.0.1:5000/graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf query 'mutation { addAuthor(name: "Ursula K. Le Guin") { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Authors`, `Books`
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, bind, router, run_server};
pub use types::*;
