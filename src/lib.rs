//! # bookshelf - a small GraphQL service for authors and books
//!
//! bookshelf keeps two append-only collections in memory, authors and the
//! books they wrote, and exposes them over a single `/graphql` endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the sample library on port 5000
//! bookshelf serve
//!
//! # Run one document without starting a server
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: The in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookshelf.yml` files: server address and seed data.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP endpoint.
pub mod graphql;

pub mod logging;

/// Data models for bookshelf.
pub mod model;

/// In-memory storage layer.
pub mod storage;
