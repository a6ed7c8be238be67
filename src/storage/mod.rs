//! In-memory storage for authors and books.
//!
//! Both collections live for the lifetime of the process and only ever
//! grow. Nothing is written to disk; a restart starts again from the seed.
//!
//! ## Components
//!
//! - [`Library`]: the shared store handed to every resolver

mod library;

pub use library::Library;
