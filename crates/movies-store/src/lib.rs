//! Storage layer for the movies service.
//!
//! Provides the [`MovieStore`] trait defining the CRUD contract, plus the
//! [`InMemoryStore`] backend that holds the authoritative list of movies.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with all failure modes
//! - [`types`]: Movie and MovieFields records
//! - [`traits`]: MovieStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`seed`]: hardcoded seed records and the JSON seed-file loader

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use seed::{default_movies, load_movies_from_file};
pub use traits::MovieStore;
pub use types::{Movie, MovieFields};
