//! The [`MovieStore`] trait defining the CRUD contract for movies.
//!
//! All backends implement this trait so the HTTP layer never depends on a
//! concrete collection type. The trait is synchronous; callers that share a
//! store across tasks wrap it in a lock.

use crate::error::StoreError;
use crate::types::{Movie, MovieFields};

/// The storage contract for movie records.
///
/// Records keep insertion order. Ids are never checked for uniqueness.
pub trait MovieStore {
    /// Returns every record in insertion order.
    fn list(&self) -> Result<Vec<Movie>, StoreError>;

    /// Returns the first record whose id matches.
    ///
    /// Fails with [`StoreError::MovieNotFound`] when no record matches.
    fn get(&self, id: &str) -> Result<Movie, StoreError>;

    /// Appends a record to the end, regardless of existing ids.
    fn insert(&mut self, movie: Movie) -> Result<(), StoreError>;

    /// Removes every record whose id matches and returns how many were
    /// removed. Removing nothing is not an error.
    fn delete(&mut self, id: &str) -> Result<usize, StoreError>;

    /// Replaces title, description and release year of the first record
    /// whose id matches, keeping its id.
    ///
    /// Returns the updated record, or `None` if nothing matched.
    fn update(&mut self, id: &str, fields: MovieFields) -> Result<Option<Movie>, StoreError>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
