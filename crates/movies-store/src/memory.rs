//! In-memory implementation of [`MovieStore`].
//!
//! [`InMemoryStore`] keeps records in a `Vec` in insertion order. Nothing is
//! persisted; state lives as long as the store value.

use crate::error::StoreError;
use crate::seed::default_movies;
use crate::traits::MovieStore;
use crate::types::{Movie, MovieFields};

/// A `Vec`-backed movie store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore { movies: Vec::new() }
    }

    /// Creates a store holding `movies` in the given order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        InMemoryStore { movies }
    }

    /// Creates a store holding the three default seed records.
    pub fn seeded() -> Self {
        Self::with_movies(default_movies())
    }

    /// Appends every record in `movies`, keeping their order.
    pub fn extend(&mut self, movies: impl IntoIterator<Item = Movie>) {
        self.movies.extend(movies);
    }
}

impl MovieStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.clone())
    }

    fn get(&self, id: &str) -> Result<Movie, StoreError> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| StoreError::MovieNotFound(id.to_string()))
    }

    fn insert(&mut self, movie: Movie) -> Result<(), StoreError> {
        self.movies.push(movie);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<usize, StoreError> {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        Ok(before - self.movies.len())
    }

    fn update(&mut self, id: &str, fields: MovieFields) -> Result<Option<Movie>, StoreError> {
        match self.movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                movie.apply(fields);
                Ok(Some(movie.clone()))
            }
            None => Ok(None),
        }
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}
