//! Seed data for a fresh store.
//!
//! [`default_movies`] returns the three records every store starts with;
//! [`load_movies_from_file`] reads extra records from a JSON array on disk.

use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::types::Movie;

const ALL_AT_ONCE_DESC: &str = "When an interdimensional rupture unravels reality, an unlikely hero must channel her newfound powers to fight bizarre and...";
const TROOPERS_DESC: &str = "Five Vermont state troopers, avid pranksters with a knack for screwing up, try to save their jobs and out-do the local police...";

/// The hardcoded seed records, in list order.
pub fn default_movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "Everything Everywhere All at Once", ALL_AT_ONCE_DESC, 2022),
        Movie::new("2", "Super Troopers", TROOPERS_DESC, 2001),
        Movie::new("3", "3rd title", "Another movie", 1998),
    ]
}

/// Reads a JSON array of movies from `path`.
pub fn load_movies_from_file(path: impl AsRef<Path>) -> Result<Vec<Movie>, StoreError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let movies: Vec<Movie> = serde_json::from_slice(&bytes)?;
    tracing::debug!(path = %path.display(), count = movies.len(), "loaded seed file");
    Ok(movies)
}
