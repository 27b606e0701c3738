//! Application state with a shared movie store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Every store operation, read or write, takes the same
//! exclusive lock, so concurrent requests see a single serial order.

use std::sync::Arc;

use movies_store::{load_movies_from_file, InMemoryStore, MovieStore};

use crate::config::ServerConfig;

/// A store that can move between handler tasks.
pub type DynStore = Box<dyn MovieStore + Send>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The movie store (async Mutex, awaited without blocking the runtime).
    pub store: Arc<tokio::sync::Mutex<DynStore>>,
}

impl AppState {
    /// Wraps an existing store.
    pub fn new(store: impl MovieStore + Send + 'static) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(Box::new(store))),
        }
    }

    /// State holding only the three default records.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::seeded())
    }

    /// Builds the startup state: the default records, followed by the seed
    /// file's records when the gate in `config` is open.
    ///
    /// A missing or malformed seed file is logged and skipped.
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut store = InMemoryStore::seeded();

        if config.load_seed_file {
            match load_movies_from_file(&config.seed_file) {
                Ok(movies) => {
                    tracing::info!(
                        path = %config.seed_file.display(),
                        count = movies.len(),
                        "appending movies from seed file"
                    );
                    store.extend(movies);
                }
                Err(err) => {
                    tracing::warn!(
                        path = %config.seed_file.display(),
                        error = %err,
                        "could not read seed file, continuing with defaults"
                    );
                }
            }
        } else {
            tracing::debug!("seed file gate closed, skipping seed file");
        }

        Self::new(store)
    }
}
