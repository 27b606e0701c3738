//! HTTP/JSON API server for the in-memory movie catalogue.
//!
//! Provides a small REST API over a [`movies_store::MovieStore`]. This crate
//! contains the server configuration, shared state, API schema helpers,
//! error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
