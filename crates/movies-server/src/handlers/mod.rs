//! HTTP handler modules for the movies API.
//!
//! Handlers are thin: they extract the request, acquire the store lock,
//! delegate to [`movies_store::MovieStore`], and return the response.

pub mod home;
pub mod movies;
