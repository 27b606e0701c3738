//! API schema helpers for request and response bodies.
//!
//! The movie records themselves live in [`movies_store::types`]; this module
//! holds the wire plumbing around them.

pub mod body;
