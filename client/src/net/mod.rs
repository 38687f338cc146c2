//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP round-trips and `types` re-exports the shared wire
//! schema from the `calls` crate.

pub mod api;
pub mod types;
