//! HTTP/JSON endpoint for booking form submissions.
//!
//! A minimal axum service: one route that accepts validated submissions
//! into an injected in-memory store and echoes the stored list back on
//! read. This crate contains the router, shared state, API error mapping,
//! and request/response schema types.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
