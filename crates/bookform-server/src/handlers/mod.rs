//! HTTP handler modules for the submission API.
//!
//! Handlers stay thin: parse the request, delegate validation and
//! storage, and shape the JSON response. No business logic lives here.

pub mod submit;
