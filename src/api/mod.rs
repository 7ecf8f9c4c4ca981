//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into collaborator calls and formats responses in
//! the JSON envelopes the site's front end expects.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Caller identification, rate limiting and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
