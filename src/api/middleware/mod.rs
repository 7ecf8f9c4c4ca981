//! HTTP middleware and request guards.
//!
//! Provides caller identification, rate limiting, and observability.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
