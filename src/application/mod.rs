//! Application layer: contracts of the collaborators the HTTP layer delegates to.
//!
//! Handlers never implement business rules themselves. Every decision about
//! who is an admin, how content is persisted and where images live belongs
//! to the services declared in [`services`].

pub mod services;
