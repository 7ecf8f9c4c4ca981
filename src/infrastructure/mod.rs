//! Infrastructure layer: concrete collaborators behind the service contracts.
//!
//! Identity, persistence and price feeds live in dedicated systems on the
//! production site. The adapters here run everything in-process and back the
//! integration tests.
//!
//! # Modules
//!
//! - [`auth`] - Bearer token verification and the configured admin list
//! - [`storage`] - Image files on local disk
//! - [`memory`] - In-process content documents
//! - [`market`] - Coin rates and investment plans from a JSON snapshot

pub mod auth;
pub mod market;
pub mod memory;
pub mod storage;
