//! HTTP surface for the demo wallet
//!
//! - Route definitions and server lifecycle
//! - Request handlers
//! - Request/response types

pub mod handlers;
pub mod server;
pub mod types;
