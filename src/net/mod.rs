//! Networking modules for the journal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` holds the shared request configuration, `api` the endpoint calls,
//! and `types` the wire schema.

pub mod api;
pub mod http;
pub mod types;
