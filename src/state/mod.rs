//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold plain data structs; the app shell wraps them in
//! `RwSignal` context so pages and components share one source of truth.

pub mod auth;
