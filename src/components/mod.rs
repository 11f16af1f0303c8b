//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome shared between the auth pages while the
//! pages keep ownership of submission and navigation logic.

pub mod password_input;
