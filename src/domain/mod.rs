//! Domain layer containing scan lifecycle rules and value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine)
//! - `scan` - Authorization, capture settings, metadata objects, session status

pub mod foundation;
pub mod scan;
