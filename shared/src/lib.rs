//! Shared types for the budget optimization system
//!
//! Contains the request/result data model exchanged between the HTTP layer
//! and the optimization pipeline, boundary validation, and logging setup.

pub mod errors;
pub mod logging;
pub mod types;
pub mod validation;

pub use errors::*;
pub use types::*;
pub use validation::Validate;
