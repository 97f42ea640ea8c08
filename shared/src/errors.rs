//! Shared error types for the budget optimization system

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Duplicate department in historical data: {department}")]
    DuplicateDepartment { department: String },

    #[error("Duplicate scenario variant name: {name}")]
    DuplicateVariant { name: String },

    #[error("Value out of range: {field} = {value} (expected {expected})")]
    OutOfRange { field: String, value: f64, expected: String },

    #[error("Invalid constraint for {department}: minimum {min} exceeds maximum {max}")]
    InvalidConstraint { department: String, min: f64, max: f64 },

    #[error("Non-finite number in {field}")]
    NonFinite { field: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
