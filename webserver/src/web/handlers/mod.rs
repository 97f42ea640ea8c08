//! Route handlers

pub mod data;
pub mod optimize;
pub mod system;
