//! HTTP surface

pub mod extract;
pub mod handlers;
