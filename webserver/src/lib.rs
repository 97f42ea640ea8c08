//! Webserver library for the resource optimizer
//!
//! Exposes the optimization pipeline, scenario runner and historical data
//! staging over HTTP. Request validation happens here, before anything
//! reaches the pipeline.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
