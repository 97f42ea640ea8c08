//! Request extractors

use axum::extract::FromRequest;

use crate::error::WebServerError;

/// JSON body whose rejections render as `{"error": ...}` like every other failure
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebServerError))]
pub struct ApiJson<T>(pub T);
