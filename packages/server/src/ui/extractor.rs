//! Request extractors.

use axum::extract::FromRequest;

use super::error::ApiError;

/// `Json` body extractor whose rejections use the `{"detail"}` error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
