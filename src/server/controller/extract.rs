//! Request extractors whose rejections go through `AppError`.
//!
//! axum's own `Json`, `Query` and `Path` reject with plain-text bodies that quote serde's
//! parse errors. These wrappers reject with the usual `{ "success": false, "error": ... }`
//! body and a 400 status instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
