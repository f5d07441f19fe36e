//! Extractors that report malformed input as `AppError`.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies and a mix of 400, 415 and
//! 422 statuses. These wrappers route every rejection through `AppError`, so clients
//! always get a 400 with an `ErrorDto` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
