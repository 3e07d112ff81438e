//! Extractors that reject with [`AppError`] instead of axum's plain-text
//! rejections, so malformed bodies and ids get the usual JSON error shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Single path parameter, e.g. the `{id}` in `/users/{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);
