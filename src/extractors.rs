// ABOUTME: Request extractors with structured error rejections
// ABOUTME: JSON body extraction that answers malformed bodies with the ErrorResponse envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! Request extractors
//!
//! [`AppJson`] wraps axum's `Json` extractor so malformed bodies (bad
//! syntax and bad shapes alike) come back as a 400 with the same JSON
//! error envelope every other failure uses, instead of axum's plain-text
//! rejections.

use crate::errors::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects with [`AppError`]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::invalid_format(rejection.body_text())),
        }
    }
}
