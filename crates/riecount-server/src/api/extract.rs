//! Extractors whose rejections use the JSON error body.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use riecount_core::error::RiecountError;

use super::error::ApiError;

/// `Query<T>` that rejects with `BAD_REQUEST` instead of axum's plain-text 400.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(RiecountError::BadRequest(rejection.body_text())))?;
        Ok(Self(value))
    }
}
