use async_trait::async_trait;
use axum::{
	extract::{ FromRequest, FromRequestParts, Path, Request },
	http::request::Parts,
	Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// JSON body that must match `T` before the handler runs. Rejections become
/// `ApiError::MalformedRequest`.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T> where T: DeserializeOwned, S: Send + Sync {
	type Rejection = ApiError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		match Json::<T>::from_request(req, state).await {
			Ok(Json(value)) => Ok(Self(value)),
			Err(rejection) => {
				warn!("Rejected request body: {}", rejection.body_text());
				Err(rejection.into())
			}
		}
	}
}

pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T> where T: DeserializeOwned + Send, S: Send + Sync {
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		match Path::<T>::from_request_parts(parts, state).await {
			Ok(Path(value)) => Ok(Self(value)),
			Err(rejection) => {
				warn!("Rejected path parameter: {}", rejection.body_text());
				Err(rejection.into())
			}
		}
	}
}
