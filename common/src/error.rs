use axum::{
	extract::rejection::{ JsonRejection, PathRejection },
	http::StatusCode,
	response::{ IntoResponse, Response },
	Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	#[error("Product not found")]
	ProductNotFound(i64),

	#[error("Product ID already exists")]
	DuplicateProduct(i64),
}

/// Errors surfaced to HTTP clients. Every variant renders as `{"detail": ...}`.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
	#[error("{0}")]
	NotFound(String),

	#[error("{0}")]
	Conflict(String),

	#[error("{0}")]
	MalformedRequest(String),
}

impl ApiError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
			ApiError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub detail: String,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		(status, Json(ErrorBody { detail: self.to_string() })).into_response()
	}
}

impl From<StoreError> for ApiError {
	fn from(err: StoreError) -> Self {
		match err {
			StoreError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
			StoreError::DuplicateProduct(_) => ApiError::Conflict(err.to_string()),
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		ApiError::MalformedRequest(rejection.body_text())
	}
}

impl From<PathRejection> for ApiError {
	fn from(rejection: PathRejection) -> Self {
		ApiError::MalformedRequest(rejection.body_text())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn store_errors_map_to_client_statuses() {
		let not_found = ApiError::from(StoreError::ProductNotFound(999));
		assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(not_found.to_string(), "Product not found");

		let conflict = ApiError::from(StoreError::DuplicateProduct(1));
		assert_eq!(conflict.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(conflict.to_string(), "Product ID already exists");
	}

	#[test]
	fn malformed_request_is_unprocessable() {
		let err = ApiError::MalformedRequest("missing field `name`".to_string());
		assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
	}
}
