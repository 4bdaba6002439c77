use axum::{
	Json, Router,
	extract::{State, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use souq_service::{AskRequest, AskResponse, EmbedRequest, EmbedResponse, Error};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/embed", post(embed))
		.route("/v1/ask", post(ask))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn embed(
	State(state): State<AppState>,
	payload: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.embed_text(payload).await?;

	Ok(Json(response))
}

async fn ask(
	State(state): State<AppState>,
	payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.ask(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let message = err.to_string();

		match err {
			Error::InvalidConfig { .. } =>
				ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG", message),
			Error::InvalidRequest { .. } =>
				ApiError::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			Error::Embedding { .. } => {
				tracing::error!(error = %message, "Embedding failed.");

				ApiError::new(StatusCode::BAD_GATEWAY, "EMBEDDING_FAILED", message)
			},
			Error::Query { pool, .. } => {
				tracing::error!(pool = pool.as_str(), error = %message, "Pool query failed.");

				ApiError::new(StatusCode::BAD_GATEWAY, "QUERY_FAILED", message)
			},
			Error::Timeout { timeout_ms } => {
				tracing::error!(timeout_ms, "Pool queries timed out.");

				ApiError::new(StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", message)
			},
			Error::Summarizer { .. } => {
				tracing::error!(error = %message, "Summarizer failed.");

				ApiError::new(StatusCode::BAD_GATEWAY, "SUMMARIZER_FAILED", message)
			},
		}
	}
}
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		ApiError::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", rejection.body_text())
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
