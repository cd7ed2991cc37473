//! Error type shared by all foodgate crates.

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

pub type FgResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Missing record, or a record outside the actor's country
	NotFound,
	/// The actor's role does not grant the requested action
	PermissionDenied,
	/// No valid identity on the request
	Unauthorized,
	ValidationError(String),
	ConfigError(String),
	Parse,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::debug!("json error: {}", err);
		Self::Parse
	}
}

#[derive(Serialize)]
struct ErrorBody {
	error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
	code: &'static str,
	message: String,
}

impl Error {
	/// HTTP status and stable error code for this error.
	///
	/// Out-of-country records share `NotFound` with missing ones, so the
	/// response never confirms that a record exists elsewhere.
	pub fn status(&self) -> (StatusCode, &'static str) {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "PERMISSION_DENIED"),
			Error::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
			Error::ValidationError(_) | Error::Parse => (StatusCode::BAD_REQUEST, "VALIDATION"),
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
			}
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let (status, code) = self.status();
		let message = match &self {
			Error::NotFound => "Resource not found".to_string(),
			Error::PermissionDenied => "Insufficient permissions for this action".to_string(),
			Error::Unauthorized => "Authentication required".to_string(),
			Error::ValidationError(msg) => msg.clone(),
			Error::Parse => "Malformed request".to_string(),
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				tracing::error!("request failed: {}", self);
				"Internal server error".to_string()
			}
		};

		(status, Json(ErrorBody { error: ErrorDetail { code, message } })).into_response()
	}
}


// vim: ts=4
