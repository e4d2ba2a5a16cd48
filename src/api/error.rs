//! Error types for calls to the beer collaborators.

use thiserror::Error;

/// Result type for collaborator calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the search or identify endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never produced a response (connect, timeout, I/O).
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The endpoint answered with a non-success status.
	#[error("HTTP {status}: {body}")]
	Status {
		status: reqwest::StatusCode,
		body: String,
	},

	/// A success response whose body could not be decoded.
	#[error("malformed response body: {0}")]
	Decode(String),

	#[error("invalid service origin '{origin}': {reason}")]
	InvalidOrigin { origin: String, reason: String },

	#[error("failed to build HTTP client: {0}")]
	Build(String),

	/// The background worker is gone, so the request was never sent.
	#[error("background worker is not running")]
	WorkerStopped,
}

impl ApiError {
	/// Status code of the response, when one was received.
	#[must_use]
	pub fn status(&self) -> Option<reqwest::StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Transport(err) => err.status(),
			_ => None,
		}
	}
}
