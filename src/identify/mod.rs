//! One-shot "identify a beer from a photo" action.
//!
//! The action is split into [`UploadAction::prepare`] and
//! [`UploadAction::complete`] so the terminal UI can run the network call on
//! the background worker, while [`UploadAction::upload`] does both in one step
//! for the command line.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

use crate::api::{ApiError, BeerApi, ImageUpload};
use crate::types::{IdentifiedBeer, IdentifyResponse};

/// Reasons an upload could not be started. None of them touch the network.
#[derive(Debug, Error)]
pub enum UploadError {
	#[error("Please select an image before uploading.")]
	NoImageSelected,

	#[error("failed to read image {}: {source}", path.display())]
	ReadImage {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Holds the selected image and the last identification.
#[derive(Debug, Default)]
pub struct UploadAction {
	selected: Option<PathBuf>,
	identified: Option<IdentifiedBeer>,
}

impl UploadAction {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn select(&mut self, path: impl Into<PathBuf>) {
		self.selected = Some(path.into());
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	#[must_use]
	pub fn selected(&self) -> Option<&Path> {
		self.selected.as_deref()
	}

	#[must_use]
	pub fn identified(&self) -> Option<&IdentifiedBeer> {
		self.identified.as_ref()
	}

	/// Load the selected image into an upload payload.
	pub fn prepare(&self) -> Result<ImageUpload, UploadError> {
		let path = self.selected.as_deref().ok_or(UploadError::NoImageSelected)?;
		ImageUpload::from_path(path).map_err(|source| UploadError::ReadImage {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Record the collaborator's answer.
	pub fn complete(&mut self, outcome: Result<IdentifyResponse, ApiError>) -> &IdentifiedBeer {
		let identified = match outcome {
			Ok(response) => {
				debug!(?response, "identify response");
				IdentifiedBeer::from_response(response)
			}
			Err(err) => {
				error!(status = ?err.status(), error = %err, "failed to identify beer");
				IdentifiedBeer::Error
			}
		};
		self.identified.insert(identified)
	}

	/// Prepare, send, and record in one step.
	pub async fn upload(&mut self, api: &dyn BeerApi) -> Result<&IdentifiedBeer, UploadError> {
		let upload = self.prepare()?;
		let outcome = api.identify(upload).await;
		Ok(self.complete(outcome))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use async_trait::async_trait;
	use reqwest::StatusCode;
	use tempfile::NamedTempFile;

	use super::*;
	use crate::api::Result as ApiResult;
	use crate::types::Beer;

	struct FakeIdentify {
		response: Mutex<Option<ApiResult<IdentifyResponse>>>,
		uploads: Mutex<Vec<ImageUpload>>,
	}

	impl FakeIdentify {
		fn answering(response: ApiResult<IdentifyResponse>) -> Self {
			Self {
				response: Mutex::new(Some(response)),
				uploads: Mutex::new(Vec::new()),
			}
		}

		fn upload_count(&self) -> usize {
			self.uploads.lock().unwrap().len()
		}
	}

	#[async_trait]
	impl BeerApi for FakeIdentify {
		async fn search(&self, _query: &str) -> ApiResult<Vec<Beer>> {
			Ok(Vec::new())
		}

		async fn identify(&self, upload: ImageUpload) -> ApiResult<IdentifyResponse> {
			self.uploads.lock().unwrap().push(upload);
			self.response
				.lock()
				.unwrap()
				.take()
				.expect("identify called more than once")
		}
	}

	fn image_file() -> NamedTempFile {
		let file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
		std::fs::write(file.path(), b"\xff\xd8\xff fake jpeg").unwrap();
		file
	}

	#[tokio::test]
	async fn upload_without_selection_warns_and_sends_nothing() {
		let api = FakeIdentify::answering(Ok(IdentifyResponse::named("Stout")));
		let mut action = UploadAction::new();

		let err = action.upload(&api).await.unwrap_err();
		assert!(matches!(err, UploadError::NoImageSelected));
		assert_eq!(err.to_string(), "Please select an image before uploading.");
		assert_eq!(api.upload_count(), 0);
		assert!(action.identified().is_none());
	}

	#[tokio::test]
	async fn named_response_is_stored() {
		let file = image_file();
		let api = FakeIdentify::answering(Ok(IdentifyResponse::named("Stout")));
		let mut action = UploadAction::new();
		action.select(file.path());

		let identified = action.upload(&api).await.unwrap();
		assert_eq!(identified.to_string(), "Stout");

		let uploads = api.uploads.lock().unwrap();
		assert_eq!(uploads[0].bytes, b"\xff\xd8\xff fake jpeg");
		assert_eq!(uploads[0].mime, "image/jpeg");
	}

	#[tokio::test]
	async fn nameless_response_is_unknown() {
		let file = image_file();
		let api = FakeIdentify::answering(Ok(IdentifyResponse::default()));
		let mut action = UploadAction::new();
		action.select(file.path());

		let identified = action.upload(&api).await.unwrap();
		assert_eq!(*identified, IdentifiedBeer::Unknown);
	}

	#[tokio::test]
	async fn failed_upload_is_error_marker() {
		let file = image_file();
		let api = FakeIdentify::answering(Err(ApiError::Status {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			body: "model unavailable".into(),
		}));
		let mut action = UploadAction::new();
		action.select(file.path());

		let identified = action.upload(&api).await.unwrap();
		assert_eq!(*identified, IdentifiedBeer::Error);
		assert_eq!(identified.to_string(), "Error occurred");
	}

	#[test]
	fn unreadable_file_is_reported_before_sending() {
		let dir = tempfile::tempdir().unwrap();
		let mut action = UploadAction::new();
		action.select(dir.path().join("missing.png"));

		let err = action.prepare().unwrap_err();
		assert!(matches!(err, UploadError::ReadImage { .. }));
	}

	#[test]
	fn later_outcome_replaces_earlier_one() {
		let mut action = UploadAction::new();
		action.complete(Ok(IdentifyResponse::named("Stout")));
		action.complete(Err(ApiError::Decode("not json".into())));
		assert_eq!(action.identified(), Some(&IdentifiedBeer::Error));
	}
}
