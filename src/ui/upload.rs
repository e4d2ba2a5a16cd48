use tracing::{debug, warn};

use crate::api::ApiError;
use crate::types::IdentifyResponse;
use crate::worker::WorkerCommand;

use super::App;

impl<'a> App<'a> {
	/// Select the path typed in the image input and hand it to the worker.
	///
	/// A new upload supersedes one still in flight; only the newest answer is shown.
	pub(crate) fn request_upload(&mut self) {
		let path = self.image_input.text().trim().to_string();
		if path.is_empty() {
			self.upload.clear_selection();
		} else {
			self.upload.select(path);
		}

		match self.upload.prepare() {
			Ok(upload) => {
				self.notice = None;
				self.upload_seq = self.upload_seq.wrapping_add(1);
				let id = self.upload_seq;
				self.pending_upload = self
					.worker
					.send(WorkerCommand::Identify { id, upload })
					.then_some(id);
			}
			Err(err) => {
				warn!(error = %err, "upload not started");
				self.notice = Some(err.to_string());
			}
		}
	}

	pub(crate) fn apply_identify_result(
		&mut self,
		id: u64,
		outcome: Result<IdentifyResponse, ApiError>,
	) {
		if self.pending_upload != Some(id) {
			debug!(id, latest = ?self.pending_upload, "dropping superseded upload result");
			return;
		}
		self.pending_upload = None;
		self.upload.complete(outcome);
	}

	#[must_use]
	pub fn is_uploading(&self) -> bool {
		self.pending_upload.is_some()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::path::{Path, PathBuf};
	use std::sync::{Arc, Mutex};
	use std::time::Duration;

	use async_trait::async_trait;
	use tokio::sync::oneshot;

	use super::*;
	use crate::api::{self, BeerApi, ImageUpload};
	use crate::types::{Beer, IdentifiedBeer};
	use crate::worker::{self, WorkerEvent};

	const WAIT: Duration = Duration::from_secs(2);

	/// Holds each identify call until the gate for its file name is released.
	#[derive(Default)]
	struct GatedIdentify {
		gates: Mutex<HashMap<String, oneshot::Receiver<IdentifyResponse>>>,
	}

	impl GatedIdentify {
		fn gate(&self, file_name: &str) -> oneshot::Sender<IdentifyResponse> {
			let (tx, rx) = oneshot::channel();
			self.gates.lock().unwrap().insert(file_name.to_string(), rx);
			tx
		}
	}

	#[async_trait]
	impl BeerApi for GatedIdentify {
		async fn search(&self, _query: &str) -> api::Result<Vec<Beer>> {
			Ok(Vec::new())
		}

		async fn identify(&self, upload: ImageUpload) -> api::Result<IdentifyResponse> {
			let gate = self.gates.lock().unwrap().remove(&upload.file_name);
			match gate {
				Some(rx) => rx.await.map_err(|_| ApiError::Decode("gate dropped".into())),
				None => Ok(IdentifyResponse::default()),
			}
		}
	}

	fn write_image(dir: &Path, name: &str) -> PathBuf {
		let path = dir.join(name);
		std::fs::write(&path, b"jpeg").unwrap();
		path
	}

	fn upload(app: &mut App<'_>, path: &Path) {
		app.set_image_path(path.display().to_string());
		app.request_upload();
	}

	/// Wait for the next identify completion and route it through the app.
	fn deliver_next_identify(app: &mut App<'_>) -> u64 {
		match app.worker.recv_timeout(WAIT).expect("identify event") {
			WorkerEvent::Identify { id, outcome } => {
				app.apply_identify_result(id, outcome);
				id
			}
			other => panic!("expected identify event, got {other:?}"),
		}
	}

	fn identified_name<'b>(app: &'b App<'_>) -> Option<&'b str> {
		app.identified().map(IdentifiedBeer::name)
	}

	fn gated_app() -> (App<'static>, Arc<GatedIdentify>) {
		let api = Arc::new(GatedIdentify::default());
		let worker = worker::spawn(api.clone()).unwrap();
		(App::with_worker(worker), api)
	}

	#[test]
	fn older_upload_finishing_first_keeps_the_newer_one_pending() {
		let dir = tempfile::tempdir().unwrap();
		let first = write_image(dir.path(), "first.jpg");
		let second = write_image(dir.path(), "second.jpg");
		let (mut app, api) = gated_app();
		let first_gate = api.gate("first.jpg");
		let second_gate = api.gate("second.jpg");

		upload(&mut app, &first);
		upload(&mut app, &second);
		assert!(app.is_uploading());

		first_gate.send(IdentifyResponse::named("First")).unwrap();
		assert_eq!(deliver_next_identify(&mut app), 1);
		assert!(app.is_uploading());
		assert_eq!(app.identified(), None);

		second_gate.send(IdentifyResponse::named("Second")).unwrap();
		assert_eq!(deliver_next_identify(&mut app), 2);
		assert!(!app.is_uploading());
		assert_eq!(identified_name(&app), Some("Second"));
	}

	#[test]
	fn late_answer_to_superseded_upload_is_ignored() {
		let dir = tempfile::tempdir().unwrap();
		let first = write_image(dir.path(), "first.jpg");
		let second = write_image(dir.path(), "second.jpg");
		let (mut app, api) = gated_app();
		let first_gate = api.gate("first.jpg");
		let second_gate = api.gate("second.jpg");

		upload(&mut app, &first);
		upload(&mut app, &second);

		second_gate.send(IdentifyResponse::named("Second")).unwrap();
		assert_eq!(deliver_next_identify(&mut app), 2);
		assert!(!app.is_uploading());
		assert_eq!(identified_name(&app), Some("Second"));

		first_gate.send(IdentifyResponse::named("First")).unwrap();
		assert_eq!(deliver_next_identify(&mut app), 1);
		assert!(!app.is_uploading());
		assert_eq!(identified_name(&app), Some("Second"));
	}

	#[test]
	fn stopped_worker_leaves_nothing_pending() {
		let dir = tempfile::tempdir().unwrap();
		let image = write_image(dir.path(), "pint.jpg");
		let (mut app, _api) = gated_app();
		app.worker.shutdown();
		let deadline = std::time::Instant::now() + WAIT;
		while app.worker.send(WorkerCommand::CancelSearch) {
			assert!(std::time::Instant::now() < deadline, "worker did not stop");
			std::thread::sleep(Duration::from_millis(10));
		}

		upload(&mut app, &image);
		assert!(!app.is_uploading());
	}
}
