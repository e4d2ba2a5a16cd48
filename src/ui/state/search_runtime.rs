use tracing::warn;

use crate::api::ApiError;
use crate::search::{SearchResult, SearchSession, SearchTicket};
use crate::types::Beer;
use crate::worker::{WorkerCommand, WorkerHandle};

/// Connects the [`SearchSession`] to the background worker.
///
/// Tickets issued by the session are forwarded to the worker; a query that
/// clears the session also cancels whatever search the worker still runs.
#[derive(Debug, Default)]
pub(crate) struct SearchRuntime {
	session: SearchSession,
	issued: u64,
}

impl SearchRuntime {
	pub(crate) fn update_query(&mut self, worker: &WorkerHandle, query: &str) {
		match self.session.set_query(query) {
			Some(ticket) => self.dispatch(worker, ticket),
			None if self.session.latest_id().is_none() => {
				worker.send(WorkerCommand::CancelSearch);
			}
			None => {}
		}
	}

	pub(crate) fn refresh(&mut self, worker: &WorkerHandle) {
		match self.session.refresh() {
			Some(ticket) => self.dispatch(worker, ticket),
			None => {
				worker.send(WorkerCommand::CancelSearch);
			}
		}
	}

	/// Hand the ticket to the worker. If the worker is gone the ticket fails at
	/// once so the session does not wait for an answer that never comes.
	fn dispatch(&mut self, worker: &WorkerHandle, ticket: SearchTicket) {
		self.issued = self.issued.saturating_add(1);
		let (id, query) = (ticket.id, ticket.query.clone());
		if !worker.send(WorkerCommand::Search(ticket)) {
			warn!(id, query = %query, "search worker stopped; dropping request");
			self.session.apply(SearchResult {
				id,
				query,
				outcome: Err(ApiError::WorkerStopped),
			});
		}
	}

	/// Returns `true` when the result changed what is displayed.
	pub(crate) fn apply(&mut self, result: SearchResult) -> bool {
		self.session.apply(result)
	}

	pub(crate) fn results(&self) -> &[Beer] {
		self.session.results()
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.session.is_loading()
	}

	pub(crate) fn has_issued_query(&self) -> bool {
		self.issued > 0
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use async_trait::async_trait;

	use super::*;
	use crate::api::{self, BeerApi, ImageUpload};
	use crate::types::IdentifyResponse;
	use crate::worker::{self, WorkerEvent};

	struct EmptyApi;

	#[async_trait]
	impl BeerApi for EmptyApi {
		async fn search(&self, _query: &str) -> api::Result<Vec<Beer>> {
			Ok(Vec::new())
		}

		async fn identify(&self, _upload: ImageUpload) -> api::Result<IdentifyResponse> {
			Ok(IdentifyResponse::default())
		}
	}

	fn stopped_worker() -> WorkerHandle {
		let handle = worker::spawn(Arc::new(EmptyApi)).unwrap();
		handle.shutdown();
		let deadline = Instant::now() + Duration::from_secs(2);
		while handle.send(WorkerCommand::CancelSearch) {
			assert!(Instant::now() < deadline, "worker did not stop");
			thread::sleep(Duration::from_millis(10));
		}
		handle
	}

	#[test]
	fn query_against_stopped_worker_does_not_stay_loading() {
		let worker = stopped_worker();
		let mut runtime = SearchRuntime::default();

		runtime.update_query(&worker, "ipa");
		assert!(!runtime.is_loading());
		assert!(runtime.results().is_empty());
		assert!(runtime.has_issued_query());

		runtime.refresh(&worker);
		assert!(!runtime.is_loading());
	}

	#[test]
	fn live_worker_keeps_search_loading_until_applied() {
		let worker = worker::spawn(Arc::new(EmptyApi)).unwrap();
		let mut runtime = SearchRuntime::default();

		runtime.update_query(&worker, "ipa");
		assert!(runtime.is_loading());

		let WorkerEvent::Search(result) = worker.recv_timeout(Duration::from_secs(2)).unwrap() else {
			panic!("expected a search result");
		};
		assert!(runtime.apply(result));
		assert!(!runtime.is_loading());
	}
}
