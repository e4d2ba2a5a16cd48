//! Background worker that performs collaborator calls off the UI thread.
//!
//! The worker owns a single-threaded tokio runtime on its own OS thread.
//! Commands arrive over an unbounded tokio channel; completions go back over a
//! std channel that the UI loop drains without blocking. At most one search is
//! in flight: a newer search aborts the older one before it is started.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::api::{ApiError, BeerApi, ImageUpload};
use crate::search::{SearchResult, SearchTicket};
use crate::types::IdentifyResponse;

/// Requests understood by the worker.
#[derive(Debug)]
pub enum WorkerCommand {
	/// Execute a search, superseding any search still in flight.
	Search(SearchTicket),
	/// Abort the in-flight search without starting another.
	CancelSearch,
	/// Upload an image to the identify endpoint. The id is echoed back with
	/// the outcome so the owner can drop answers to superseded uploads.
	Identify { id: u64, upload: ImageUpload },
	/// Stop the worker.
	Shutdown,
}

/// Completions emitted back to the owner.
#[derive(Debug)]
pub enum WorkerEvent {
	Search(SearchResult),
	Identify {
		id: u64,
		outcome: Result<IdentifyResponse, ApiError>,
	},
}

/// Owner side of the worker channels.
pub struct WorkerHandle {
	commands: UnboundedSender<WorkerCommand>,
	events: Receiver<WorkerEvent>,
}

/// Start the worker thread.
pub fn spawn(api: Arc<dyn BeerApi>) -> io::Result<WorkerHandle> {
	let (command_tx, command_rx) = unbounded_channel();
	let (event_tx, event_rx) = mpsc::channel();
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?;

	thread::Builder::new()
		.name("brewpair-worker".into())
		.spawn(move || runtime.block_on(worker_loop(api, command_rx, event_tx)))?;

	Ok(WorkerHandle {
		commands: command_tx,
		events: event_rx,
	})
}

impl WorkerHandle {
	/// Queue a command. Returns `false` once the worker has stopped.
	pub fn send(&self, command: WorkerCommand) -> bool {
		self.commands.send(command).is_ok()
	}

	pub fn try_recv(&self) -> Result<WorkerEvent, TryRecvError> {
		self.events.try_recv()
	}

	pub fn recv_timeout(&self, timeout: Duration) -> Result<WorkerEvent, RecvTimeoutError> {
		self.events.recv_timeout(timeout)
	}

	pub fn shutdown(&self) {
		let _ = self.commands.send(WorkerCommand::Shutdown);
	}
}

impl Drop for WorkerHandle {
	fn drop(&mut self) {
		self.shutdown();
	}
}

async fn worker_loop(
	api: Arc<dyn BeerApi>,
	mut commands: UnboundedReceiver<WorkerCommand>,
	events: Sender<WorkerEvent>,
) {
	let mut in_flight: Option<JoinHandle<()>> = None;

	while let Some(command) = commands.recv().await {
		match command {
			WorkerCommand::Search(ticket) => {
				abort_search(&mut in_flight);
				trace!(id = ticket.id, query = %ticket.query, "starting search");
				let api = Arc::clone(&api);
				let events = events.clone();
				in_flight = Some(tokio::spawn(async move {
					let result = ticket.execute(api.as_ref()).await;
					let _ = events.send(WorkerEvent::Search(result));
				}));
			}
			WorkerCommand::CancelSearch => abort_search(&mut in_flight),
			WorkerCommand::Identify { id, upload } => {
				trace!(id, file = %upload.file_name, "starting upload");
				let api = Arc::clone(&api);
				let events = events.clone();
				tokio::spawn(async move {
					let outcome = api.identify(upload).await;
					let _ = events.send(WorkerEvent::Identify { id, outcome });
				});
			}
			WorkerCommand::Shutdown => break,
		}
	}

	abort_search(&mut in_flight);
	debug!("worker stopped");
}

fn abort_search(in_flight: &mut Option<JoinHandle<()>>) {
	if let Some(handle) = in_flight.take() {
		if !handle.is_finished() {
			trace!("aborting superseded search");
		}
		handle.abort();
	}
}
