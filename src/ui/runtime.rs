use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use super::App;
use super::state::AppOutcome;
use crate::api::BeerApi;
use crate::worker::WorkerEvent;

/// Construct an [`App`] for the given backend and run it to completion.
pub fn run(api: Arc<dyn BeerApi>) -> Result<AppOutcome> {
	let mut app = App::new(api)?;
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<AppOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		self.hydrate_initial_results();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<AppOutcome> = 'event_loop: loop {
			self.pump_worker_events();
			if self.search.is_loading() || self.is_uploading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(outcome);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		self.worker.shutdown();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Drain everything the worker has produced so far.
	pub(crate) fn pump_worker_events(&mut self) {
		while let Ok(event) = self.worker.try_recv() {
			match event {
				WorkerEvent::Search(result) => self.apply_search_result(result),
				WorkerEvent::Identify { id, outcome } => self.apply_identify_result(id, outcome),
			}
		}
	}

	/// Pump worker events until nothing is in flight or `timeout` elapses.
	///
	/// Returns `true` when the app went idle in time.
	pub fn wait_for_idle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		loop {
			self.pump_worker_events();
			if !self.search.is_loading() && !self.is_uploading() {
				return true;
			}
			if Instant::now() >= deadline {
				return false;
			}
			thread::sleep(Duration::from_millis(10));
		}
	}

	/// Issue the pre-filled query and give it a moment to land before the first frame.
	pub(crate) fn hydrate_initial_results(&mut self) {
		if !self.search.has_issued_query() && !self.search_input.text().trim().is_empty() {
			self.on_query_changed();
		}

		if let Some(timeout) = self.initial_results_timeout
			&& !self.wait_for_idle(timeout)
		{
			debug!("initial results still loading after {timeout:?}");
		}
	}
}
