use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::input::SearchInput;
use super::theme::Theme;
use crate::api::BeerApi;
use crate::identify::UploadAction;
use crate::types::{Beer, IdentifiedBeer};
use crate::worker::{self, WorkerHandle};

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	Image,
}

/// What the user was looking at when they left the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppOutcome {
	/// `true` when the user confirmed a row with Enter.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Beer>,
	pub identified: Option<IdentifiedBeer>,
}

/// Aggregate state of the terminal client.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub image_input: SearchInput<'a>,
	pub focus: Focus,
	pub table_state: TableState,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) search: SearchRuntime,
	pub(crate) upload: UploadAction,
	pub(crate) upload_seq: u64,
	/// Id of the upload whose answer is still awaited. Older answers are dropped.
	pub(crate) pending_upload: Option<u64>,
	/// Warning shown under the identify pane, cleared by the next upload.
	pub(crate) notice: Option<String>,
	pub(crate) initial_results_timeout: Option<Duration>,
	pub(crate) worker: WorkerHandle,
}

impl<'a> App<'a> {
	/// Build the application and start its background worker.
	pub fn new(api: Arc<dyn BeerApi>) -> io::Result<Self> {
		let worker = worker::spawn(api)?;
		Ok(Self::with_worker(worker))
	}

	pub(crate) fn with_worker(worker: WorkerHandle) -> Self {
		let ui = UiConfig::default();
		let mut search_input = SearchInput::new("").with_placeholder(ui.search_placeholder.clone());
		search_input.set_focused(true);
		let mut image_input = SearchInput::new("").with_placeholder("path/to/photo.jpg");
		image_input.set_focused(false);

		Self {
			search_input,
			image_input,
			focus: Focus::default(),
			table_state: TableState::default(),
			ui,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			search: SearchRuntime::default(),
			upload: UploadAction::new(),
			upload_seq: 0,
			pending_upload: None,
			notice: None,
			initial_results_timeout: Some(Duration::from_millis(250)),
			worker,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input = SearchInput::new(self.search_input.text().to_string())
			.with_placeholder(ui.search_placeholder.clone());
		self.search_input.set_focused(self.focus == Focus::Search);
		self.ui = ui;
	}

	/// Pre-fill the query. The search is issued when the app starts running.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
	}

	pub fn set_image_path(&mut self, path: impl Into<String>) {
		self.image_input.set_text(path);
	}

	pub fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
		self.image_input.set_focused(focus == Focus::Image);
	}

	pub(crate) fn toggle_focus(&mut self) {
		let next = match self.focus {
			Focus::Search => Focus::Image,
			Focus::Image => Focus::Search,
		};
		self.set_focus(next);
	}

	#[must_use]
	pub fn results(&self) -> &[Beer] {
		self.search.results()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.search.is_loading()
	}

	#[must_use]
	pub fn identified(&self) -> Option<&IdentifiedBeer> {
		self.upload.identified()
	}

	#[must_use]
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	pub(crate) fn selected_beer(&self) -> Option<&Beer> {
		let selected = self.table_state.selected()?;
		self.results().get(selected)
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.results().len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> AppOutcome {
		AppOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			selection: if accepted {
				self.selected_beer().cloned()
			} else {
				None
			},
			identified: self.identified().cloned(),
		}
	}
}
