use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::state::AppOutcome;
use super::theme::{self, Theme};
use crate::api::BeerApi;

/// Configures the interactive client before it takes over the terminal.
pub struct BrewUi {
	api: Arc<dyn BeerApi>,
	initial_query: Option<String>,
	image_path: Option<String>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
}

impl BrewUi {
	pub fn new(api: Arc<dyn BeerApi>) -> Self {
		Self {
			api,
			initial_query: None,
			image_path: None,
			ui_config: None,
			theme: None,
		}
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	#[must_use]
	pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
		self.image_path = Some(path.into());
		self
	}

	#[must_use]
	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the [`App`] without running it.
	pub fn build(self) -> Result<App<'static>> {
		let mut app = App::new(self.api)?;
		if let Some(config) = self.ui_config {
			app.set_ui_config(config);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_initial_query(query);
		}
		if let Some(path) = self.image_path {
			app.set_image_path(path);
		}
		Ok(app)
	}

	pub fn run(self) -> Result<AppOutcome> {
		let mut app = self.build()?;
		app.run()
	}
}
