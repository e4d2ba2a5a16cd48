use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use brewpair::api::{ApiConfig, DEFAULT_ORIGIN};
use brewpair::app_dirs;
use brewpair::ui::{UiConfig, theme};

use crate::cli::CliArgs;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	origin: Option<String>,
	timeout_secs: Option<u64>,
	connect_timeout_secs: Option<u64>,
	user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

pub struct ResolvedConfig {
	pub api: ApiConfig,
	pub ui: UiConfig,
	pub initial_query: String,
	pub theme: Option<String>,
	pub log_level: String,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Origin: {}", self.api.origin);
		println!("  Timeout: {}s", self.api.timeout.as_secs());
		println!("  Connect timeout: {}s", self.api.connect_timeout.as_secs());
		println!("  User agent: {}", self.api.user_agent);
		println!("  Title: {}", self.ui.title);
		println!("  Headers: {}", self.ui.headers.join(", "));
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Log level: {}", self.log_level);
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let mut raw = read_raw(&defaults, &cli.config)?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn read_raw(defaults: &[PathBuf], explicit: &[PathBuf]) -> Result<RawConfig> {
	let mut builder = Config::builder();

	for path in defaults {
		builder = builder.add_source(File::from(path.clone()).required(false));
	}
	for path in explicit {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("brewpair")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("ui.headers"),
	);

	let config = builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})?;
	config
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".brewpair.toml"));
		files.push(current_dir.join("brewpair.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(origin) = cli.origin.clone() {
			self.api.origin = Some(origin);
		}
		if let Some(timeout) = cli.timeout {
			self.api.timeout_secs = Some(timeout);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let origin = non_blank(self.api.origin).unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
		let mut api = ApiConfig::new(origin);
		if let Some(secs) = self.api.timeout_secs {
			ensure!(secs > 0, "api.timeout_secs must be greater than zero");
			api = api.with_timeout(Duration::from_secs(secs));
		}
		if let Some(secs) = self.api.connect_timeout_secs {
			ensure!(secs > 0, "api.connect_timeout_secs must be greater than zero");
			api = api.with_connect_timeout(Duration::from_secs(secs));
		}
		if let Some(agent) = non_blank(self.api.user_agent) {
			api = api.with_user_agent(agent);
		}

		let mut ui = UiConfig::default();
		if let Some(title) = non_blank(self.ui.title) {
			ui = ui.with_title(title);
		}
		if let Some(headers) = self.ui.headers {
			ui = ui.with_headers(headers);
		}

		let theme = non_blank(self.ui.theme);
		if let Some(name) = &theme
			&& theme::by_name(name).is_none()
		{
			bail!(
				"unknown theme '{name}' (available: {})",
				theme::names().join(", ")
			);
		}

		let log_level =
			non_blank(self.logging.level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

		Ok(ResolvedConfig {
			api,
			ui,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			log_level,
		})
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
