mod cli;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use brewpair::logging::{self, LogTarget};
use brewpair::ui::theme;
use brewpair::{
	Beer, BeerApi, BrewUi, HttpBeerApi, IdentifiedBeer, SearchSession, UploadAction, app_dirs,
};
use cli::{Commands, OutputFormat, parse_cli, print_beers, print_identified, print_outcome};
use settings::ResolvedConfig;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.command.clone().unwrap_or(Commands::Tui) {
		Commands::Tui => run_tui(cli.output, resolved),
		Commands::Search { query } => run_search(cli.output, resolved, &query),
		Commands::Identify { image } => run_identify(cli.output, resolved, image),
	}
}

/// Run the interactive client and print what the user picked.
fn run_tui(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	let log_dir = app_dirs::get_data_dir().context("failed to resolve data directory")?;
	logging::initialize(LogTarget::File(log_dir), &settings.log_level)?;

	let api = HttpBeerApi::new(settings.api).context("failed to build HTTP client")?;
	let mut ui = BrewUi::new(Arc::new(api))
		.with_ui_config(settings.ui)
		.with_initial_query(settings.initial_query);
	if let Some(name) = &settings.theme {
		ui = ui.with_theme_name(name);
	}

	let outcome = ui.run()?;
	print_outcome(format, &outcome)?;
	Ok(ExitCode::SUCCESS)
}

/// Search once and print whatever the session ends up showing.
///
/// A blank query or a failed request prints "No results" like the interactive
/// client would; the failure itself goes to the log.
fn run_search(format: OutputFormat, settings: ResolvedConfig, query: &str) -> Result<ExitCode> {
	logging::initialize(LogTarget::Stderr, &settings.log_level)?;

	let api = HttpBeerApi::new(settings.api).context("failed to build HTTP client")?;
	let beers = runtime()?.block_on(search_beers(&api, query));

	print_beers(format, &beers)?;
	Ok(ExitCode::SUCCESS)
}

async fn search_beers(api: &dyn BeerApi, query: &str) -> Vec<Beer> {
	let mut session = SearchSession::new();
	session.search(api, query).await.to_vec()
}

fn run_identify(format: OutputFormat, settings: ResolvedConfig, image: PathBuf) -> Result<ExitCode> {
	logging::initialize(LogTarget::Stderr, &settings.log_level)?;

	let api = HttpBeerApi::new(settings.api).context("failed to build HTTP client")?;
	let mut action = UploadAction::new();
	action.select(image);
	let identified = runtime()?.block_on(action.upload(&api))?.clone();

	print_identified(format, &identified)?;
	Ok(match identified {
		IdentifiedBeer::Error => ExitCode::FAILURE,
		_ => ExitCode::SUCCESS,
	})
}

fn runtime() -> Result<tokio::runtime::Runtime> {
	tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()
		.context("failed to start async runtime")
}
