//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file in the data
//! directory. One-shot commands log to stderr.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "BREWPAIR_LOG";
pub const LOG_FILE_NAME: &str = "brewpair.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	/// Truncate and write `brewpair.log` inside this directory.
	File(PathBuf),
}

/// Install the global subscriber. `default_level` applies when `BREWPAIR_LOG` is unset.
///
/// Returns the log file path when logging to a file. Calling this twice is a no-op
/// for the second call.
pub fn initialize(target: LogTarget, default_level: &str) -> Result<Option<PathBuf>> {
	let filter = build_filter(default_level);
	match target {
		LogTarget::Stderr => {
			let _ = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(std::io::stderr)
				.try_init();
			Ok(None)
		}
		LogTarget::File(dir) => {
			fs::create_dir_all(&dir)
				.with_context(|| format!("failed to create log directory {}", dir.display()))?;
			let path = dir.join(LOG_FILE_NAME);
			let file = File::create(&path)
				.with_context(|| format!("failed to create log file {}", path.display()))?;
			let _ = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(file)
				.with_ansi(false)
				.try_init();
			Ok(Some(path))
		}
	}
}

fn build_filter(default_level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(default_level))
		.unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_target_creates_log_file() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("logs");
		let path = initialize(LogTarget::File(nested.clone()), "debug")
			.unwrap()
			.unwrap();
		assert_eq!(path, nested.join(LOG_FILE_NAME));
		assert!(path.exists());
	}
}
