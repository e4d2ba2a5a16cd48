//! Connection settings for the beer collaborators.

use std::time::Duration;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Where the collaborators live and how patient to be with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	/// Scheme, host and port shared by both endpoints.
	pub origin: String,

	/// Whole-request timeout.
	pub timeout: Duration,

	pub connect_timeout: Duration,

	pub user_agent: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			origin: default_origin(),
			timeout: default_timeout(),
			connect_timeout: default_connect_timeout(),
			user_agent: default_user_agent(),
		}
	}
}

impl ApiConfig {
	#[must_use]
	pub fn new(origin: impl Into<String>) -> Self {
		Self {
			origin: origin.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	#[must_use]
	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = timeout;
		self
	}

	#[must_use]
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}
}

fn default_origin() -> String {
	DEFAULT_ORIGIN.to_string()
}

fn default_timeout() -> Duration {
	Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
	Duration::from_secs(10)
}

fn default_user_agent() -> String {
	format!("brewpair/{}", env!("CARGO_PKG_VERSION"))
}
