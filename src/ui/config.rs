/// Text used by the UI when rendering titles, prompts and table headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub search_prompt: String,
	pub search_placeholder: String,
	pub headers: Vec<String>,
	pub empty_label: String,
	pub loading_label: String,
	pub identify_title: String,
	pub image_prompt: String,
	pub identified_label: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Brew Pair".to_string(),
			search_prompt: "Search".to_string(),
			search_placeholder: "Search for beers...".to_string(),
			headers: vec!["Name".to_string(), "Style".to_string(), "IBU".to_string()],
			empty_label: "No results".to_string(),
			loading_label: "Loading...".to_string(),
			identify_title: "Identify a Beer".to_string(),
			image_prompt: "Image".to_string(),
			identified_label: "Identified Beer:".to_string(),
		}
	}
}

impl UiConfig {
	/// Replace the table headers, ignoring blank entries.
	#[must_use]
	pub fn with_headers<I, S>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let headers: Vec<String> = headers
			.into_iter()
			.map(Into::into)
			.map(|header| header.trim().to_string())
			.filter(|header| !header.is_empty())
			.collect();
		if !headers.is_empty() {
			self.headers = headers;
		}
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_headers_keep_defaults() {
		let config = UiConfig::default().with_headers(["  ", ""]);
		assert_eq!(config.headers, ["Name", "Style", "IBU"]);

		let config = UiConfig::default().with_headers(["Beer", " Kind "]);
		assert_eq!(config.headers, ["Beer", "Kind"]);
	}
}
